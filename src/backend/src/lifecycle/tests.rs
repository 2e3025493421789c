use std::cell::RefCell;
use std::rc::Rc;

use crate::error::TutorialError;
use crate::lifecycle::{report_to, run, Outcome};
use crate::media::load_all;

type Journal = Rc<RefCell<Vec<String>>>;

struct Tracked {
    name: String,
    journal: Journal,
}

impl Tracked {
    fn new(name: &str, journal: &Journal) -> Self {
        journal.borrow_mut().push(format!("acquire {name}"));
        Self {
            name: name.to_string(),
            journal: journal.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.journal.borrow_mut().push(format!("release {}", self.name));
    }
}

fn acquired_and_released(journal: &Journal) -> (usize, usize) {
    let journal = journal.borrow();
    let acquired = journal.iter().filter(|e| e.starts_with("acquire")).count();
    let released = journal.iter().filter(|e| e.starts_with("release")).count();
    (acquired, released)
}

#[test]
fn successful_run_releases_media_before_context() {
    let journal = Journal::default();

    let outcome = run(
        || Ok(Tracked::new("window", &journal)),
        |_| Ok(Tracked::new("image", &journal)),
        |_, _| Ok(()),
    );

    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(
        *journal.borrow(),
        vec![
            "acquire window",
            "acquire image",
            "release image",
            "release window"
        ]
    );
}

#[test]
fn init_failure_skips_every_later_phase() {
    let journal = Journal::default();
    let mut loaded = false;
    let mut presented = false;

    let outcome = run(
        || Err::<Tracked, _>(TutorialError::SubsystemInit("no video device".into())),
        |_| {
            loaded = true;
            Ok(())
        },
        |_, _| {
            presented = true;
            Ok(())
        },
    );

    assert_eq!(outcome, Outcome::InitFailed);
    assert!(!loaded);
    assert!(!presented);
    assert!(journal.borrow().is_empty());
}

#[test]
fn partial_load_failure_leaves_nothing_acquired() {
    let journal = Journal::default();
    let mut presented = false;

    let outcome = run(
        || Ok(Tracked::new("window", &journal)),
        |_| {
            load_all(&["press.bmp", "up.bmp", "missing.bmp", "left.bmp"], |path| {
                let name = path.display().to_string();
                if name == "missing.bmp" {
                    let msg = format!("Unable to load image {name}!");
                    Err(TutorialError::ResourceLoad(msg))
                } else {
                    Ok(Tracked::new(&name, &journal))
                }
            })
        },
        |_, _| {
            presented = true;
            Ok(())
        },
    );

    assert_eq!(outcome, Outcome::LoadFailed);
    assert!(!presented);
    // the loader kept going after the missing file
    assert!(journal.borrow().contains(&"acquire left.bmp".to_string()));
    assert_eq!(acquired_and_released(&journal), (4, 4));
    assert_eq!(journal.borrow().last().map(String::as_str), Some("release window"));
}

#[test]
fn presentation_error_still_cleans_up_once() {
    let journal = Journal::default();

    let outcome = run(
        || Ok(Tracked::new("window", &journal)),
        |_| Ok(Tracked::new("image", &journal)),
        |_, _| Err("Blit failed".to_string()),
    );

    assert_eq!(outcome, Outcome::PresentFailed);
    assert_eq!(acquired_and_released(&journal), (2, 2));
}

#[test]
fn failure_is_reported_on_a_single_line() {
    let mut out = Vec::new();
    let err = TutorialError::ResourceLoad("failed to load 1 of 5 images: Images/up.bmp".into());

    report_to(&mut out, "Cannot load media!", &err.to_string()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Cannot load media! media loading failure: failed to load 1 of 5 images: Images/up.bmp\n"
    );
    assert_eq!(text.matches("Cannot load media!").count(), 1);
}
