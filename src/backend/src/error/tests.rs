use crate::error::TutorialError;

#[test]
fn display_names_the_failed_phase() {
    let init = TutorialError::SubsystemInit("No available video device".into());
    let load = TutorialError::ResourceLoad("Unable to load image x.bmp!".into());

    assert_eq!(
        init.to_string(),
        "initialization failure: No available video device"
    );
    assert_eq!(
        load.to_string(),
        "media loading failure: Unable to load image x.bmp!"
    );
    assert_eq!(load.message(), "Unable to load image x.bmp!");
}

#[test]
fn usable_as_boxed_std_error() {
    let boxed: Box<dyn std::error::Error> = TutorialError::SubsystemInit("gone".into()).into();

    assert_eq!(boxed.to_string(), "initialization failure: gone");
}
