use std::path::{Path, PathBuf};

use sdl2::keyboard::Keycode;

use crate::error::TutorialError;
use crate::keypress::{KeyPressSurface, KeyPressSurfaces};

#[test]
fn arrow_keys_select_distinct_surfaces() {
    let selected = [Keycode::Up, Keycode::Down, Keycode::Left, Keycode::Right]
        .map(|k| KeyPressSurface::from_key(Some(k)));

    assert_eq!(
        selected,
        [
            KeyPressSurface::Up,
            KeyPressSurface::Down,
            KeyPressSurface::Left,
            KeyPressSurface::Right
        ]
    );
}

#[test]
fn any_other_key_selects_default() {
    let others = [
        Keycode::Z,
        Keycode::Escape,
        Keycode::Return,
        Keycode::Space,
        Keycode::A,
    ];
    for key in others {
        assert_eq!(KeyPressSurface::from_key(Some(key)), KeyPressSurface::Default);
    }
    assert_eq!(KeyPressSurface::from_key(None), KeyPressSurface::Default);
}

#[test]
fn load_indexes_images_by_surface() {
    let surfaces =
        KeyPressSurfaces::load(Path::new("Images"), |p| Ok(p.to_path_buf())).unwrap();

    let expected = ["press.bmp", "up.bmp", "down.bmp", "left.bmp", "right.bmp"];
    for (surface, name) in KeyPressSurface::ALL.into_iter().zip(expected) {
        assert_eq!(surfaces[surface], PathBuf::from("Images").join(name));
    }
}

#[test]
fn load_reports_every_missing_image() {
    let mut attempts = 0;
    let result = KeyPressSurfaces::load(Path::new("Images"), |p| {
        attempts += 1;
        if p.ends_with("up.bmp") || p.ends_with("right.bmp") {
            Err(TutorialError::ResourceLoad(format!(
                "Unable to load image {}!",
                p.display()
            )))
        } else {
            Ok(())
        }
    });

    assert_eq!(attempts, KeyPressSurface::TOTAL);
    match result {
        Err(TutorialError::ResourceLoad(msg)) => {
            assert!(msg.contains("up.bmp"), "{msg}");
            assert!(msg.contains("right.bmp"), "{msg}");
            assert!(!msg.contains("press.bmp"), "{msg}");
        }
        Err(e) => panic!("unexpected error kind: {e}"),
        Ok(_) => panic!("load should fail"),
    }
}
