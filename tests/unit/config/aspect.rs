use super::*;

#[test]
fn presets_have_expected_sizes() {
    assert_eq!(
        AspectRatio::Wide2x1.size().unwrap(),
        CanvasSize {
            width: 1200,
            height: 600
        }
    );
    assert_eq!(
        AspectRatio::Square.size().unwrap(),
        CanvasSize {
            width: 1000,
            height: 1000
        }
    );
    for r in AspectRatio::PRESETS {
        let size = r.size().unwrap();
        assert_eq!(AspectRatio::for_size(size), r);
    }
}

#[test]
fn custom_sizes_are_validated() {
    assert!(
        AspectRatio::Custom {
            width: 0,
            height: 5
        }
        .size()
        .is_err()
    );
    let r = AspectRatio::for_size(CanvasSize {
        width: 640,
        height: 480,
    });
    assert_eq!(
        r,
        AspectRatio::Custom {
            width: 640,
            height: 480
        }
    );
}

#[test]
fn parses_labels_and_custom_sizes() {
    assert_eq!("16:9".parse::<AspectRatio>().unwrap(), AspectRatio::Wide16x9);
    assert_eq!("Square".parse::<AspectRatio>().unwrap(), AspectRatio::Square);
    assert_eq!(
        "800x418".parse::<AspectRatio>().unwrap(),
        AspectRatio::Custom {
            width: 800,
            height: 418
        }
    );
    assert!("5:4".parse::<AspectRatio>().is_err());
    assert!("0x10".parse::<AspectRatio>().is_err());
}
