use super::*;
use crate::render::surface::DEFAULT_MAX_SURFACE_PIXELS;

fn paint(s: &mut Surface, px: [u8; 4]) {
    for d in s.data_mut().chunks_exact_mut(4) {
        d.copy_from_slice(&px);
    }
}

fn setup() -> (Surface, LayerSurfaces) {
    let size = CanvasSize::new(2, 2).unwrap();
    (
        Surface::new(size, DEFAULT_MAX_SURFACE_PIXELS).unwrap(),
        LayerSurfaces::new(size, DEFAULT_MAX_SURFACE_PIXELS).unwrap(),
    )
}

#[test]
fn icon_occludes_text() {
    let (mut visible, mut layers) = setup();
    paint(layers.get_mut(Layer::Background), [0, 0, 0, 255]);
    paint(layers.get_mut(Layer::Text), [255, 0, 0, 255]);
    paint(layers.get_mut(Layer::Icon), [0, 255, 0, 255]);
    composite(&mut visible, &layers).unwrap();
    assert_eq!(&visible.data()[0..4], &[0, 255, 0, 255]);
}

#[test]
fn watermark_stays_on_top() {
    let (mut visible, mut layers) = setup();
    paint(layers.get_mut(Layer::Icon), [0, 255, 0, 255]);
    paint(layers.get_mut(Layer::Watermark), [0, 0, 255, 255]);
    composite(&mut visible, &layers).unwrap();
    assert_eq!(&visible.data()[0..4], &[0, 0, 255, 255]);
}

#[test]
fn visible_surface_is_cleared_first() {
    let (mut visible, layers) = setup();
    paint(&mut visible, [9, 9, 9, 255]);
    composite(&mut visible, &layers).unwrap();
    assert!(visible.data().iter().all(|&b| b == 0));
}

#[test]
fn repeated_composites_are_identical() {
    let (mut visible, mut layers) = setup();
    paint(layers.get_mut(Layer::Background), [10, 20, 30, 255]);
    paint(layers.get_mut(Layer::Text), [100, 0, 0, 100]);
    paint(layers.get_mut(Layer::Icon), [0, 50, 0, 60]);
    composite(&mut visible, &layers).unwrap();
    let first = visible.data().to_vec();
    composite(&mut visible, &layers).unwrap();
    assert_eq!(visible.data(), first.as_slice());
}
