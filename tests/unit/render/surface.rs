use super::*;
use crate::foundation::core::Color;

#[test]
fn zero_and_oversized_dims_are_allocation_errors() {
    assert!(matches!(
        checked_dims(0, 10, DEFAULT_MAX_SURFACE_PIXELS),
        Err(CoverError::SurfaceAllocation { .. })
    ));
    assert!(matches!(
        checked_dims(70_000, 10, DEFAULT_MAX_SURFACE_PIXELS),
        Err(CoverError::SurfaceAllocation { .. })
    ));
    assert!(matches!(
        checked_dims(100, 100, 9_999),
        Err(CoverError::SurfaceAllocation { width: 100, height: 100, .. })
    ));
    assert_eq!(checked_dims(100, 50, 5_000).unwrap(), (100, 50));
}

#[test]
fn new_surface_is_transparent_and_clear_resets() {
    let mut s = Surface::new(CanvasSize::new(3, 2).unwrap(), DEFAULT_MAX_SURFACE_PIXELS).unwrap();
    assert_eq!((s.width(), s.height()), (3, 2));
    assert!(s.data().iter().all(|&b| b == 0));
    s.data_mut().fill(7);
    s.clear();
    assert!(s.data().iter().all(|&b| b == 0));
}

#[test]
fn painter_fills_rect() {
    let mut painter = Painter::default();
    let pm = painter
        .paint(4, 4, DEFAULT_MAX_SURFACE_PIXELS, |ctx| {
            ctx.set_paint(Color::rgb(255, 0, 0).to_cpu());
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, 2.0, 4.0));
            Ok(())
        })
        .unwrap();
    let data = pm.data_as_u8_slice();
    assert_eq!(&data[0..4], &[255, 0, 0, 255]);
    // Right half untouched.
    assert_eq!(&data[12..16], &[0, 0, 0, 0]);
}
