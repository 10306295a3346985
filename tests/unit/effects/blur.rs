use super::*;

#[test]
fn kernel_radius_covers_three_sigma() {
    assert_eq!(kernel_radius(0.0), 0);
    assert_eq!(kernel_radius(-2.0), 0);
    assert_eq!(kernel_radius(f64::NAN), 0);
    assert_eq!(kernel_radius(1.0), 3);
    assert_eq!(kernel_radius(2.5), 8);
}

#[test]
fn zero_sigma_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = gaussian_blur_rgba8_premul(&src, 1, 2, 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn constant_image_is_unchanged() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    let out = gaussian_blur_rgba8_premul(&src, w, h, 2.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn energy_spreads_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_rgba8_premul(&src, w, h, 2, 1.2).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);
    assert!(out[center + 3] < 255);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 6);
}

#[test]
fn mismatched_length_is_rejected() {
    assert!(gaussian_blur_rgba8_premul(&[0u8; 7], 1, 2, 1.0).is_err());
}
