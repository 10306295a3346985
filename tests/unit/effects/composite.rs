use super::*;

#[test]
fn transparent_source_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_transparent_destination_returns_source() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn half_alpha_mixes_channels() {
    let out = over([0, 0, 255, 255], [128, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
    assert_eq!(out[2], 127);
}

#[test]
fn length_mismatch_is_rejected() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst, &[0u8; 12]).is_err());
}

#[test]
fn multiply_with_black_darkens_opaque_pixels() {
    let mut buf = vec![200, 100, 50, 255];
    multiply_fill_in_place(&mut buf, Rgba8Premul::from_straight_rgba(0, 0, 0, 255));
    assert_eq!(buf, vec![0, 0, 0, 255]);
}

#[test]
fn multiply_scales_channels_by_tint() {
    let mut buf = vec![200, 100, 50, 255];
    multiply_fill_in_place(&mut buf, Rgba8Premul::from_straight_rgba(255, 128, 0, 255));
    assert_eq!(buf[0], 200);
    assert_eq!(buf[1], 50);
    assert_eq!(buf[2], 0);
    assert_eq!(buf[3], 255);
}

#[test]
fn multiply_with_white_keeps_opaque_pixels() {
    let mut buf = vec![1, 2, 3, 255, 250, 128, 7, 255];
    let before = buf.clone();
    multiply_fill_in_place(&mut buf, Rgba8Premul::from_straight_rgba(255, 255, 255, 255));
    assert_eq!(buf, before);
}

#[test]
fn fill_writes_every_pixel() {
    let mut buf = vec![9u8; 12];
    fill_in_place(&mut buf, Rgba8Premul::from_straight_rgba(255, 0, 0, 128));
    assert_eq!(buf, [128, 0, 0, 128].repeat(3));
}
