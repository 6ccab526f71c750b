use super::*;

#[test]
fn filled_surface_has_solid_color() {
    let surface = Surface::filled(3, 2, Rgba([7, 8, 9, 255])).unwrap();
    assert_eq!((surface.width(), surface.height()), (3, 2));
    assert!(
        surface
            .pixels()
            .pixels()
            .all(|p| p.0 == [7, 8, 9, 255])
    );
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(Surface::filled(0, 4, Rgba([0, 0, 0, 255])).is_err());
    assert!(Surface::filled(4, 0, Rgba([0, 0, 0, 255])).is_err());
}

#[test]
fn blit_replaces_destination_pixels_without_blending() {
    let mut dst = Surface::filled(4, 4, Rgba([0, 0, 0, 255])).unwrap();
    // Semi-transparent source must land verbatim: blit copies, never blends.
    let src = Surface::filled(2, 2, Rgba([200, 100, 50, 128])).unwrap();
    dst.blit(&src, 1, 1).unwrap();

    assert_eq!(dst.pixels().get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(dst.pixels().get_pixel(1, 1).0, [200, 100, 50, 128]);
    assert_eq!(dst.pixels().get_pixel(2, 2).0, [200, 100, 50, 128]);
    assert_eq!(dst.pixels().get_pixel(3, 3).0, [0, 0, 0, 255]);
}

#[test]
fn blit_outside_destination_is_rejected() {
    let mut dst = Surface::filled(4, 4, Rgba([0, 0, 0, 255])).unwrap();
    let src = Surface::filled(2, 2, Rgba([1, 1, 1, 255])).unwrap();

    assert!(dst.blit(&src, 3, 0).is_err());
    assert!(dst.blit(&src, 0, 3).is_err());
    assert!(dst.blit(&src, u32::MAX, 0).is_err());

    // Failed blit leaves the destination untouched.
    assert!(dst.pixels().pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn exact_fit_blit_fills_the_destination() {
    let mut dst = Surface::filled(4, 4, Rgba([0, 0, 0, 255])).unwrap();
    let src = Surface::filled(4, 4, Rgba([9, 9, 9, 255])).unwrap();
    dst.blit(&src, 0, 0).unwrap();
    assert_eq!(dst, src);
}
