use {
  super::*,
  crate::geometry::Circle
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

#[test] fn filled_circle() {
  let mut image = RgbaImage::new(64, 64);
  // center on a pixel center, so the rim sample below lands exactly on the edge
  Circle { center: Point2D::splat(32.5), radius: 16.0 }
    .style(RED)
    .draw(&mut image);

  // interior pixels are overwritten exactly
  assert_eq!(*image.get_pixel(32, 32), RED);
  // pixels outside the bounding box are untouched
  assert_eq!(image.get_pixel(0, 0).0[3], 0);
  // the rim is antialiased: pixel center at distance == radius, half coverage
  let rim = image.get_pixel(48, 32);
  assert!(rim.0[3] > 0 && rim.0[3] < 255);
}

#[test] fn outline_band() {
  let mut image = RgbaImage::new(64, 64);
  Circle { center: Point2D::splat(32.0), radius: 16.0 }
    .style(RED)
    .outline(BLUE, 2.0)
    .draw(&mut image);

  assert_eq!(*image.get_pixel(32, 32), RED);
  // just inside the edge lies within the outline band
  assert_eq!(*image.get_pixel(32 + 15, 32), BLUE);
}

#[test] fn clipped_by_framebuffer() {
  let mut image = RgbaImage::new(32, 32);
  // bounding box extends far past the framebuffer on every side
  Circle { center: Point2D::splat(0.0), radius: 64.0 }
    .style(RED)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(0, 0), RED);
  assert_eq!(*image.get_pixel(31, 31), RED);
}

#[test] fn off_screen_is_noop() {
  let mut image = RgbaImage::new(32, 32);
  Circle { center: Point2D::new(-100.0, -100.0), radius: 10.0 }
    .style(RED)
    .draw(&mut image);
  assert!(image.pixels().all(|pixel| *pixel == Rgba([0, 0, 0, 0])));
}
