use {
  euclid::Point2D,
  crate::geometry::PixelSpace
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}
