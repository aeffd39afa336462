//! .
//!
//! All shapes are described in pixel coordinates, with the origin of the
//! coordinate system in the top-left corner of the canvas.

use {
  euclid::{Box2D, Point2D, Vector2D as V2},
  crate::{drawing::Styled, sdf::SDF}
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, PixelSpace> {
  /// Attach a fill color, making the shape drawable.
  fn style(self, fill: image::Rgba<u8>) -> Styled<Self> where Self: Sized {
    Styled { shape: self, fill, outline: None }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, PixelSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Circle {
  pub center: Point2D<f32, PixelSpace>,
  pub radius: f32
}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    (pixel - self.center).length() - self.radius
  }
}

impl BoundingBox<f32, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    Box2D::new(
      self.center - V2::splat(self.radius),
      self.center + V2::splat(self.radius)
    )}}
