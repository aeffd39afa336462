//! Rasterization of styled shapes onto an RGBA framebuffer. Coverage is
//! sampled from the shape's signed distance function at pixel centers, with
//! a one-pixel antialiased rim; fully covered pixels with an opaque fill
//! overwrite the framebuffer exactly.

use {
  crate::{
    geometry::{BoundingBox, PixelSpace, Shape},
    sdf::SDF
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage}
};

#[cfg(test)] mod tests;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

/// Border drawn around a shape's edge, distinct from its fill.
#[derive(Debug, Copy, Clone)]
pub struct Outline {
  pub color: Rgba<u8>,
  pub width: f32
}

/// A shape together with its fill color and optional outline.
#[derive(Debug, Copy, Clone)]
pub struct Styled<S> {
  pub shape: S,
  pub fill: Rgba<u8>,
  pub outline: Option<Outline>
}

impl <S> Styled<S> {
  pub fn outline(mut self, color: Rgba<u8>, width: f32) -> Self {
    self.outline = Some(Outline { color, width });
    self
  }
}

impl <S> SDF<f32> for Styled<S> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 { self.shape.sdf(pixel) } }

impl <S> BoundingBox<f32, PixelSpace> for Styled<S>
  where S: BoundingBox<f32, PixelSpace> {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    let bounding_box = self.shape.bounding_box();
    match self.outline {
      // the outline band extends past the shape's edge
      Some(Outline { width, .. }) => bounding_box.inflate(width / 2.0, width / 2.0),
      None => bounding_box
    }
  }
}

// clip the shape's bounding box against the framebuffer
fn clip_bounding_box(
  bounding_box: Box2D<f32, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32())
}

impl <S> Draw<RgbaImage> for Styled<S> where S: Shape {
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let bounding_box = match clip_bounding_box(self.bounding_box(), resolution) {
      Some(x) => x,
      None => return // no intersection with the framebuffer at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        let sample = pixel.to_f32() + V2::splat(0.5);
        let sdf = self.shape.sdf(sample);

        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, *pixel, self.fill);
        if let Some(Outline { color, width }) = self.outline {
          *pixel = sdf_overlay_aa(sdf.abs() - width / 2.0, *pixel, color);
        }
      });
  }
}

fn sdf_overlay_aa(sdf: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf) // antialias over one pixel
    .clamp(0.0, 1.0);
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}
