//! .
//!
//! The icon is a stylized eye: an outer ring, an iris and a pupil, drawn as
//! three concentric circles whose radii are proportional to the edge length.
//! Later circles fully overwrite earlier ones where they overlap, since all
//! fills are opaque.

use {
  crate::{
    drawing::Draw,
    error::Result,
    geometry::{Circle, PixelSpace, Shape}
  },
  euclid::Point2D,
  image::{Rgba, RgbaImage},
  std::path::{Path, PathBuf}
};


/// Edge lengths required by the extension manifest.
pub const SIZES: [u32; 5] = [16, 32, 48, 128, 256];

/// Material Design green; outer ring and pupil fill.
pub const GREEN: Rgba<u8> = Rgba([76, 175, 80, 255]);
/// Slightly darker green, used only for the outer ring's outline.
pub const DARK_GREEN: Rgba<u8> = Rgba([69, 160, 73, 255]);
/// Iris fill.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Center and radii of the three concentric circles, in pixels.
///
/// `outer > iris > pupil` holds for every size of 16 and above; smaller
/// sizes are outside the supported range.
#[derive(Debug, Copy, Clone)]
pub struct Proportions {
  pub center: Point2D<f32, PixelSpace>,
  pub outer: f32,
  pub iris: f32,
  pub pupil: f32
}

impl Proportions {
  pub fn of_size(size: u32) -> Self {
    Self {
      center: Point2D::splat((size / 2) as f32),
      outer: (size as f32 * 0.45).round(),
      iris: (size as f32 * 0.25).round(),
      pupil: (size as f32 * 0.12).round()
    }
  }
}

/// Rasterize the eye icon on a transparent square canvas of the given
/// edge length.
pub fn render(size: u32) -> RgbaImage {
  let p = Proportions::of_size(size);
  let circle = |radius| Circle { center: p.center, radius };
  let mut image = RgbaImage::new(size, size);

  circle(p.outer)
    .style(GREEN)
    .outline(DARK_GREEN, 1.0)
    .draw(&mut image);
  circle(p.iris)
    .style(WHITE)
    .draw(&mut image);
  circle(p.pupil)
    .style(GREEN)
    .draw(&mut image);

  image
}

pub fn file_name(size: u32) -> String {
  format!("icon_{}.png", size)
}

/// Render and write every size into `dir`, in order, overwriting existing
/// files. Returns the written paths.
pub fn write_all(dir: &Path) -> Result<Vec<PathBuf>> {
  SIZES.iter()
    .map(|&size| {
      let path = dir.join(file_name(size));
      render(size).save(&path)?;
      Ok(path)
    })
    .collect()
}
