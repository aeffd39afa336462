//! Procedural placeholder icons: a stylized eye drawn as three concentric
//! circles (outer ring, iris, pupil) on a transparent canvas, at the five
//! edge lengths the extension manifest asks for.
//!
//! [`geometry`] and [`sdf`] describe shapes as signed distance functions in
//! pixel coordinates, [`drawing`] rasterizes them onto an
//! [`image::RgbaImage`] with one-pixel antialiasing, and [`icon`] composes
//! the eye itself.
//!
//! # Basic usage
//! ```no_run
//! use eye_icons::{error::Result, icon};
//!
//! fn main() -> Result<()> {
//!   for size in icon::SIZES {
//!     icon::render(size).save(icon::file_name(size))?;
//!   }
//!   Ok(())
//! }
//! ```

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod icon;
