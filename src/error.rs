//! Two kinds of failure matter to the driver: [`Error::MissingEncoder`],
//! raised when the `image` crate was built without the codec needed for the
//! output format, is recovered at the top level with installation guidance;
//! everything else propagates unhandled.

use std::fmt;

#[derive(Debug)]
pub enum Error {
  /// The required image codec is not compiled into this build.
  MissingEncoder(image::error::UnsupportedError),
  Image(image::ImageError),
  Io(std::io::Error),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    match e {
      image::ImageError::Unsupported(e) => Error::MissingEncoder(e),
      e => Error::Image(e)
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::Io(e)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      MissingEncoder(e) => write!(f, "image codec unavailable: {}", e),
      Image(e) => write!(f, "{}", e),
      Io(e) => write!(f, "{}", e),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use Error::*;
    match self {
      MissingEncoder(e) => Some(e),
      Image(e) => Some(e),
      Io(e) => Some(e),
    }
  }
}
