//! Edge-extending image convolution on interleaved 8-bit pixel buffers.
//!
//! The pipeline is codec → [`PixelBuffer`] → [`convolve`] (with a [`Kernel`])
//! → new [`PixelBuffer`] → codec. Kernels are small row-major float grids
//! with zero-default lookup outside their support; image boundaries use
//! clamp-to-edge sampling, so the result always matches the source
//! resolution.
//!
//! ```no_run
//! use pixel_convolve::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> pixel_convolve::Result<()> {
//! let source = load_image(Path::new("photo.png"))?;
//! let blurred = convolve(&source, &Kernel::gaussian_3x3())?;
//! save_image(&blurred, Path::new("blurred.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convolve;
pub mod error;
pub mod image;
pub mod kernel;

pub use crate::convolve::convolve;
pub use crate::error::{Error, Result};
pub use crate::image::PixelBuffer;
pub use crate::kernel::Kernel;

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::convolve::convolve;
    pub use crate::image::io::{load_image, save_image};
    pub use crate::image::PixelBuffer;
    pub use crate::kernel::Kernel;
}
