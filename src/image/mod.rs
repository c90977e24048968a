pub mod buffer;
pub mod io;

pub use self::buffer::PixelBuffer;
