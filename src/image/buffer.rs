//! Owned interleaved 8-bit pixel buffer in row-major layout.
//!
//! One flat allocation with row stride `width * channels`; each pixel is
//! `channels` consecutive component values. Suited as the exchange format
//! between the codec boundary and the convolution engine.
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    w: usize,
    /// Image height in pixels
    h: usize,
    /// Interleaved component values per pixel (>= 1)
    channels: usize,
    /// Backing storage, row-major, stride `w * channels`
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a blank buffer with every component set to 0.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        assert!(channels >= 1, "pixel buffer requires at least one channel");
        Self {
            w,
            h,
            channels,
            data: vec![0u8; w * h * channels],
        }
    }

    /// Construct a buffer from raw interleaved bytes.
    ///
    /// `data` must hold exactly `w * h * channels` components.
    pub fn from_raw(w: usize, h: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        assert!(channels >= 1, "pixel buffer requires at least one channel");
        if data.len() != w * h * channels {
            return Err(Error::DimensionMismatch(format!(
                "expected {} components for a {}x{}x{} buffer, got {}",
                w * h * channels,
                h,
                w,
                channels,
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            channels,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Components between consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.w * self.channels
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the raw interleaved bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride();
        &self.data[start..start + self.stride()]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let stride = self.stride();
        let start = y * stride;
        &mut self.data[start..start + stride]
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.h || col >= self.w {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.w,
                height: self.h,
            });
        }
        Ok(())
    }

    /// Get the `channels` component values of the pixel at (row, col).
    pub fn get_pixel(&self, row: usize, col: usize) -> Result<&[u8]> {
        self.check_bounds(row, col)?;
        let base = row * self.stride() + col * self.channels;
        Ok(&self.data[base..base + self.channels])
    }

    /// Overwrite the pixel at (row, col) with exactly `channels` values.
    pub fn set_pixel(&mut self, row: usize, col: usize, values: &[u8]) -> Result<()> {
        self.check_bounds(row, col)?;
        if values.len() != self.channels {
            return Err(Error::DimensionMismatch(format!(
                "expected {} component values, got {}",
                self.channels,
                values.len()
            )));
        }
        let base = row * self.stride() + col * self.channels;
        self.data[base..base + self.channels].copy_from_slice(values);
        Ok(())
    }

    /// Extract one channel as a deinterleaved `w * h` plane.
    pub fn channel_plane(&self, channel: usize) -> Result<Vec<u8>> {
        if channel >= self.channels {
            return Err(Error::DimensionMismatch(format!(
                "channel {} is out of range for a {}-channel buffer",
                channel, self.channels
            )));
        }
        Ok(self
            .data
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
            .collect())
    }

    /// Copy every pixel's `src_channel` value from `src` into this buffer's
    /// `dest_channel`.
    ///
    /// Fails without mutating when the two buffers disagree in width or
    /// height, or when either channel index is out of range for its buffer.
    pub fn copy_channel(
        &mut self,
        src: &PixelBuffer,
        src_channel: usize,
        dest_channel: usize,
    ) -> Result<()> {
        if src.w != self.w || src.h != self.h {
            return Err(Error::DimensionMismatch(format!(
                "cannot copy a channel from a {}x{} buffer into a {}x{} buffer",
                src.h, src.w, self.h, self.w
            )));
        }
        if src_channel >= src.channels || dest_channel >= self.channels {
            return Err(Error::DimensionMismatch(format!(
                "channel {} -> {} is out of range for {} -> {} channel buffers",
                src_channel, dest_channel, src.channels, self.channels
            )));
        }

        let channels = self.channels;
        for y in 0..self.h {
            let src_row = src.row(y);
            let dst_row = self.row_mut(y);
            for x in 0..src.w {
                dst_row[x * channels + dest_channel] =
                    src_row[x * src.channels + src_channel];
            }
        }
        Ok(())
    }
}
