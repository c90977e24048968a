//! Spatial convolution of a pixel buffer with a kernel.
//!
//! Boundary handling is edge extension: when a kernel tap falls outside the
//! image, the sampled coordinate is clamped per axis to the nearest valid
//! pixel, so a 3x3 kernel applied at (0, 0) reads pixel (0, 0) for the taps
//! that would land at (-1, -1), (-1, 0) and (0, -1). The output therefore has
//! the same resolution as the source.
//!
//! On 4-channel buffers the last channel is treated as alpha: it is left out
//! of the weighted sum and carried over from the source unchanged.
use crate::error::{Error, Result};
use crate::image::PixelBuffer;
use crate::kernel::Kernel;

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Convolve `src` with `kernel` into a newly allocated buffer.
///
/// Both kernel dimensions must be odd so that a center tap exists; an even
/// dimension fails with [`Error::InvalidKernel`] before any allocation. The
/// source is never mutated.
///
/// Per-channel sums are accumulated in `f32` over the kernel window in
/// row-major tap order and narrowed to `u8` by truncation toward zero,
/// saturating at 0 and 255.
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> Result<PixelBuffer> {
    if !kernel.has_center() {
        return Err(Error::InvalidKernel {
            width: kernel.width(),
            height: kernel.height(),
        });
    }

    let convolved = convolved_channels(src.channels());
    debug!(
        "convolve: {}x{} image, {} of {} channels, {}x{} kernel",
        src.height(),
        src.width(),
        convolved,
        src.channels(),
        kernel.height(),
        kernel.width()
    );

    let mut res = PixelBuffer::new(src.width(), src.height(), src.channels());
    convolve_rows(src, kernel, convolved, &mut res);

    // Channels excluded from the weighted sum carry over verbatim.
    for c in convolved..src.channels() {
        res.copy_channel(src, c, c)?;
    }
    Ok(res)
}

/// Exactly 4 interleaved channels mean RGBA; alpha is not convolved.
#[inline]
fn convolved_channels(channels: usize) -> usize {
    if channels == 4 {
        3
    } else {
        channels
    }
}

/// Fill every row of `res`. Rows are independent, so the parallel build
/// partitions them into disjoint mutable slices with no locking.
fn convolve_rows(src: &PixelBuffer, kernel: &Kernel, convolved: usize, res: &mut PixelBuffer) {
    let stride = res.stride();
    if stride == 0 || res.height() == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        res.as_mut_slice()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| convolve_row(src, kernel, convolved, y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        res.as_mut_slice()
            .chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| convolve_row(src, kernel, convolved, y, row));
    }
}

fn convolve_row(
    src: &PixelBuffer,
    kernel: &Kernel,
    convolved: usize,
    y: usize,
    out_row: &mut [u8],
) {
    let channels = src.channels();
    let vpad = (kernel.height() / 2) as isize;
    let hpad = (kernel.width() / 2) as isize;
    let mut acc = vec![0.0f32; convolved];

    for x in 0..src.width() {
        acc.iter_mut().for_each(|a| *a = 0.0);
        for ky in 0..kernel.height() {
            let py = clamp_index(y as isize - vpad + ky as isize, src.height());
            let src_row = src.row(py);
            for kx in 0..kernel.width() {
                let px = clamp_index(x as isize - hpad + kx as isize, src.width());
                let weight = kernel.get(ky as isize, kx as isize);
                let base = px * channels;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += src_row[base + c] as f32 * weight;
                }
            }
        }
        let out = &mut out_row[x * channels..(x + 1) * channels];
        for (c, &a) in acc.iter().enumerate() {
            // Truncation, not rounding; `as` saturates at the u8 bounds.
            out[c] = a as u8;
        }
    }
}

#[inline]
fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_buffer(w: usize, h: usize, channels: usize) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h, channels);
        for y in 0..h {
            for x in 0..w {
                let px: Vec<u8> = (0..channels)
                    .map(|c| ((y * w + x) * channels + c) as u8)
                    .collect();
                buf.set_pixel(y, x, &px).unwrap();
            }
        }
        buf
    }

    #[test]
    fn identity_kernel_reproduces_source() {
        let src = gradient_buffer(5, 4, 3);
        let res = convolve(&src, &Kernel::identity()).unwrap();
        assert_eq!(res, src);
    }

    #[test]
    fn identity_kernel_reproduces_rgba_source() {
        let src = gradient_buffer(4, 4, 4);
        let res = convolve(&src, &Kernel::identity()).unwrap();
        assert_eq!(res, src);
    }

    #[test]
    fn even_kernel_is_rejected() {
        let src = gradient_buffer(3, 3, 1);
        let even = Kernel::from_rows(&[&[0.25, 0.25], &[0.25, 0.25]]).unwrap();
        assert!(matches!(
            convolve(&src, &even),
            Err(Error::InvalidKernel {
                width: 2,
                height: 2
            })
        ));
        let wide = Kernel::from_rows(&[&[0.5, 0.5]]).unwrap();
        assert!(convolve(&src, &wide).is_err());
    }

    #[test]
    fn alpha_channel_is_copied_not_convolved() {
        let mut src = PixelBuffer::new(3, 3, 4);
        for y in 0..3 {
            for x in 0..3 {
                let a = (17 * (y * 3 + x + 1)) as u8;
                src.set_pixel(y, x, &[(x * 80) as u8, (y * 80) as u8, 128, a])
                    .unwrap();
            }
        }
        let res = convolve(&src, &Kernel::box_blur(3).unwrap()).unwrap();
        assert_eq!(
            res.channel_plane(3).unwrap(),
            src.channel_plane(3).unwrap()
        );
        // The color channels did change somewhere.
        assert_ne!(
            res.channel_plane(0).unwrap(),
            src.channel_plane(0).unwrap()
        );
    }

    #[test]
    fn uniform_image_survives_normalized_kernels_at_borders() {
        let mut src = PixelBuffer::new(4, 3, 1);
        for y in 0..3 {
            for x in 0..4 {
                src.set_pixel(y, x, &[200]).unwrap();
            }
        }
        for kernel in [Kernel::gaussian_3x3(), Kernel::box_blur(3).unwrap()] {
            let res = convolve(&src, &kernel).unwrap();
            assert_eq!(res, src, "uniform image changed under {kernel:?}");
        }
    }

    #[test]
    fn accumulator_is_truncated_not_rounded() {
        let mut src = PixelBuffer::new(1, 1, 1);
        src.set_pixel(0, 0, &[51]).unwrap();
        let half = Kernel::from_rows(&[&[0.5]]).unwrap();
        // 51 * 0.5 = 25.5 truncates to 25.
        let res = convolve(&src, &half).unwrap();
        assert_eq!(res.get_pixel(0, 0).unwrap(), &[25]);
    }

    #[test]
    fn negative_sums_saturate_at_zero() {
        let mut src = PixelBuffer::new(2, 1, 1);
        src.set_pixel(0, 0, &[10]).unwrap();
        src.set_pixel(0, 1, &[200]).unwrap();
        let neg = Kernel::from_rows(&[&[-1.0]]).unwrap();
        let res = convolve(&src, &neg).unwrap();
        assert_eq!(res.get_pixel(0, 0).unwrap(), &[0]);
        assert_eq!(res.get_pixel(0, 1).unwrap(), &[0]);
    }

    #[test]
    fn oversized_sums_saturate_at_255() {
        let mut src = PixelBuffer::new(1, 1, 1);
        src.set_pixel(0, 0, &[200]).unwrap();
        let double = Kernel::from_rows(&[&[2.0]]).unwrap();
        let res = convolve(&src, &double).unwrap();
        assert_eq!(res.get_pixel(0, 0).unwrap(), &[255]);
    }

    #[test]
    fn clamp_index_pins_to_valid_range() {
        assert_eq!(clamp_index(-3, 5), 0);
        assert_eq!(clamp_index(0, 5), 0);
        assert_eq!(clamp_index(4, 5), 4);
        assert_eq!(clamp_index(7, 5), 4);
        assert_eq!(clamp_index(2, 0), 0);
    }
}
