use pixel_convolve::PixelBuffer;

/// Single-channel checkerboard with one-pixel cells: 255 where `row + col`
/// is even, 0 elsewhere.
pub fn checkerboard(width: usize, height: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = PixelBuffer::new(width, height, 1);
    for y in 0..height {
        for x in 0..width {
            let val = if (x + y) & 1 == 0 { 255u8 } else { 0u8 };
            img.set_pixel(y, x, &[val]).unwrap();
        }
    }
    img
}

/// Buffer with every pixel set to the same component values.
pub fn uniform(width: usize, height: usize, components: &[u8]) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height, components.len());
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(y, x, components).unwrap();
        }
    }
    img
}

/// RGBA buffer with position-dependent color and alpha.
pub fn rgba_gradient(width: usize, height: usize) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height, 4);
    for y in 0..height {
        for x in 0..width {
            let px = [
                (x * 37) as u8,
                (y * 53) as u8,
                ((x + y) * 11) as u8,
                (255 - (x * height + y)) as u8,
            ];
            img.set_pixel(y, x, &px).unwrap();
        }
    }
    img
}
