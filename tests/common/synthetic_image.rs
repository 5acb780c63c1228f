/// Generates a uniformly colored image.
pub fn uniform_rgb(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        img.extend_from_slice(&color);
    }
    img
}

/// Generates an image split at column `split_x`: `left` color before it,
/// `right` color from it on.
pub fn split_rgb(
    width: usize,
    height: usize,
    split_x: usize,
    left: [u8; 3],
    right: [u8; 3],
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(split_x <= width, "split must lie inside the image");
    let mut img = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for x in 0..width {
            img.extend_from_slice(if x < split_x { &left } else { &right });
        }
    }
    img
}

/// Generates a two-color checkerboard with `cell`-sized squares.
pub fn checkerboard_rgb(
    width: usize,
    height: usize,
    cell: usize,
    a: [u8; 3],
    b: [u8; 3],
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");
    let mut img = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let color = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
            img.extend_from_slice(&color);
        }
    }
    img
}

/// Generates a 1-row horizontal ramp: pixel `x` has intensity `x` on all
/// three channels. `width` must stay within the 8-bit range.
pub fn ramp_rgb(width: usize) -> Vec<u8> {
    assert!(width > 0 && width <= 256, "ramp must fit the 8-bit range");
    let mut img = Vec::with_capacity(width * 3);
    for x in 0..width {
        img.extend_from_slice(&[x as u8; 3]);
    }
    img
}
