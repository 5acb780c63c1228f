/// Symmetric, normalised Gaussian taps.
///
/// `mask_size` must be odd and at least 3; `sigma` must be positive.
pub fn gaussian_taps(mask_size: usize, sigma: f32) -> Vec<f32> {
    assert!(
        mask_size >= 3 && mask_size % 2 == 1,
        "mask size must be an odd integer >= 3, got {mask_size}"
    );
    assert!(sigma > 0.0, "sigma must be positive, got {sigma}");

    let radius = (mask_size / 2) as isize;
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
    let mut taps: Vec<f32> = (-radius..=radius)
        .map(|d| {
            let d = d as f32;
            (-d * d * inv_two_sigma_sq).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}
