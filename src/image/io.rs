//! I/O helpers for RGB images, label renderings, and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/BMP/etc. into an owned RGB buffer.
//! - `save_rgb_image`: write an owned RGB buffer to disk.
//! - `save_label_image`: render a label map to a PNG, one stable color per
//!   region.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbImageOwned;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageOwned, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbImageOwned::new(width, height, img.into_raw()))
}

/// Save an owned RGB buffer to disk; the format follows the file extension.
pub fn save_rgb_image(buffer: &RgbImageOwned, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let view = buffer.as_view();
    let image: RgbImage =
        RgbImage::from_raw(view.w as u32, view.h as u32, view.data.to_vec())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Render a label map as a color image, assigning each region a stable
/// pseudo-random color derived from its label.
pub fn save_label_image(
    labels: &[u32],
    width: usize,
    height: usize,
    path: &Path,
) -> Result<(), String> {
    if labels.len() != width * height {
        return Err(format!(
            "Label map length {} does not match {width}x{height}",
            labels.len()
        ));
    }
    let mut out = RgbImageOwned::zeroed(width, height);
    for y in 0..height {
        let row = out.row_mut(y);
        for x in 0..width {
            let [r, g, b] = label_color(labels[y * width + x]);
            row[x * 3] = r;
            row[x * 3 + 1] = g;
            row[x * 3 + 2] = b;
        }
    }
    save_rgb_image(&out, path)
}

/// Stable color for a label: a 64-bit finalizer hash folded to RGB. Equal
/// labels map to equal colors across runs and processes.
pub fn label_color(label: u32) -> [u8; 3] {
    let mut z = (label as u64).wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    [(z >> 16) as u8, (z >> 8) as u8, z as u8]
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
