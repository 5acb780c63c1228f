use super::plane::PlaneU8;
use crate::types::Channel;

/// Read-only view over an interleaved 8-bit RGB buffer.
///
/// `stride` counts pixels between row starts, so row `y` occupies bytes
/// `[y * stride * 3, (y * stride + w) * 3)`.
#[derive(Clone, Debug)]
pub struct RgbImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [u8],
}

impl<'a> RgbImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let base = (y * self.stride + x) * 3;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// Interleaved bytes of row `y`, trimmed to the image width.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 3;
        &self.data[start..start + self.w * 3]
    }

    /// Copy one color channel out into a dense single-channel plane.
    pub fn channel_plane(&self, channel: Channel) -> PlaneU8 {
        let mut data = Vec::with_capacity(self.w * self.h);
        let offset = channel.offset();
        for y in 0..self.h {
            let row = self.row(y);
            data.extend(row.chunks_exact(3).map(|px| px[offset]));
        }
        PlaneU8::from_raw(self.w, self.h, data)
    }
}

/// Owned interleaved RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageOwned {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageOwned {
    /// Wrap raw interleaved bytes; `data` must hold `width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height * 3,
            "RGB buffer size does not match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Allocate a zeroed buffer.
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0; width * height * 3])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width * 3;
        &mut self.data[start..start + self.width * 3]
    }

    /// Borrow as a read-only `RgbImageU8` view.
    pub fn as_view(&self) -> RgbImageU8<'_> {
        RgbImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
