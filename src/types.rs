use serde::{Deserialize, Serialize};

/// Color channel selector for per-channel segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in the order the pipeline processes them.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel within an interleaved RGB pixel.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Final output of a full-color segmentation run.
///
/// `labels` is in canonical form: each entry is the pixel index of its
/// region's representative, so `labels[labels[i] as usize] == labels[i]`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SegmentationResult {
    #[serde(skip)]
    pub labels: Vec<u32>,
    pub width: usize,
    pub height: usize,
    pub region_count: usize,
    pub latency_ms: f64,
}
