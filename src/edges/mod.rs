//! Pixel-graph edge enumeration for one color channel.
//!
//! The segmentation graph is the 8-connected grid: every pixel is joined to
//! its in-bounds neighbours, each unordered pair appearing exactly once.
//! Edges carry byte weights (absolute intensity difference on the selected
//! channel) and are stored in a packed record that reconstructs the second
//! endpoint from a direction code, keeping the sort working set small.
//!
//! Weights are 8-bit by construction, which makes a stable counting sort
//! the natural ordering pass; see [`sort_edges_by_weight`].

mod builder;

pub use builder::{
    build_plane_edges, exact_edge_count, sort_edges_by_weight, Edge, FORWARD_OFFSETS,
};
