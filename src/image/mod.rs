//! Image module: interleaved RGB views, owned channel planes, and I/O.
//!
//! Components
//! - `rgb`: read-only `RgbImageU8<'a>` view over interleaved 8-bit RGB rows
//!   plus the owned `RgbImageOwned` buffer, with per-channel plane
//!   extraction.
//! - `plane`: owned single-channel buffers (`PlaneU8`, `PlaneF32`) used as
//!   the working format of the per-channel pipeline.
//! - `io`: helpers for loading RGB images, rendering label maps to PNG, and
//!   writing JSON reports.
//!
//! Design goals
//! - Keep hot loops simple and cache-friendly via row access.
//! - Make ownership explicit: views borrow external data; planes own their
//!   storage and are private to one channel job.
pub mod io;
pub mod plane;
pub mod rgb;

pub use self::plane::{PlaneF32, PlaneU8};
pub use self::rgb::{RgbImageOwned, RgbImageU8};
