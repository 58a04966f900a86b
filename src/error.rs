//! Load-time error kinds.
//!
//! Only the missing canvas header is fatal, and only for the first file;
//! every other kind is reported on stderr and the loader moves on.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// A listed file could not be opened. The source is skipped.
    #[error("could not open file \"{path}\": {source}")]
    FileUnavailable { path: String, source: io::Error },

    /// The first file did not begin with `CANVAS <height> <width>`. Without
    /// it nothing downstream has a coordinate system, so loading stops.
    #[error("first file \"{path}\" should begin with canvas information")]
    MissingCanvasHeader { path: String },

    /// A `SPRITE` header was missing fields, non-numeric, or had a negative
    /// starting position. The sprite is dropped and scanning resumes.
    #[error("malformed sprite definition")]
    MalformedSprite,

    /// A sprite's frame body ended before the declared number of image
    /// lines. Treated like a malformed sprite.
    #[error("frame body ended after {have} of {want} lines")]
    IncompleteFrame { have: usize, want: usize },
}
