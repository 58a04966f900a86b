//! ASCII Animator — looping sprite animations in the terminal.
//!
//! A scene is a fixed-size character canvas plus an ordered list of sprites,
//! read from a small declarative text format. Each tick the player clears
//! the canvas, composites every sprite's current frame in list order, paints
//! the result, and advances every sprite's position and animation cycle,
//! wrapping at the canvas edges.

pub mod error;
pub mod grid;
pub mod player;
pub mod scene;
pub mod screen;
pub mod source;
pub mod sprite;
