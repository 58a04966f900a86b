//! Sprite — a moving figure with an animation cycle.
//!
//! A sprite has a fractional position and velocity on the canvas and an
//! ordered list of equally-sized frames. Each tick its position advances by
//! its speed and its frame pointer by its frame rate, both wrapping; drawing
//! composites the current frame onto the canvas at the sprite's position.

use crate::error::LoadError;
use crate::grid::Grid;
use crate::source::Source;

#[derive(Debug, Clone, Default)]
pub struct Sprite {
    height: usize,
    width: usize,
    row_pos: f64,
    col_pos: f64,
    v_speed: f64,
    h_speed: f64,
    /// Animation frames advanced per tick, usually fractional.
    frame_rate: f64,
    /// Accumulator into `frames`; truncated to an index only at draw time,
    /// so fractional frame rates pace the cycle exactly.
    current_frame: f64,
    frames: Vec<Grid<char>>,
}

impl Sprite {
    /// Parse one sprite definition from `source`.
    ///
    /// The header is eight whitespace-delimited fields in fixed order:
    /// height, width, row, col, vertical speed, horizontal speed, frame
    /// count, and frames per animation cycle. The frame images follow
    /// immediately, each exactly `height` lines, with short lines padded and
    /// long lines truncated to `width`.
    ///
    /// The sprite is built as a new value and returned only when everything
    /// parsed; a failure partway through leaves nothing behind.
    pub fn parse(source: &mut Source) -> Result<Self, LoadError> {
        let height = token::<usize>(source)?;
        let width = token::<usize>(source)?;
        let row_pos = token::<f64>(source)?;
        let col_pos = token::<f64>(source)?;
        if row_pos < 0.0 || col_pos < 0.0 {
            return Err(LoadError::MalformedSprite);
        }
        let v_speed = token::<f64>(source)?;
        let h_speed = token::<f64>(source)?;
        let frame_count = token::<usize>(source)?;
        let frames_per_cycle = token::<f64>(source)?;
        let frame_rate = if frames_per_cycle == 0.0 {
            0.0
        } else {
            frame_count as f64 / frames_per_cycle
        };

        let mut sprite = Sprite {
            height,
            width,
            row_pos,
            col_pos,
            v_speed,
            h_speed,
            frame_rate,
            current_frame: 0.0,
            frames: Vec::with_capacity(frame_count),
        };
        for _ in 0..frame_count {
            sprite.add_frame(Grid::parse_rows(source, height, width)?);
        }
        Ok(sprite)
    }

    /// Append a frame to the end of the animation cycle. Frames read by
    /// [`Sprite::parse`] are already `height × width`; frames added by hand
    /// must match.
    pub fn add_frame(&mut self, frame: Grid<char>) {
        self.frames.push(frame);
    }

    /// Set the sprite's height, resizing every existing frame to match.
    pub fn set_height(&mut self, height: usize) {
        if height != self.height {
            for frame in &mut self.frames {
                frame.set_height(height);
            }
            self.height = height;
        }
    }

    /// Set the sprite's width, resizing every existing frame to match.
    pub fn set_width(&mut self, width: usize) {
        if width != self.width {
            for frame in &mut self.frames {
                frame.set_width(width);
            }
            self.width = width;
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Fractional `(row, col)` position of the top-left corner.
    pub fn position(&self) -> (f64, f64) {
        (self.row_pos, self.col_pos)
    }

    /// Fractional index of the frame shown at the next draw.
    pub fn current_frame(&self) -> f64 {
        self.current_frame
    }

    /// Move the sprite forward one tick: the position changes by its speed
    /// and the frame pointer by its frame rate, each wrapping into range.
    /// Canvas dimensions must be positive and the sprite must have at least
    /// one frame; the player guards both.
    pub fn advance(&mut self, canvas_height: usize, canvas_width: usize) {
        self.row_pos = wrap(self.row_pos + self.v_speed, 0.0, canvas_height as f64);
        self.col_pos = wrap(self.col_pos + self.h_speed, 0.0, canvas_width as f64);
        self.current_frame = wrap(
            self.current_frame + self.frame_rate,
            0.0,
            self.frames.len() as f64,
        );
    }

    /// Composite the current frame onto `canvas`, top-left corner at
    /// `(floor(row_pos), floor(col_pos))`. Cells past the canvas edge wrap
    /// through the canvas's modulo addressing, so a sprite straddling an
    /// edge reappears on the opposite side mid-image.
    pub fn draw(&self, canvas: &mut Grid<char>) {
        let Some(frame) = self.frames.get(self.current_frame as usize) else {
            return;
        };
        let top = self.row_pos.floor() as i64;
        let left = self.col_pos.floor() as i64;
        for r in 0..self.height as i64 {
            for c in 0..self.width as i64 {
                canvas.set(top + r, left + c, *frame.get(r, c));
            }
        }
    }
}

fn token<T: std::str::FromStr>(source: &mut Source) -> Result<T, LoadError> {
    source
        .next_token()
        .and_then(|t| t.parse().ok())
        .ok_or(LoadError::MalformedSprite)
}

/// Wrap `x` into the half-open interval `[lo, hi)`.
///
/// Defined for any real `x`, however far out of range and in either
/// direction; `hi` must be strictly greater than `lo`.
fn wrap(x: f64, lo: f64, hi: f64) -> f64 {
    lo + (x - lo).rem_euclid(hi - lo)
}
