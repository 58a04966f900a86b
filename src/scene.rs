//! Scene loading — turns animation files into a canvas and sprite list.
//!
//! The format is a flat sequence of whitespace-delimited directives:
//! `CANVAS h w`, `SPRITE …` followed by its frame images, and the optional
//! settings `FPS n`, `SINGLE-STEP`, and `CONTINUOUS`. Keywords match
//! case-insensitively and unrecognized tokens are skipped, which is also how
//! the loader gets back on its feet after a malformed sprite.

use std::fs::File;
use std::io::BufReader;

use anyhow::Result;

use crate::error::LoadError;
use crate::grid::Grid;
use crate::source::Source;
use crate::sprite::Sprite;

/// How the player obtains a key at the end of each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Wait up to `1/fps` seconds, proceeding early on input.
    #[default]
    Continuous,
    /// Block until a key arrives; each keypress steps one tick.
    SingleStep,
}

/// Animation-loop configuration. Threaded explicitly through the loader and
/// the player; there is no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub fps: u32,
    pub step: StepMode,
    pub quit_key: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: 30,
            step: StepMode::Continuous,
            quit_key: 'q',
        }
    }
}

/// The shared canvas plus every sprite read from the inputs, in file order.
///
/// Order is significant: sprites later in the list are composited later each
/// tick, so they draw over earlier ones where they overlap.
#[derive(Debug)]
pub struct Scene {
    pub canvas: Grid<char>,
    pub sprites: Vec<Sprite>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            canvas: Grid::new(0, 0, ' '),
            sprites: Vec::new(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Load every path in order into one scene.
///
/// Files that cannot be opened are reported on stderr and skipped. The first
/// file must begin with a `CANVAS` directive; without it nothing downstream
/// has a coordinate system, so that failure stops the whole load.
pub fn load_files(paths: &[String]) -> Result<(Scene, Settings)> {
    let mut scene = Scene::new();
    let mut settings = Settings::default();
    for (index, path) in paths.iter().enumerate() {
        let mut source = match File::open(path) {
            Ok(file) => Source::from_reader(BufReader::new(file))?,
            Err(e) => {
                eprintln!(
                    "{}",
                    LoadError::FileUnavailable {
                        path: path.clone(),
                        source: e,
                    }
                );
                continue;
            }
        };
        if index == 0 && !read_canvas_header(&mut source, &mut scene) {
            return Err(LoadError::MissingCanvasHeader { path: path.clone() }.into());
        }
        parse_source(&mut source, &mut scene, &mut settings);
    }
    Ok((scene, settings))
}

/// Parse every directive in one source, accumulating into `scene` and
/// `settings`.
///
/// Recoverable problems — malformed sprite headers, frame bodies that end
/// early, directives with bad arguments — are reported on stderr and
/// scanning resumes at the next recognized keyword. Canvas directives are
/// last-write-wins, since the canvas is a single shared entity.
pub fn parse_source(source: &mut Source, scene: &mut Scene, settings: &mut Settings) {
    while let Some(tok) = source.next_token() {
        let keyword = tok.to_ascii_uppercase();
        match keyword.as_str() {
            "CANVAS" => match (uint(source), uint(source)) {
                (Some(height), Some(width)) => {
                    scene.canvas.set_height(height);
                    scene.canvas.set_width(width);
                }
                _ => eprintln!("Ignoring CANVAS directive with invalid dimensions"),
            },
            "SPRITE" => match Sprite::parse(source) {
                Ok(sprite) => scene.sprites.push(sprite),
                Err(e) => eprintln!("Skipping sprite: {e}"),
            },
            "FPS" => match uint(source) {
                Some(fps) if fps > 0 => settings.fps = fps as u32,
                _ => eprintln!("Ignoring FPS directive with invalid rate"),
            },
            "SINGLE-STEP" => settings.step = StepMode::SingleStep,
            "CONTINUOUS" => settings.step = StepMode::Continuous,
            // Anything else is noise between directives; keep scanning.
            _ => {}
        }
    }
}

/// Consume the mandatory `CANVAS h w` opening of the first file. Returns
/// false when the header is absent or unreadable.
fn read_canvas_header(source: &mut Source, scene: &mut Scene) -> bool {
    let is_canvas = source
        .next_token()
        .is_some_and(|t| t.eq_ignore_ascii_case("CANVAS"));
    if !is_canvas {
        return false;
    }
    let (Some(height), Some(width)) = (uint(source), uint(source)) else {
        return false;
    };
    scene.canvas.set_height(height);
    scene.canvas.set_width(width);
    true
}

fn uint(source: &mut Source) -> Option<usize> {
    source.next_token().and_then(|t| t.parse().ok())
}
