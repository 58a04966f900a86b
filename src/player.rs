//! Player — the animation tick loop.
//!
//! Drives a loaded scene one tick at a time: clear the canvas, composite
//! every sprite in list order (draw, then advance), paint, then wait for
//! input. Strictly single-threaded; the key wait at the end of each tick is
//! the only place the loop suspends. Runs until the quit key arrives, and a
//! tick always runs to completion before quit is checked.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::scene::{Scene, Settings, StepMode};
use crate::screen::{KeyWait, Screen};

pub struct Player<S: Screen> {
    scene: Scene,
    settings: Settings,
    screen: S,
}

impl<S: Screen> Player<S> {
    pub fn new(scene: Scene, settings: Settings, screen: S) -> Self {
        Self {
            scene,
            settings,
            screen,
        }
    }

    /// Run the animation until the quit key is pressed.
    ///
    /// In single-step mode each tick waits for a keypress; in continuous
    /// mode it waits up to `1/fps` seconds, proceeding early on input.
    pub fn run(&mut self) -> Result<()> {
        let height = self.scene.canvas.height();
        let width = self.scene.canvas.width();
        if height == 0 || width == 0 {
            bail!("canvas is {height}x{width}: no drawable area");
        }
        let wait = match self.settings.step {
            StepMode::SingleStep => KeyWait::Blocking,
            StepMode::Continuous => {
                if self.settings.fps == 0 {
                    bail!("frame rate must be positive");
                }
                KeyWait::Timeout(Duration::from_secs(1) / self.settings.fps)
            }
        };

        loop {
            self.tick()?;
            if self.screen.wait_key(wait)? == Some(self.settings.quit_key) {
                return Ok(());
            }
        }
    }

    /// One animation step: clear the canvas, then for every sprite in list
    /// order composite its current frame and advance it, then paint.
    ///
    /// Later sprites draw over earlier ones at overlapping cells. Sprites
    /// without frames have nothing to show and no frame pointer to wrap, so
    /// they are skipped entirely.
    pub fn tick(&mut self) -> Result<()> {
        let height = self.scene.canvas.height();
        let width = self.scene.canvas.width();
        self.scene.canvas.clear();
        for sprite in &mut self.scene.sprites {
            if sprite.frame_count() == 0 {
                continue;
            }
            sprite.draw(&mut self.scene.canvas);
            sprite.advance(height, width);
        }
        self.screen.paint(&self.scene.canvas)
    }

    /// Give the screen back, e.g. to inspect what a test screen recorded.
    pub fn into_screen(self) -> S {
        self.screen
    }
}
