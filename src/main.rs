use std::process;

use anyhow::{bail, Result};

use ascii_animator::{player::Player, scene::load_files, screen::TerminalScreen};

const USAGE: &str = "ascii-animator <file> [<file> ...]";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("ASCII Animator — looping sprite animations in the terminal\n\nUsage:\n  {USAGE}");
    }

    let (scene, settings) = load_files(&paths)?;

    let need_h = scene.canvas.height();
    let need_w = scene.canvas.width();
    if need_h == 0 || need_w == 0 {
        bail!("canvas is {need_h}x{need_w}: no drawable area");
    }
    let (term_w, term_h) = crossterm::terminal::size()?;
    if (term_w as usize) < need_w || (term_h as usize) < need_h {
        bail!("Terminal too small: need {need_w}x{need_h}, have {term_w}x{term_h}");
    }

    let screen = TerminalScreen::new()?;
    Player::new(scene, settings, screen).run()
}
