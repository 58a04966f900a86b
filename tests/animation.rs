//! End-to-end tests: parse a scene from text, drive the player over an
//! in-memory screen, and check what each tick painted.

use std::collections::VecDeque;

use anyhow::Result;

use ascii_animator::grid::Grid;
use ascii_animator::player::Player;
use ascii_animator::scene::{parse_source, Scene, Settings, StepMode};
use ascii_animator::screen::{KeyWait, Screen};
use ascii_animator::source::Source;

/// Records every paint and feeds a scripted key per tick; once the script
/// runs out it answers with the quit key.
struct RecordingScreen {
    paints: Vec<String>,
    keys: VecDeque<Option<char>>,
}

impl RecordingScreen {
    fn ticks(n: usize) -> Self {
        Self {
            paints: Vec::new(),
            keys: std::iter::repeat(None).take(n.saturating_sub(1)).collect(),
        }
    }
}

impl Screen for RecordingScreen {
    fn paint(&mut self, canvas: &Grid<char>) -> Result<()> {
        let mut buf = Vec::new();
        canvas.render(&mut buf)?;
        self.paints.push(String::from_utf8(buf)?);
        Ok(())
    }

    fn wait_key(&mut self, _wait: KeyWait) -> Result<Option<char>> {
        Ok(self.keys.pop_front().unwrap_or(Some('q')))
    }
}

fn load(text: &str) -> (Scene, Settings) {
    let mut scene = Scene::new();
    let mut settings = Settings::default();
    parse_source(&mut Source::from_str(text), &mut scene, &mut settings);
    (scene, settings)
}

fn play(text: &str, ticks: usize) -> Vec<String> {
    let (scene, settings) = load(text);
    let mut player = Player::new(scene, settings, RecordingScreen::ticks(ticks));
    player.run().unwrap();
    player.into_screen().paints
}

#[test]
fn single_sprite_walks_down_and_wraps() {
    let paints = play("CANVAS 3 3\nSPRITE 1 1 0 0 1 0 1 1\nX\n", 4);
    assert_eq!(
        paints,
        vec![
            "X  \n   \n   \n", // initial position
            "   \nX  \n   \n", // after one tick
            "   \n   \nX  \n", // after two
            "X  \n   \n   \n", // wrapped back to the top
        ]
    );
}

#[test]
fn later_sprite_wins_at_overlapping_cells() {
    let paints = play(
        "CANVAS 2 2\n\
         SPRITE 1 1 0 0 0 0 1 1\n\
         A\n\
         SPRITE 1 1 0 0 0 0 1 1\n\
         B\n",
        1,
    );
    assert_eq!(paints, vec!["B \n  \n"]);
}

#[test]
fn sprite_with_frozen_cycle_never_changes_frame() {
    let paints = play(
        "CANVAS 1 1\n\
         SPRITE 1 1 0 0 0 0 2 0\n\
         A\n\
         B\n",
        3,
    );
    assert_eq!(paints, vec!["A\n", "A\n", "A\n"]);
}

#[test]
fn animation_cycle_advances_by_its_frame_rate() {
    // Two frames over a two-tick cycle: the image alternates every tick.
    let paints = play(
        "CANVAS 1 1\n\
         SPRITE 1 1 0 0 0 0 2 2\n\
         A\n\
         B\n",
        4,
    );
    assert_eq!(paints, vec!["A\n", "B\n", "A\n", "B\n"]);
}

#[test]
fn sprite_straddling_the_edge_wraps_mid_image() {
    let paints = play(
        "CANVAS 2 4\n\
         SPRITE 1 3 0 3 0 0 1 1\n\
         abc\n",
        1,
    );
    assert_eq!(paints, vec!["bc a\n    \n"]);
}

#[test]
fn zero_frame_sprite_is_inert() {
    let paints = play("CANVAS 2 2\nSPRITE 1 1 0 0 1 1 0 1\n", 2);
    assert_eq!(paints, vec!["  \n  \n", "  \n  \n"]);
}

#[test]
fn quit_key_stops_the_loop_after_a_full_tick() {
    let (scene, settings) = load("CANVAS 1 1\nSPRITE 1 1 0 0 0 0 1 1\nX\n");
    let screen = RecordingScreen {
        paints: Vec::new(),
        keys: VecDeque::from([Some('x'), Some('q'), None]),
    };
    let mut player = Player::new(scene, settings, screen);
    player.run().unwrap();
    // A non-quit key does not stop the loop; the quit key does, and the
    // tick it follows still painted.
    assert_eq!(player.into_screen().paints.len(), 2);
}

#[test]
fn degenerate_canvas_refuses_to_run() {
    let (scene, settings) = load("SPRITE 1 1 0 0 0 0 1 1\nX\n");
    let mut player = Player::new(scene, settings, RecordingScreen::ticks(1));
    assert!(player.run().is_err());
}

#[test]
fn single_step_settings_reach_the_player_unchanged() {
    let (_, settings) = load("CANVAS 1 1\nFPS 5\nSINGLE-STEP\n");
    assert_eq!(settings.fps, 5);
    assert_eq!(settings.step, StepMode::SingleStep);
}
