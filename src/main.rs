//! Asteroids Lite entry point
//!
//! Native builds run headless: the autopilot flies one round at a simulated
//! 60 fps and the outcome is logged.
//!
//! Usage: `asteroids-lite [settings.json] [max_frames] [rotation|uniform]`

use std::path::Path;

use asteroids_lite::consts::NOMINAL_FRAME_MS;
use asteroids_lite::renderer::draw_list;
use asteroids_lite::{Game, MotionScaling, Settings};

/// Frames to simulate when no limit is given (five minutes at 60 fps)
const DEFAULT_MAX_FRAMES: u64 = 5 * 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Asteroids Lite (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let max_frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);
    if let Some(name) = args.next() {
        match MotionScaling::from_str(&name) {
            Some(scaling) => settings.motion_scaling = scaling,
            None => log::warn!(
                "Unknown motion scaling '{}', keeping {}",
                name,
                settings.motion_scaling.as_str()
            ),
        }
    }

    let mut game = Game::new(settings);
    game.idle_mode = true;

    let settings = game.settings();
    log::info!(
        "Arena {}x{}, motion scaling {}, bullets {:?}",
        settings.arena.width,
        settings.arena.height,
        settings.motion_scaling.as_str(),
        settings.bullet_hit
    );

    let mut kills = 0u64;
    let mut frames = 0u64;
    while frames < max_frames && !game.state().is_game_over() {
        let events = game.frame(frames as f64 * NOMINAL_FRAME_MS);
        kills += u64::from(events.asteroids_destroyed);
        frames += 1;

        if frames % 600 == 0 {
            let state = game.state();
            log::info!(
                "t={}s score={} lives={} asteroids={} bullets={}",
                frames / 60,
                state.score,
                state.lives,
                state.asteroids.len(),
                state.bullets.len()
            );
        }
    }

    let state = game.state();
    let list = draw_list(state);
    log::debug!(
        "Last frame: {} line vertices ({} bytes), {} triangle vertices ({} bytes)",
        list.lines.len(),
        list.line_bytes().len(),
        list.triangles.len(),
        list.triangle_bytes().len()
    );

    println!(
        "seed={} frames={} score={} kills={} lives={} game_over={}",
        state.seed,
        frames,
        state.score,
        kills,
        state.lives,
        state.is_game_over()
    );
}
