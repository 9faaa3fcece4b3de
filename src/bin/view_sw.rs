//! First-person software-rendered view of a tile level.
//!
//! Controls  W/↑ = forward  S/↓ = back  A/← D/→ = turn  Esc = quit
//!
//! ```bash
//! cargo run --release -- --map assets/classic.map --hud
//! ```

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, ensure};
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use raycaster_rs::{
    config::ViewConfig,
    engine::{RayData, cast_columns},
    hud::{
        FrameStats, GameLog, warning_line,
        escape::{ERASE_IN_DISPLAY, HIDE_CURSOR, SHOW_CURSOR},
    },
    renderer::{Renderer, RendererExt, Software},
    sim::{FrameClock, KeyEdge, MotionKey, apply_key},
};

const BINDINGS: [(Key, MotionKey); 8] = [
    (Key::W, MotionKey::Forward),
    (Key::Up, MotionKey::Forward),
    (Key::S, MotionKey::Backward),
    (Key::Down, MotionKey::Backward),
    (Key::A, MotionKey::TurnLeft),
    (Key::Left, MotionKey::TurnLeft),
    (Key::D, MotionKey::TurnRight),
    (Key::Right, MotionKey::TurnRight),
];

fn main() -> anyhow::Result<()> {
    let cfg = ViewConfig::parse();
    let (w, h) = (cfg.width, cfg.height);
    ensure!(w > 0 && h > 0, "window size must be non-zero");

    let level = cfg.load_level().context("cannot load level")?;
    if let Err(e) = level.validate_closed() {
        eprintln!(
            "{}",
            warning_line(&format!("{e}; rays leaving the grid stop at its edge"))
        );
    }
    let mut camera = cfg.camera_on(&level)?;

    println!("Level: {} ({}x{})", level.name, level.width(), level.height());

    let mut win = Window::new("ray-casting", w, h, WindowOptions::default())?;
    win.set_target_fps(60);

    let mut renderer = Software::default();
    let mut rays = vec![RayData::default(); w];

    let mut clock = FrameClock::new();
    let mut stats = if cfg.hud {
        FrameStats::new()
    } else {
        FrameStats::with_interval(Duration::from_secs(3))
    };

    if cfg.hud {
        print!("{HIDE_CURSOR}");
    }

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let frame_time = clock.tick();

        if let Some(avg) = stats.record(frame_time) {
            if cfg.hud {
                GameLog::print(avg, &camera)?;
            } else {
                println!("avg frame: {:.2} ms  ({:.1} FPS)", avg * 1000.0, 1.0 / avg);
            }
        }

        /* ---------------- input edges → intents ------------------------ */
        for &(key, action) in &BINDINGS {
            if win.is_key_pressed(key, KeyRepeat::No) {
                apply_key(&mut camera, action, KeyEdge::Pressed);
            }
            if win.is_key_released(key) {
                apply_key(&mut camera, action, KeyEdge::Released);
            }
        }

        /* ---------------- integrate, then cast ------------------------- */
        camera.update(&level, frame_time);
        cast_columns(&camera, &level, &mut rays);

        /* ---------------- draw ----------------------------------------- */
        renderer.begin_frame(w, h);
        renderer.draw_view(h, &rays);
        renderer.end_frame(|fb, w, h| win.update_with_buffer(fb, w, h))?;
    }

    if cfg.hud {
        print!("{ERASE_IN_DISPLAY}{SHOW_CURSOR}");
        io::stdout().flush()?;
    }
    Ok(())
}
