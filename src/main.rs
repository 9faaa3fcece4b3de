//! Top-down 2-D view of a tile level with the camera's field of view.
//!
//! Same controls and flags as `view_sw`; every 16th column ray is traced.
//!
//! ```bash
//! cargo run --release --bin map_view -- [--map <file.map>]
//! ```

use anyhow::{Context, ensure};
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use raycaster_rs::{
    config::ViewConfig,
    engine::{RayData, WallSide, cast_columns_serial, plane_scalar},
    renderer::wall_colour,
    sim::{FrameClock, KeyEdge, MotionKey, apply_key},
    world::{Camera, Level, TileMap, Vector},
};

const RAY_STRIDE: usize = 16;
const GRID_COLOUR: u32 = 0x00_303030;
const RAY_COLOUR: u32 = 0x00_E0E040;
const CAMERA_COLOUR: u32 = 0x00_FFFFFF;

fn main() -> anyhow::Result<()> {
    let cfg = ViewConfig::parse();
    let (w, h) = (cfg.width, cfg.height);
    ensure!(w > 0 && h > 0, "window size must be non-zero");

    let level = cfg.load_level().context("cannot load level")?;
    let mut camera = cfg.camera_on(&level)?;
    println!("{}", level.name);

    // ─────────── map‑space → screen‑space transform ────────────
    let cell = (w / level.width()).min(h / level.height()).max(1);
    let offset_x = w.saturating_sub(cell * level.width()) / 2;
    let offset_y = h.saturating_sub(cell * level.height()) / 2;
    let to_screen = |p: Vector| -> (i32, i32) {
        let sx = offset_x as f32 + p.x * cell as f32;
        let sy = (offset_y + cell * level.height()) as f32 - p.y * cell as f32; // north is up
        (sx as i32, sy as i32)
    };

    let mut buffer = vec![0u32; w * h];
    // only every RAY_STRIDE-th ray is drawn, a single thread keeps up
    let mut rays = vec![RayData::default(); w];
    let mut clock = FrameClock::new();

    // ─────────── show window ────────────
    let mut window = Window::new("Tile map", w, h, WindowOptions::default())?;
    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame_time = clock.tick();
        for (key, action) in [
            (Key::W, MotionKey::Forward),
            (Key::S, MotionKey::Backward),
            (Key::A, MotionKey::TurnLeft),
            (Key::D, MotionKey::TurnRight),
        ] {
            if window.is_key_pressed(key, KeyRepeat::No) {
                apply_key(&mut camera, action, KeyEdge::Pressed);
            }
            if window.is_key_released(key) {
                apply_key(&mut camera, action, KeyEdge::Released);
            }
        }
        camera.update(&level, frame_time);
        cast_columns_serial(&camera, &level, &mut rays);

        buffer.fill(0);
        draw_tiles(&mut buffer, w, h, &level, cell, offset_x, offset_y);
        draw_rays(&mut buffer, w, h, &camera, &rays, &to_screen);

        window.update_with_buffer(&buffer, w, h)?;
    }
    Ok(())
}

/// Fill every wall tile with its flat colour and outline open floor.
fn draw_tiles(
    buf: &mut [u32],
    w: usize,
    h: usize,
    level: &Level,
    cell: usize,
    offset_x: usize,
    offset_y: usize,
) {
    for tx in 0..level.width() {
        for ty in 0..level.height() {
            let id = level.tile_at(tx as i32, ty as i32);
            // flip Y so the first row ends up at the bottom
            let x0 = offset_x + tx * cell;
            let y0 = offset_y + (level.height() - 1 - ty) * cell;
            for y in y0..(y0 + cell).min(h) {
                for x in x0..(x0 + cell).min(w) {
                    let edge = x == x0 || y == y0;
                    buf[y * w + x] = match (id, edge) {
                        (0, true) => GRID_COLOUR,
                        (0, false) => 0,
                        (id, _) => wall_colour(id, WallSide::X),
                    };
                }
            }
        }
    }
}

/// Trace every `RAY_STRIDE`-th column ray up to its hit point.
fn draw_rays(
    buf: &mut [u32],
    w: usize,
    h: usize,
    camera: &Camera,
    rays: &[RayData],
    to_screen: &impl Fn(Vector) -> (i32, i32),
) {
    let width = rays.len();
    let (x0, y0) = to_screen(camera.position());
    for (col, ray) in rays.iter().enumerate().step_by(RAY_STRIDE) {
        let dir = camera.ray_direction(plane_scalar(col, width));
        // `distance` is measured along the view direction, so scale by the
        // unnormalised ray direction to reach the hit point
        let hit = camera.position() + dir * ray.distance;
        let (x1, y1) = to_screen(hit);
        draw_line(buf, w, h, x0, y0, x1, y1, RAY_COLOUR);
    }
    let (hx, hy) = to_screen(camera.position() + camera.direction() * 0.5);
    draw_line(buf, w, h, x0, y0, hx, hy, CAMERA_COLOUR);
}

/// Integer Bresenham line‑drawing algorithm.
fn draw_line(
    buf: &mut [u32],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}
