//! Rendering abstraction layer.
//!
//! *The raycasting core never touches a pixel buffer.* It produces one
//! [`RayData`] per column; this module turns each into a [`WallSlice`] and a
//! colour and hands them to a type that implements [`Renderer`].

use crate::engine::{RayData, WallSide};
use crate::world::TileId;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

pub const CEILING_COLOUR: Rgba = 0x00_121212;
pub const FLOOR_COLOUR: Rgba = 0x00_1C1C1C;

/// Vertical extent of one wall column on screen, rows `draw_start..=draw_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSlice {
    pub draw_start: usize,
    pub draw_end: usize,
}

impl WallSlice {
    /// Project a hit onto a `height`-row screen: a wall one tile away fills
    /// the whole column, farther walls shrink with `1 / distance`.
    pub fn new(ray: &RayData, height: usize) -> Self {
        let max_y = height.saturating_sub(1);
        let wall_h = if ray.distance > 0.0 {
            // float → usize casts saturate, huge heights clamp below
            ((max_y as f32 / ray.distance) as usize).min(max_y)
        } else {
            max_y
        };
        let draw_start = (max_y - wall_h) / 2;
        Self {
            draw_start,
            draw_end: draw_start + wall_h,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.draw_end - self.draw_start + 1
    }
}

/// Flat colour of a wall material; Y-side faces are drawn at half brightness.
pub fn wall_colour(wall_id: TileId, side: WallSide) -> Rgba {
    let (r, g, b): (u32, u32, u32) = match wall_id {
        1 => (0xFF, 0x00, 0x00),
        2 => (0x00, 0xFF, 0x00),
        3 => (0x00, 0x00, 0xFF),
        4 => (0xFF, 0xFF, 0xFF),
        _ => (0xFF, 0xFF, 0x00),
    };
    let (r, g, b) = match side {
        WallSide::X => (r, g, b),
        WallSide::Y => (r / 2, g / 2, b / 2),
    };
    (r << 16) | (g << 8) | b
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and paint
    /// ceiling and floor.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Draw one solid wall column.
    fn draw_slice(&mut self, x: usize, slice: &WallSlice, colour: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` runs exactly once per frame.
    fn end_frame<F, R>(&mut self, submit: F) -> R
    where
        F: FnOnce(&[Rgba], usize, usize) -> R;
}

/// Convenience blanket-impl: draw a whole view from per-column hits.
pub trait RendererExt: Renderer {
    fn draw_view(&mut self, height: usize, rays: &[RayData]) {
        for (x, ray) in rays.iter().enumerate() {
            let slice = WallSlice::new(ray, height);
            self.draw_slice(x, &slice, wall_colour(ray.wall_id, ray.wall_side));
        }
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

mod software;
pub use software::Software;
