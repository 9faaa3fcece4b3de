//! ---------------------------------------------------------------------------
//! Flat-shaded software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Top half is ceiling, bottom half floor; each column then gets one solid
//!   wall slice, so no depth buffer is needed.
//! ---------------------------------------------------------------------------

use super::{CEILING_COLOUR, FLOOR_COLOUR, Renderer, Rgba, WallSlice};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        let split = (h / 2) * w;
        self.scratch[..split].fill(CEILING_COLOUR);
        self.scratch[split..].fill(FLOOR_COLOUR);
    }

    fn draw_slice(&mut self, x: usize, slice: &WallSlice, colour: Rgba) {
        if x >= self.width || self.height == 0 {
            return;
        }
        let y_end = slice.draw_end.min(self.height - 1);
        for y in slice.draw_start..=y_end {
            self.scratch[y * self.width + x] = colour;
        }
    }

    fn end_frame<F, R>(&mut self, submit: F) -> R
    where
        F: FnOnce(&[Rgba], usize, usize) -> R,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
