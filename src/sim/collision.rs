//! Tile collision with wall sliding.
//!
//! Each axis is tested on its own: the X move is checked against the cell at
//! `(new_x, old_y)`, the Y move against `(old_x, new_y)`. A diagonal push
//! into a wall therefore keeps the component that runs along it.

use crate::world::{TileMap, Vector};

#[inline]
fn tile(coord: f32) -> i32 {
    coord.floor() as i32
}

/// Move `from` by `delta`, dropping whichever axis would enter a wall.
pub fn try_move<M: TileMap + ?Sized>(map: &M, from: Vector, delta: Vector) -> Vector {
    let target = from + delta;
    let mut pos = from;

    if map.is_empty(tile(target.x), tile(from.y)) {
        pos.x = target.x;
    }
    if map.is_empty(tile(from.x), tile(target.y)) {
        pos.y = target.y;
    }
    pos
}
