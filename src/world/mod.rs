mod camera;
pub mod level;
mod vector;

pub use camera::{Camera, MAX_MOVEMENT_SPEED, MAX_ROTATION_SPEED};
pub use level::{EMPTY, Level, LevelError, OUTSIDE, TileId, TileMap};
pub use vector::{Rotate, Vector};
