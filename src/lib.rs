//! Tile-grid raycaster.
//!
//! * [`world`]    – level grid, 2-D vectors and the [`world::Camera`].
//! * [`engine`]   – DDA ray casting, one ray per screen column.
//! * [`sim`]      – acceleration / rotation state machine and collision.
//! * [`renderer`] – turns ray hits into coloured wall slices.
//! * [`hud`]      – terminal game log.
//! * [`config`]   – command-line options for the viewers.

pub mod config;
pub mod engine;
pub mod hud;
pub mod renderer;
pub mod sim;
pub mod world;
