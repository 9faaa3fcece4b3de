//! Raycasting core: DDA grid walk and per-column casting.

mod columns;
pub mod dda;
mod ray;

pub use columns::{cast_columns, cast_columns_serial, plane_scalar};
pub use dda::DdaAxis;
pub use ray::{RayData, WallSide};
