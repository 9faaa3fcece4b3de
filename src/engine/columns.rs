//! One ray per screen column.

use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use super::ray::RayData;
use crate::world::{Camera, TileMap};

/// Offset of `column` across the view plane: −1 at the left edge, +1 at the
/// right edge.
///
/// ```text
/// scalar = 2·x / (W − 1) − 1
/// ```
#[inline]
pub fn plane_scalar(column: usize, width: usize) -> f32 {
    if width <= 1 {
        return 0.0;
    }
    (2.0 * column as f32) / (width as f32 - 1.0) - 1.0
}

/// Cast every column of a `rays.len()`-wide view.
///
/// Columns are independent so the work is split across the rayon pool. The
/// camera is only borrowed, so every ray of the frame sees the same state.
pub fn cast_columns<M>(camera: &Camera, map: &M, rays: &mut [RayData])
where
    M: TileMap + Sync + ?Sized,
{
    let width = rays.len();
    rays.par_iter_mut().enumerate().for_each(|(x, ray)| {
        *ray = camera.cast_ray(map, plane_scalar(x, width));
    });
}

/// Sequential variant of [`cast_columns`], for maps that are not `Sync`.
pub fn cast_columns_serial<M>(camera: &Camera, map: &M, rays: &mut [RayData])
where
    M: TileMap + ?Sized,
{
    let width = rays.len();
    for (x, ray) in rays.iter_mut().enumerate() {
        *ray = camera.cast_ray(map, plane_scalar(x, width));
    }
}
