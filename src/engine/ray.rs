//! Single-ray DDA cast against a [`TileMap`].

use super::dda::DdaAxis;
use crate::world::{Camera, EMPTY, TileId, TileMap, Vector};

/// Which family of grid lines the ray crossed last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WallSide {
    /// A vertical line (`x = const`); the face points along ±X.
    #[default]
    X,
    /// A horizontal line (`y = const`); the face points along ±Y.
    Y,
}

/// Result of one cast.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RayData {
    /// Perpendicular distance from the camera plane to the wall.
    pub distance: f32,
    pub wall_id: TileId,
    pub wall_side: WallSide,
}

impl Camera {
    /// Direction of the ray through `plane_scalar` (−1 = left screen edge,
    /// +1 = right screen edge).
    #[inline]
    pub fn ray_direction(&self, plane_scalar: f32) -> Vector {
        self.direction + self.plane * plane_scalar
    }

    /// Walk the grid from the camera until the first non-empty tile.
    ///
    /// Terminates for any map that reads as solid outside its playable area;
    /// [`crate::world::Level`] reports out-of-range cells as solid.
    pub fn cast_ray<M: TileMap + ?Sized>(&self, map: &M, plane_scalar: f32) -> RayData {
        let ray = self.ray_direction(plane_scalar);

        let mut x = DdaAxis::new(self.position.x, ray.x);
        let mut y = DdaAxis::new(self.position.y, ray.y);

        let mut wall_id = EMPTY;
        let mut wall_side = WallSide::X;

        while wall_id == EMPTY {
            // strict `<`: X wins exact ties
            if x.init_dist < y.init_dist {
                x.advance();
                wall_side = WallSide::X;
            } else {
                y.advance();
                wall_side = WallSide::Y;
            }
            wall_id = map.tile_at(x.tile, y.tile);
        }

        // the loop always overshoots by one step on the hit axis
        let distance = match wall_side {
            WallSide::X => x.init_dist - x.delta_dist,
            WallSide::Y => y.init_dist - y.delta_dist,
        };

        RayData {
            distance,
            wall_id,
            wall_side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Level;
    use std::cell::RefCell;
    use std::f32::consts::FRAC_PI_2;

    fn room(n: usize) -> Level {
        let mut tiles = vec![0; n * n];
        for x in 0..n {
            for y in 0..n {
                if x == 0 || y == 0 || x == n - 1 || y == n - 1 {
                    tiles[x * n + y] = 1;
                }
            }
        }
        Level::new("ROOM", n, n, tiles).unwrap()
    }

    /// Records every cell the ray visits.
    struct Recorder<'a> {
        inner: &'a Level,
        visited: RefCell<Vec<(i32, i32)>>,
    }

    impl TileMap for Recorder<'_> {
        fn tile_at(&self, x: i32, y: i32) -> TileId {
            self.visited.borrow_mut().push((x, y));
            self.inner.tile_at(x, y)
        }
    }

    #[test]
    fn straight_ahead_in_five_by_five_room() {
        let lvl = room(5);
        let cam = Camera::new(2.5, 2.5, 0.0, FRAC_PI_2);
        let hit = cam.cast_ray(&lvl, 0.0);
        assert_eq!(hit.wall_id, 1);
        assert_eq!(hit.wall_side, WallSide::X);
        // centre of tile 2 to the face of tile 4
        assert!((hit.distance - 1.5).abs() < 1e-5, "distance {}", hit.distance);
    }

    #[test]
    fn facing_along_y_hits_y_side() {
        let lvl = room(7);
        let cam = Camera::new(3.5, 3.5, FRAC_PI_2, FRAC_PI_2);
        let hit = cam.cast_ray(&lvl, 0.0);
        assert_eq!(hit.wall_side, WallSide::Y);
        assert!((hit.distance - 2.5).abs() < 1e-4);

        let cam = Camera::new(3.5, 3.5, -FRAC_PI_2, FRAC_PI_2);
        let hit = cam.cast_ray(&lvl, 0.0);
        assert_eq!(hit.wall_side, WallSide::Y);
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn corridor_distance_in_range() {
        // corridor open along +X, walls at y = 0 and y = 2, end wall at x = d + 1
        for d in 2..10 {
            let mut rows: Vec<Vec<TileId>> = Vec::new();
            rows.push(vec![1, 1, 1]);
            for _ in 0..d {
                rows.push(vec![1, 0, 1]);
            }
            rows.push(vec![3, 3, 3]);
            let rows: Vec<&[TileId]> = rows.iter().map(Vec::as_slice).collect();
            let lvl = Level::from_rows("CORRIDOR", &rows).unwrap();

            let cam = Camera::new(1.5, 1.5, 0.0, FRAC_PI_2);
            let hit = cam.cast_ray(&lvl, 0.0);
            let d = d as f32;
            assert_eq!(hit.wall_id, 3);
            assert_eq!(hit.wall_side, WallSide::X);
            assert!(
                (d - 1.0..=d).contains(&hit.distance),
                "corridor {d}: {}",
                hit.distance
            );
        }
    }

    #[test]
    fn wall_id_is_reported() {
        let lvl = Level::from_rows(
            "ID",
            &[
                &[1, 1, 1, 1, 1],
                &[1, 0, 0, 0, 1],
                &[1, 0, 0, 0, 1],
                &[1, 0, 0, 0, 1],
                &[1, 1, 4, 1, 1],
            ],
        )
        .unwrap();
        let cam = Camera::new(1.5, 2.5, 0.0, FRAC_PI_2);
        assert_eq!(cam.cast_ray(&lvl, 0.0).wall_id, 4);
    }

    #[test]
    fn zero_axis_is_never_stepped() {
        let lvl = room(9);
        let recorder = Recorder {
            inner: &lvl,
            visited: RefCell::new(Vec::new()),
        };
        // ray direction is exactly (1, 0)
        let cam = Camera::new(1.5, 4.5, 0.0, FRAC_PI_2);
        assert_eq!(cam.ray_direction(0.0).y, 0.0);
        cam.cast_ray(&recorder, 0.0);

        let visited = recorder.visited.into_inner();
        assert!(!visited.is_empty());
        let mut last_x = 1;
        for &(x, y) in &visited {
            assert_eq!(y, 4, "Y must stay put");
            assert!(x > last_x, "X must advance every step");
            last_x = x;
        }
    }

    #[test]
    fn exact_tie_prefers_x() {
        // diagonal ray from a tile centre crosses both grid lines together
        let lvl = room(9);
        let mut cam = Camera::new(4.5, 4.5, 0.0, FRAC_PI_2);
        cam.direction = Vector::new(1.0, 1.0);
        cam.update_plane();
        let recorder = Recorder {
            inner: &lvl,
            visited: RefCell::new(Vec::new()),
        };
        cam.cast_ray(&recorder, 0.0);
        let visited = recorder.visited.into_inner();
        assert_eq!(visited[0], (5, 4), "first step should be along X");
        assert_eq!(visited[1], (5, 5));
    }

    #[test]
    fn edge_rays_diverge() {
        let lvl = room(11);
        let cam = Camera::new(5.5, 5.5, 0.0, FRAC_PI_2);
        // rays at the screen edges travel at 45°: they hit the side walls
        let left = cam.cast_ray(&lvl, -1.0);
        let right = cam.cast_ray(&lvl, 1.0);
        assert!((left.distance - right.distance).abs() < 1e-4);
        assert!((left.distance - 4.5).abs() < 1e-4, "{}", left.distance);
    }

    #[test]
    fn open_level_still_terminates() {
        let lvl = Level::from_rows("OPEN", &[&[0, 0], &[0, 0]]).unwrap();
        let cam = Camera::new(0.5, 0.5, 0.2, FRAC_PI_2);
        let hit = cam.cast_ray(&lvl, 0.0);
        assert_eq!(hit.wall_id, crate::world::OUTSIDE);
    }
}
