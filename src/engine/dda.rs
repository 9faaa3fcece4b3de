//! Per-axis state for the Digital Differential Analysis grid walk.
//!
//! Distances are measured in units of ray length, so whichever axis reports
//! the smaller `init_dist` crosses its next grid line first.

/// Stepping state along one axis for a single ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DdaAxis {
    /// Cell index the ray currently occupies on this axis.
    pub tile: i32,
    /// `-1`, `0` or `+1`.
    pub step: i32,
    /// Ray length between two successive grid-line crossings.
    pub delta_dist: f32,
    /// Ray length to the next grid-line crossing.
    pub init_dist: f32,
}

impl DdaAxis {
    /// Start a walk from `position` along a ray whose component on this axis
    /// is `ray_direction`.
    ///
    /// A zero component never crosses a grid line: both distances are
    /// `+inf` and the axis can never win the comparison in the ray loop.
    pub fn new(position: f32, ray_direction: f32) -> Self {
        let tile = position.floor() as i32;

        if ray_direction == 0.0 {
            return Self {
                tile,
                step: 0,
                delta_dist: f32::INFINITY,
                init_dist: f32::INFINITY,
            };
        }

        let delta_dist = 1.0 / ray_direction.abs();
        let (step, to_edge) = if ray_direction > 0.0 {
            (1, tile as f32 + 1.0 - position)
        } else {
            (-1, position - tile as f32)
        };

        Self {
            tile,
            step,
            delta_dist,
            init_dist: to_edge * delta_dist,
        }
    }

    /// Cross the next grid line.
    #[inline]
    pub fn advance(&mut self) {
        self.tile += self.step;
        self.init_dist += self.delta_dist;
    }
}
