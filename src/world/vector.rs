use glam::Vec2;

/// 2-D world-space vector, one unit per tile.
///
/// Addition and scaling come straight from `glam` (`+`, `+=`, `*`, `*=`);
/// rotation is added by [`Rotate`].
pub type Vector = Vec2;

/// Counter-clockwise rotation by an angle in radians.
pub trait Rotate: Sized {
    /// Return a rotated copy.
    fn rotated_by(self, angle: f32) -> Self;

    /// Rotate in place and hand back the new value.
    fn rotate_by(&mut self, angle: f32) -> Self;
}

impl Rotate for Vec2 {
    #[inline]
    fn rotated_by(self, angle: f32) -> Self {
        // [ cos  -sin ] [ x ]
        // [ sin   cos ] [ y ]
        let (s, c) = angle.sin_cos();
        Vec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    fn rotate_by(&mut self, angle: f32) -> Self {
        *self = self.rotated_by(angle);
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn close(a: Vector, b: Vector) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let v = Vector::X.rotated_by(FRAC_PI_2);
        assert!(close(v, Vector::Y), "got {v:?}");
    }

    #[test]
    fn rotate_then_unrotate_is_identity() {
        let samples = [
            Vector::new(1.0, 0.0),
            Vector::new(-3.5, 2.25),
            Vector::new(0.0, -7.0),
        ];
        for &v in &samples {
            for i in -8..=8 {
                let theta = i as f32 * PI / 5.0;
                let back = v.rotated_by(theta).rotated_by(-theta);
                assert!(
                    (back - v).length() < 1e-4 * v.length().max(1.0),
                    "{v:?} by {theta}"
                );
            }
        }
    }

    #[test]
    fn in_place_rotation_matches_value_rotation() {
        let mut v = Vector::new(2.0, 1.0);
        let returned = v.rotate_by(0.7);
        assert_eq!(returned, v);
        assert!(close(v, Vector::new(2.0, 1.0).rotated_by(0.7)));
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vector::new(3.0, 4.0);
        assert!((v.rotated_by(TAU / 3.0).length() - 5.0).abs() < 1e-5);
    }
}
