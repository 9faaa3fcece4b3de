use crate::sim::{AccelDirection, AccelState};

use super::{Rotate, Vector};

/// Top speed along the view direction, tiles per second.
pub const MAX_MOVEMENT_SPEED: f32 = 2.5;

/// Turn rate while a turn key is held, radians per second.
pub const MAX_ROTATION_SPEED: f32 = 1.5;

/// Player view-point on the tile grid.
///
/// * `direction` is unit length; `plane` is perpendicular to it (pointing to
///   the viewer's right) with length `tan(fov / 2)`.
/// * Speeds are signed: positive `movement_speed` walks forward, positive
///   `rotation_speed` turns counter-clockwise.
///
/// Motion integration lives in [`crate::sim`], ray casting in
/// [`crate::engine`].
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub(crate) plane_length: f32,

    pub(crate) position: Vector,
    pub(crate) direction: Vector,
    pub(crate) plane: Vector,

    pub(crate) accel_state: AccelState,
    pub(crate) accel_direction: AccelDirection,

    pub(crate) movement_speed: f32,
    pub(crate) rotation_speed: f32,
}

impl Camera {
    /// Camera at tile coordinates `(x, y)`, facing `angle`, horizontal `fov`
    /// (both radians).
    pub fn new(x: f32, y: f32, angle: f32, fov: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut cam = Self {
            plane_length: (fov / 2.0).tan(),
            position: Vector::new(x, y),
            direction: Vector::new(c, s),
            plane: Vector::ZERO,
            accel_state: AccelState::None,
            accel_direction: AccelDirection::None,
            movement_speed: 0.0,
            rotation_speed: 0.0,
        };
        cam.update_plane();
        cam
    }

    /// Re-derive `plane` from `direction`: right-hand perpendicular scaled
    /// to `plane_length`.
    #[inline]
    pub fn update_plane(&mut self) {
        self.plane = Vector::new(self.direction.y, -self.direction.x) * self.plane_length;
    }

    /// Turn by `angle` radians (counter-clockwise) and keep the plane in sync.
    ///
    /// `direction` is renormalised so rounding does not accumulate over
    /// many frames.
    pub(crate) fn turn(&mut self, angle: f32) {
        self.direction = self.direction.rotated_by(angle).normalize();
        self.update_plane();
    }

    /*──────────────────────── getters ───────────────────────────────*/

    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    #[inline]
    pub fn plane(&self) -> Vector {
        self.plane
    }

    #[inline]
    pub fn plane_length(&self) -> f32 {
        self.plane_length
    }

    /// Heading in radians, `atan2(dir.y, dir.x)`.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.direction.y.atan2(self.direction.x)
    }

    #[inline]
    pub fn accel_state(&self) -> AccelState {
        self.accel_state
    }

    #[inline]
    pub fn accel_direction(&self) -> AccelDirection {
        self.accel_direction
    }

    #[inline]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    fn assert_plane_ok(cam: &Camera) {
        let d = cam.direction();
        let p = cam.plane();
        assert!(p.dot(d).abs() < 1e-5, "plane {p:?} not perpendicular to {d:?}");
        assert!((p.length() - cam.plane_length()).abs() < 1e-5);
    }

    #[test]
    fn new_faces_angle() {
        let cam = Camera::new(2.5, 3.5, FRAC_PI_2, FRAC_PI_2);
        assert!((cam.direction() - Vector::Y).length() < 1e-6);
        assert_eq!(cam.position(), Vector::new(2.5, 3.5));
        assert!((cam.angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn plane_length_is_tan_half_fov() {
        let cam = Camera::new(0.0, 0.0, 0.0, FRAC_PI_2);
        assert!((cam.plane_length() - 1.0).abs() < 1e-6);
        let cam = Camera::new(0.0, 0.0, 0.0, FRAC_PI_3);
        assert!((cam.plane_length() - (FRAC_PI_3 / 2.0).tan()).abs() < 1e-6);
    }

    #[test]
    fn plane_points_right_of_direction() {
        // facing +X, right-hand side is -Y
        let cam = Camera::new(0.0, 0.0, 0.0, FRAC_PI_2);
        assert!((cam.plane() - Vector::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn plane_stays_perpendicular_after_turning() {
        let mut cam = Camera::new(1.5, 1.5, 0.3, 1.2);
        assert_plane_ok(&cam);
        for i in 0..50 {
            cam.turn(0.1 + i as f32 * PI / 17.0);
            assert_plane_ok(&cam);
            assert!((cam.direction().length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn long_turns_keep_unit_direction() {
        // an hour of turning at full rate, 60 frames per second
        let mut cam = Camera::new(1.5, 1.5, 0.0, FRAC_PI_2);
        let step = -MAX_ROTATION_SPEED / 60.0;
        for _ in 0..216_000 {
            cam.turn(step);
        }
        assert!((cam.direction().length() - 1.0).abs() < 1e-4);
        assert!((cam.plane().length() - cam.plane_length()).abs() < 1e-4);
        assert_plane_ok(&cam);
    }

    #[test]
    fn starts_at_rest() {
        let cam = Camera::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(cam.movement_speed(), 0.0);
        assert_eq!(cam.rotation_speed(), 0.0);
        assert_eq!(cam.accel_state(), AccelState::None);
        assert_eq!(cam.accel_direction(), AccelDirection::None);
    }
}
