//! Key edges → camera intents.
//!
//! Only *edges* are handled here; the caller must drop auto-repeat events
//! (minifb: `is_key_pressed(key, KeyRepeat::No)`).

use super::{AccelDirection, AccelState, RotationDirection};
use crate::world::Camera;

/// Logical controls, independent of the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionKey {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEdge {
    Pressed,
    Released,
}

/// Translate one key transition into acceleration / rotation intent.
///
/// * Forward/Backward: press starts accelerating, release starts braking.
/// * Turning: press spins at full rate, release stops immediately.
pub fn apply_key(camera: &mut Camera, key: MotionKey, edge: KeyEdge) {
    let accel_state = match edge {
        KeyEdge::Pressed => AccelState::Accelerate,
        KeyEdge::Released => AccelState::Decelerate,
    };

    match key {
        MotionKey::Forward => camera.set_acceleration(accel_state, AccelDirection::Forward),
        MotionKey::Backward => camera.set_acceleration(accel_state, AccelDirection::Backward),
        MotionKey::TurnLeft | MotionKey::TurnRight => {
            let rotation = match (key, edge) {
                (_, KeyEdge::Released) => RotationDirection::None,
                (MotionKey::TurnLeft, KeyEdge::Pressed) => RotationDirection::Counterclockwise,
                _ => RotationDirection::Clockwise,
            };
            camera.set_rotation_speed(rotation);
        }
    }
}
