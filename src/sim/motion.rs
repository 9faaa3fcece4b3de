//! Acceleration / rotation state machine and per-frame motion integration.

use std::fmt;

use super::collision::try_move;
use crate::world::{Camera, MAX_MOVEMENT_SPEED, MAX_ROTATION_SPEED, TileMap};

/// What the movement speed is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccelState {
    #[default]
    None,
    Accelerate,
    Decelerate,
}

/// Which way the camera is (de)accelerating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccelDirection {
    #[default]
    None,
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RotationDirection {
    #[default]
    None,
    Clockwise,
    Counterclockwise,
}

impl AccelDirection {
    /// `+1` forward, `-1` backward, `0` otherwise.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            AccelDirection::None => 0.0,
            AccelDirection::Forward => 1.0,
            AccelDirection::Backward => -1.0,
        }
    }
}

impl RotationDirection {
    /// Sign of the rotation angle: counter-clockwise is positive.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            RotationDirection::None => 0.0,
            RotationDirection::Clockwise => -1.0,
            RotationDirection::Counterclockwise => 1.0,
        }
    }
}

impl fmt::Display for AccelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            AccelState::None => "none",
            AccelState::Accelerate => "accelerate",
            AccelState::Decelerate => "decelerate",
        })
    }
}

impl fmt::Display for AccelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            AccelDirection::None => "none",
            AccelDirection::Forward => "forward",
            AccelDirection::Backward => "backward",
        })
    }
}

impl Camera {
    pub fn set_acceleration(&mut self, state: AccelState, direction: AccelDirection) {
        self.accel_state = state;
        self.accel_direction = direction;
    }

    /// Ramp `movement_speed` by `MAX_MOVEMENT_SPEED` per second towards the
    /// top speed (accelerating) or towards zero (decelerating).
    ///
    /// Reaching either end snaps the speed to it and clears the acceleration
    /// state, so the ramp stops by itself.
    pub fn set_movement_speed(&mut self, frame_time: f32) {
        let sign = self.accel_direction.sign();
        let step = MAX_MOVEMENT_SPEED * sign * frame_time;

        match self.accel_state {
            AccelState::None => {}
            AccelState::Accelerate => {
                self.movement_speed += step;
                if self.movement_speed * sign >= MAX_MOVEMENT_SPEED {
                    self.movement_speed = MAX_MOVEMENT_SPEED * sign;
                    self.set_acceleration(AccelState::None, AccelDirection::None);
                }
            }
            AccelState::Decelerate => {
                self.movement_speed -= step;
                if self.movement_speed * sign <= 0.0 {
                    self.movement_speed = 0.0;
                    self.set_acceleration(AccelState::None, AccelDirection::None);
                }
            }
        }
    }

    /// Turning has no ramp: full speed or stopped.
    pub fn set_rotation_speed(&mut self, direction: RotationDirection) {
        self.rotation_speed = MAX_ROTATION_SPEED * direction.sign();
    }

    /// Integrate one frame of movement and rotation.
    ///
    /// Movement follows `direction` and is resolved against `map` one axis at
    /// a time, so the camera slides along walls instead of sticking.
    pub fn handle_motion<M: TileMap + ?Sized>(&mut self, map: &M, frame_time: f32) {
        if self.movement_speed != 0.0 {
            let delta = self.direction * (self.movement_speed * frame_time);
            self.position = try_move(map, self.position, delta);
        }

        if self.rotation_speed != 0.0 {
            self.turn(self.rotation_speed * frame_time);
        }
    }

    /// Full per-frame step: speed ramp, then motion.
    pub fn update<M: TileMap + ?Sized>(&mut self, map: &M, frame_time: f32) {
        self.set_movement_speed(frame_time);
        self.handle_motion(map, frame_time);
    }
}
