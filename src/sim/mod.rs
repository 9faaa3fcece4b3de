mod clock;
mod collision;
mod input;
mod motion;

pub use clock::{FrameClock, MAX_FRAME_TIME};
pub use collision::try_move;
pub use input::{KeyEdge, MotionKey, apply_key};
pub use motion::{AccelDirection, AccelState, RotationDirection};
