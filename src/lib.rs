//! Cube Sim - a 3x3x3 twisty puzzle move engine
//!
//! Core modules:
//! - `sim`: Move engine (sticker and cubie state, move queue, animation, history)
//! - `audio`: Sound cue selection for move starts
//! - `settings`: Animation pacing and shuffle configuration

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::SoundCue;
pub use settings::{AnimationPreset, Settings};
pub use sim::{CubeSnapshot, Engine, Face, FaceMove, MoveListener, MoveOrigin};

use glam::Vec3;

/// Engine configuration constants
pub mod consts {
    /// Fixed step used by the native driver (60 Hz)
    pub const STEP_DT: f32 = 1.0 / 60.0;

    /// Animation budget of a single turn
    pub const QUARTER_TURN_DEGREES: f32 = 90.0;
    pub const HALF_TURN_DEGREES: f32 = 180.0;

    /// Animation easing defaults
    pub const DEFAULT_ROTATION_SPEED: f32 = 10.0;
    pub const DEFAULT_LERP_OFFSET_DEGREES: f32 = 10.0;
    pub const DEFAULT_SNAP_THRESHOLD_DEGREES: f32 = 0.1;

    /// Shuffle defaults
    pub const DEFAULT_SHUFFLE_LENGTH: usize = 20;
    pub const MAX_SHUFFLE_LENGTH: usize = 1000;
}

/// Center of cubie slot `slot`, each axis in {-1, 0, 1}
#[inline]
pub fn slot_position(slot: usize) -> Vec3 {
    let x = (slot % 3) as f32 - 1.0;
    let z = ((slot / 3) % 3) as f32 - 1.0;
    let y = (slot / 9) as f32 - 1.0;
    Vec3::new(x, y, z)
}

/// Slot whose center is nearest to `pos`
#[inline]
pub fn slot_at(pos: Vec3) -> usize {
    let axis = |v: f32| (v.round().clamp(-1.0, 1.0) + 1.0) as usize;
    axis(pos.y) * 9 + axis(pos.z) * 3 + axis(pos.x)
}
