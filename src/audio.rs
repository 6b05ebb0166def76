//! Sound cues for move starts
//!
//! The engine only decides which cue a move triggers. Playback belongs to the
//! [`MoveListener`](crate::sim::MoveListener) the caller installs.

use serde::{Deserialize, Serialize};

use crate::sim::Face;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// A face or slice turns
    Turn,
    /// The whole cube flips over
    Flip,
}

impl SoundCue {
    /// Cue for a move of `face` starting
    pub fn for_face(face: Face) -> Self {
        if face.is_whole_cube() {
            SoundCue::Flip
        } else {
            SoundCue::Turn
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Turn => "turn",
            SoundCue::Flip => "flip",
        }
    }
}
