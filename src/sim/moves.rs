//! Move commands
//!
//! A [`FaceMove`] is both the logical command and the animation budget that
//! the animator drains while the move is active.

use serde::{Deserialize, Serialize};

use super::face::Face;
use crate::consts::{HALF_TURN_DEGREES, QUARTER_TURN_DEGREES};

/// Where a move came from, which decides the history stack it lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveOrigin {
    /// Interactive turn (and reversals of such turns)
    #[default]
    User,
    /// Randomized set-up move
    Shuffle,
    /// Move replayed from a recorded notation sequence
    Hidden,
}

/// One discrete turn of a face, slice or the whole cube.
///
/// Double moves are canonical: a half turn has no direction, so `prime` is
/// always false for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceMove {
    face: Face,
    prime: bool,
    is_double: bool,
    remaining_degrees: f32,
    origin: MoveOrigin,
    record: bool,
}

impl FaceMove {
    pub fn new(face: Face, prime: bool, is_double: bool) -> Self {
        Self {
            face,
            prime: prime && !is_double,
            is_double,
            remaining_degrees: if is_double {
                HALF_TURN_DEGREES
            } else {
                QUARTER_TURN_DEGREES
            },
            origin: MoveOrigin::User,
            record: true,
        }
    }

    /// 90° turn, counter-clockwise when `prime`
    pub fn quarter(face: Face, prime: bool) -> Self {
        Self::new(face, prime, false)
    }

    /// 180° turn
    pub fn double(face: Face) -> Self {
        Self::new(face, false, true)
    }

    pub fn with_origin(mut self, origin: MoveOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Keep this move off every history stack
    pub fn unrecorded(mut self) -> Self {
        self.record = false;
        self
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_prime(&self) -> bool {
        self.prime
    }

    pub fn is_double(&self) -> bool {
        self.is_double
    }

    pub fn remaining_degrees(&self) -> f32 {
        self.remaining_degrees
    }

    pub fn origin(&self) -> MoveOrigin {
        self.origin
    }

    pub fn is_recorded(&self) -> bool {
        self.record
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_degrees <= 0.0
    }

    /// Number of quarter-turn primitives this move applies
    pub fn quarter_turns(&self) -> usize {
        if self.is_double { 2 } else { 1 }
    }

    /// The turn that undoes this one, with a fresh budget
    pub fn inverse(&self) -> Self {
        Self::new(self.face, !self.prime, self.is_double)
            .with_origin(self.origin)
            .with_record(self.record)
    }

    /// Same face, direction and turn size (animation state ignored)
    pub fn same_turn(&self, other: &FaceMove) -> bool {
        self.face == other.face && self.prime == other.prime && self.is_double == other.is_double
    }

    fn with_record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// Whether `next` can be folded into this queued move as a half turn
    pub(crate) fn can_merge(&self, next: &FaceMove) -> bool {
        !self.is_double
            && !next.is_double
            && self.remaining_degrees == QUARTER_TURN_DEGREES
            && self.same_turn(next)
            && self.origin == next.origin
            && self.record == next.record
    }

    pub(crate) fn merge_into_double(&mut self) {
        self.is_double = true;
        self.prime = false;
        self.remaining_degrees += QUARTER_TURN_DEGREES;
    }

    /// Spend part of the animation budget, returning what was actually spent
    pub(crate) fn consume(&mut self, degrees: f32) -> f32 {
        let spent = degrees.clamp(0.0, self.remaining_degrees);
        self.remaining_degrees -= spent;
        if self.remaining_degrees < f32::EPSILON {
            self.remaining_degrees = 0.0;
        }
        spent
    }
}
