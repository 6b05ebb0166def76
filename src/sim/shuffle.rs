//! Random scramble generation
//!
//! Draws quarter turns of the outer faces only. A move that would cancel the
//! previous one (same face, opposite direction) is discarded and redrawn.

use rand::Rng;

use super::face::OUTER_FACES;
use super::moves::{FaceMove, MoveOrigin};
use crate::consts::MAX_SHUFFLE_LENGTH;

/// Generate `length` shuffle moves from the given RNG
pub fn generate_shuffle<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<FaceMove> {
    let mut moves: Vec<FaceMove> = Vec::with_capacity(length.min(MAX_SHUFFLE_LENGTH));

    while moves.len() < length {
        let face = OUTER_FACES[rng.random_range(0..OUTER_FACES.len())];
        let prime = rng.random_bool(0.5);

        if moves
            .last()
            .is_some_and(|last| last.face() == face && last.is_prime() != prime)
        {
            continue;
        }

        moves.push(FaceMove::quarter(face, prime).with_origin(MoveOrigin::Shuffle));
    }

    moves
}
