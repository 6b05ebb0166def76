//! Combined cube state
//!
//! Sticker colors and cubie slots only ever change together, through
//! [`CubeState::apply_quarter_turn`].

use glam::Vec3;

use super::cubies::{CUBIE_COUNT, CubieArray, CubieId};
use super::face::Face;
use super::moves::FaceMove;
use super::stickers::{Color, STICKER_COUNT, StickerCube};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CubeState {
    stickers: StickerCube,
    cubies: CubieArray,
}

impl CubeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stickers(&self) -> &StickerCube {
        &self.stickers
    }

    pub fn sticker_colors(&self) -> &[Color; STICKER_COUNT] {
        self.stickers.cells()
    }

    pub fn cubies(&self) -> &CubieArray {
        &self.cubies
    }

    pub fn cubie_ids(&self) -> [CubieId; CUBIE_COUNT] {
        self.cubies.ids()
    }

    pub fn is_solved(&self) -> bool {
        self.stickers.is_solved()
    }

    /// One 90° turn applied to stickers and cubies together
    pub fn apply_quarter_turn(&mut self, face: Face, prime: bool) {
        self.stickers.rotate(face, prime);
        self.cubies.rotate(face, prime);
    }

    /// Logical effect of a whole move (a double is two quarter turns)
    pub fn apply_move(&mut self, mv: &FaceMove) {
        for _ in 0..mv.quarter_turns() {
            self.apply_quarter_turn(mv.face(), mv.is_prime());
        }
    }

    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a FaceMove>) {
        for mv in moves {
            self.apply_move(mv);
        }
    }

    /// Cosmetic catch-up rotation of the cubies a move is turning
    pub(crate) fn rotate_visual(&mut self, face: Face, axis: Vec3, degrees: f32) {
        self.cubies.rotate_visual(face, axis, degrees);
    }
}
