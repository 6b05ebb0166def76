//! Move history: what the player did, and what the shuffle did
//!
//! Both stacks hold moves in the order they became active. Reversal always
//! replays explicit counter-moves, never a snapshot.

use serde::Serialize;

use super::moves::{FaceMove, MoveOrigin};
use super::notation::format_sequence;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    previous: Vec<FaceMove>,
    shuffle: Vec<FaceMove>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an activated move onto the stack its origin selects
    pub fn record(&mut self, mv: &FaceMove) {
        if !mv.is_recorded() {
            return;
        }
        match mv.origin() {
            MoveOrigin::User => self.previous.push(*mv),
            MoveOrigin::Shuffle | MoveOrigin::Hidden => self.shuffle.push(*mv),
        }
    }

    /// Player moves, oldest first
    pub fn previous(&self) -> &[FaceMove] {
        &self.previous
    }

    /// Set-up moves, oldest first
    pub fn shuffle(&self) -> &[FaceMove] {
        &self.shuffle
    }

    pub fn pop_previous(&mut self) -> Option<FaceMove> {
        self.previous.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.shuffle.is_empty()
    }

    pub fn clear(&mut self) {
        self.previous.clear();
        self.shuffle.clear();
    }

    /// Empty both stacks and return the counter-moves that undo them:
    /// player moves newest first, then set-up moves newest first.
    pub fn take_reversal(&mut self) -> Vec<FaceMove> {
        let undo = |mv: &FaceMove| mv.inverse().with_origin(MoveOrigin::User).unrecorded();
        let plan = self
            .previous
            .iter()
            .rev()
            .chain(self.shuffle.iter().rev())
            .map(undo)
            .collect();
        self.clear();
        plan
    }

    /// Player moves as notation, oldest first
    pub fn notation(&self) -> String {
        format_sequence(&self.previous)
    }
}
