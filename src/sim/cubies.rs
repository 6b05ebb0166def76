//! Physical cube: 27 cubie slots
//!
//! Slot order is fixed by position (see [`crate::slot_position`]); a turn
//! reorders which cubie sits in which slot. Each cubie also carries the
//! orientation the animator has rotated it to so far.

use glam::{Quat, Vec3};

use super::face::{Face, cycle, grid_cycle};
use crate::{slot_at, slot_position};

/// Identity of a cubie: the slot it started in
pub type CubieId = u8;

pub const CUBIE_COUNT: usize = 27;

/// One of the 27 sub-cubes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubie {
    pub id: CubieId,
    /// Accumulated visual rotation
    pub orientation: Quat,
}

impl Cubie {
    pub fn new(id: CubieId) -> Self {
        Self {
            id,
            orientation: Quat::IDENTITY,
        }
    }

    /// Position in the solved cube
    pub fn home_position(&self) -> Vec3 {
        slot_position(self.id as usize)
    }

    /// Where the animator currently shows this cubie's center
    pub fn visual_position(&self) -> Vec3 {
        self.orientation * self.home_position()
    }

    /// Slot the animator currently shows this cubie in
    pub fn visual_slot(&self) -> usize {
        slot_at(self.visual_position())
    }
}

/// Cubie-level cube state
#[derive(Debug, Clone, PartialEq)]
pub struct CubieArray {
    slots: [Cubie; CUBIE_COUNT],
}

impl Default for CubieArray {
    fn default() -> Self {
        Self::new()
    }
}

impl CubieArray {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|i| Cubie::new(i as CubieId)),
        }
    }

    pub fn slots(&self) -> &[Cubie; CUBIE_COUNT] {
        &self.slots
    }

    /// Cubie ids by slot
    pub fn ids(&self) -> [CubieId; CUBIE_COUNT] {
        self.slots.map(|c| c.id)
    }

    /// Cubies currently occupying the slots of a face group
    pub fn face_cubies(&self, face: Face) -> impl Iterator<Item = &Cubie> + '_ {
        face.cubie_indexes()
            .iter()
            .map(move |&slot| &self.slots[slot as usize])
    }

    /// Quarter-turn the slot assignment of one face, slice or the whole cube
    pub(crate) fn rotate(&mut self, face: Face, prime: bool) {
        for &(layer, reversed) in face.layers() {
            let grid = layer.cubie_indexes();
            let cells = grid_cycle(|k| grid[k] as usize);
            let shift = if prime != reversed { 6 } else { 2 };
            cycle(&mut self.slots, &cells, shift);
        }
    }

    /// Visually spin the cubies of a face group about `axis` by `degrees`
    pub(crate) fn rotate_visual(&mut self, face: Face, axis: Vec3, degrees: f32) {
        if degrees == 0.0 {
            return;
        }
        let spin = Quat::from_axis_angle(axis, degrees.to_radians());
        for &slot in face.cubie_indexes() {
            let cubie = &mut self.slots[slot as usize];
            cubie.orientation = (spin * cubie.orientation).normalize();
        }
    }
}
