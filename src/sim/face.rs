//! Faces, layers and the fixed geometry tables behind every turn
//!
//! Coordinates: x points Right, y points Up, z points Front. The sticker block
//! of an outer face is read row-major as seen from outside the cube:
//!
//! ```text
//!            U: x right, z down
//!   L: z right   F: x right   R: -z right   B: -x right   (y down)
//!            D: x right, -z down
//! ```
//!
//! Cubie grids for outer faces use the same reading order, so sticker
//! `face * 9 + k` always sits on cubie slot `cubie_indexes()[k]`.

use std::ops::Range;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A turnable layer group: six outer faces, three slices, three whole-cube axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Right,
    Left,
    Front,
    Back,
    /// Middle layer between Up and Down, turns like Down
    Equator,
    /// Middle layer between Left and Right, turns like Left
    Middle,
    /// Middle layer between Front and Back, turns like Front
    Standing,
    /// Whole cube, turns like Up
    RotateY,
    /// Whole cube, turns like Right
    RotateX,
    /// Whole cube, turns like Front
    RotateZ,
}

/// Faces that own a sticker block (and the only faces shuffles draw from)
pub const OUTER_FACES: [Face; 6] = [
    Face::Up,
    Face::Down,
    Face::Right,
    Face::Left,
    Face::Front,
    Face::Back,
];

pub const SLICES: [Face; 3] = [Face::Equator, Face::Middle, Face::Standing];

pub const WHOLE_CUBE: [Face; 3] = [Face::RotateY, Face::RotateX, Face::RotateZ];

pub const ALL_FACES: [Face; 12] = [
    Face::Up,
    Face::Down,
    Face::Right,
    Face::Left,
    Face::Front,
    Face::Back,
    Face::Equator,
    Face::Middle,
    Face::Standing,
    Face::RotateY,
    Face::RotateX,
    Face::RotateZ,
];

/// Edge and corner cells of a 3x3 grid in clockwise order (center 4 is fixed).
/// A clockwise quarter turn moves `FACE_CYCLE[i]` to `FACE_CYCLE[i + 2]`.
pub const FACE_CYCLE: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Cubie slots per single layer, in the reading order of its reference face.
/// Order: U D R L F B E M S.
const CUBIE_GRIDS: [[u8; 9]; 9] = [
    [18, 19, 20, 21, 22, 23, 24, 25, 26],
    [6, 7, 8, 3, 4, 5, 0, 1, 2],
    [26, 23, 20, 17, 14, 11, 8, 5, 2],
    [18, 21, 24, 9, 12, 15, 0, 3, 6],
    [24, 25, 26, 15, 16, 17, 6, 7, 8],
    [20, 19, 18, 11, 10, 9, 2, 1, 0],
    [15, 16, 17, 12, 13, 14, 9, 10, 11],
    [19, 22, 25, 10, 13, 16, 1, 4, 7],
    [21, 22, 23, 12, 13, 14, 3, 4, 5],
];

/// Adjacent stickers per single layer. A clockwise quarter turn moves
/// `ring[i]` to `ring[i + 3]`. Order: U D R L F B E M S.
const RINGS: [[u8; 12]; 9] = [
    [18, 19, 20, 36, 37, 38, 27, 28, 29, 45, 46, 47],
    [24, 25, 26, 51, 52, 53, 33, 34, 35, 42, 43, 44],
    [2, 5, 8, 51, 48, 45, 11, 14, 17, 38, 41, 44],
    [0, 3, 6, 36, 39, 42, 9, 12, 15, 53, 50, 47],
    [6, 7, 8, 18, 21, 24, 11, 10, 9, 35, 32, 29],
    [0, 1, 2, 33, 30, 27, 17, 16, 15, 20, 23, 26],
    [21, 22, 23, 48, 49, 50, 30, 31, 32, 39, 40, 41],
    [1, 4, 7, 37, 40, 43, 10, 13, 16, 52, 49, 46],
    [3, 4, 5, 19, 22, 25, 14, 13, 12, 34, 31, 28],
];

const ALL_SLOTS: [u8; 27] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26,
];

impl Face {
    /// Notation letter
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Equator => 'E',
            Face::Middle => 'M',
            Face::Standing => 'S',
            Face::RotateY => 'Y',
            Face::RotateX => 'X',
            Face::RotateZ => 'Z',
        }
    }

    /// Inverse of [`Face::letter`] (case-sensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        ALL_FACES.into_iter().find(|face| face.letter() == letter)
    }

    pub fn is_outer(self) -> bool {
        self.sticker_face_index().is_some()
    }

    pub fn is_slice(self) -> bool {
        SLICES.contains(&self)
    }

    pub fn is_whole_cube(self) -> bool {
        WHOLE_CUBE.contains(&self)
    }

    /// Index of the sticker block (and solved color) for outer faces
    pub fn sticker_face_index(self) -> Option<usize> {
        match self {
            Face::Up => Some(0),
            Face::Down => Some(1),
            Face::Right => Some(2),
            Face::Left => Some(3),
            Face::Front => Some(4),
            Face::Back => Some(5),
            _ => None,
        }
    }

    /// Contiguous 9-cell range in the sticker array (outer faces only)
    pub fn sticker_block(self) -> Option<Range<usize>> {
        self.sticker_face_index().map(|i| i * 9..i * 9 + 9)
    }

    fn layer_index(self) -> Option<usize> {
        match self {
            Face::Equator => Some(6),
            Face::Middle => Some(7),
            Face::Standing => Some(8),
            _ => self.sticker_face_index(),
        }
    }

    /// Cubie slots moved by this face: 9 for a layer, all 27 for the whole cube
    pub fn cubie_indexes(self) -> &'static [u8] {
        match self.layer_index() {
            Some(i) => &CUBIE_GRIDS[i],
            None => &ALL_SLOTS,
        }
    }

    /// The 12 adjacent stickers cycled by a single layer turn
    pub fn ring(self) -> Option<&'static [u8; 12]> {
        self.layer_index().map(|i| &RINGS[i])
    }

    /// Single layers making up this turn, with whether each runs reversed.
    ///
    /// A whole-cube rotation is its three parallel layers, each reversed when
    /// its own reference face points away from the rotation's.
    pub fn layers(self) -> &'static [(Face, bool)] {
        match self {
            Face::Up => &[(Face::Up, false)],
            Face::Down => &[(Face::Down, false)],
            Face::Right => &[(Face::Right, false)],
            Face::Left => &[(Face::Left, false)],
            Face::Front => &[(Face::Front, false)],
            Face::Back => &[(Face::Back, false)],
            Face::Equator => &[(Face::Equator, false)],
            Face::Middle => &[(Face::Middle, false)],
            Face::Standing => &[(Face::Standing, false)],
            Face::RotateY => &[(Face::Up, false), (Face::Equator, true), (Face::Down, true)],
            Face::RotateX => &[(Face::Right, false), (Face::Middle, true), (Face::Left, true)],
            Face::RotateZ => &[(Face::Front, false), (Face::Standing, false), (Face::Back, true)],
        }
    }

    /// Outer face whose clockwise direction this face follows
    pub fn reference_face(self) -> Face {
        match self {
            Face::Equator => Face::Down,
            Face::Middle => Face::Left,
            Face::Standing | Face::RotateZ => Face::Front,
            Face::RotateY => Face::Up,
            Face::RotateX => Face::Right,
            outer => outer,
        }
    }

    /// Outward normal of the reference face
    pub fn outward_normal(self) -> Vec3 {
        match self.reference_face() {
            Face::Up => Vec3::Y,
            Face::Down => Vec3::NEG_Y,
            Face::Right => Vec3::X,
            Face::Left => Vec3::NEG_X,
            Face::Front => Vec3::Z,
            _ => Vec3::NEG_Z,
        }
    }

    /// Unit axis for a positive right-handed rotation performing this turn
    pub fn axis(self, prime: bool) -> Vec3 {
        if prime {
            self.outward_normal()
        } else {
            -self.outward_normal()
        }
    }
}

/// Move the values at `positions` forward by `shift` places along the cycle
pub(crate) fn cycle<T: Copy, const N: usize>(
    items: &mut [T],
    positions: &[usize; N],
    shift: usize,
) {
    let saved: [T; N] = positions.map(|p| items[p]);
    for (i, value) in saved.into_iter().enumerate() {
        items[positions[(i + shift) % N]] = value;
    }
}

/// Positions of the eight moving cells of a 3x3 grid, in [`FACE_CYCLE`] order
pub(crate) fn grid_cycle(grid: impl Fn(usize) -> usize) -> [usize; 8] {
    FACE_CYCLE.map(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_letters_round_trip() {
        for face in ALL_FACES {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('u'), None);
        assert_eq!(Face::from_letter('Q'), None);
    }

    #[test]
    fn test_face_sets_partition_all_faces() {
        let mut seen = HashSet::new();
        for face in OUTER_FACES.iter().chain(&SLICES).chain(&WHOLE_CUBE) {
            assert!(seen.insert(*face));
        }
        assert_eq!(seen.len(), ALL_FACES.len());
        assert!(OUTER_FACES.iter().all(|f| f.is_outer()));
        assert!(SLICES.iter().all(|f| f.is_slice() && !f.is_outer()));
        assert!(WHOLE_CUBE.iter().all(|f| f.is_whole_cube() && f.ring().is_none()));
    }

    #[test]
    fn test_sticker_blocks() {
        assert_eq!(Face::Up.sticker_block(), Some(0..9));
        assert_eq!(Face::Back.sticker_block(), Some(45..54));
        assert_eq!(Face::Middle.sticker_block(), None);
    }

    #[test]
    fn test_cubie_grids_are_layers() {
        for face in OUTER_FACES.iter().chain(&SLICES) {
            let slots = face.cubie_indexes();
            assert_eq!(slots.len(), 9);
            let unique: HashSet<_> = slots.iter().collect();
            assert_eq!(unique.len(), 9, "{face:?}");

            // Every slot lies on the layer plane of the face
            let normal = face.outward_normal();
            let depth = if face.is_outer() { 1.0 } else { 0.0 };
            for &slot in slots {
                let pos = crate::slot_position(slot as usize);
                assert!((pos.dot(normal) - depth).abs() < 1e-6, "{face:?} slot {slot}");
            }
        }
        assert_eq!(Face::RotateX.cubie_indexes().len(), 27);
    }

    #[test]
    fn test_rings_avoid_own_block() {
        for face in OUTER_FACES.iter().chain(&SLICES) {
            let ring = face.ring().unwrap();
            let unique: HashSet<_> = ring.iter().collect();
            assert_eq!(unique.len(), 12);
            if let Some(block) = face.sticker_block() {
                assert!(ring.iter().all(|&s| !block.contains(&(s as usize))));
            }
            // Four faces, three stickers each
            let faces: HashSet<_> = ring.iter().map(|&s| s / 9).collect();
            assert_eq!(faces.len(), 4, "{face:?}");
        }
    }

    #[test]
    fn test_axis_is_unit_and_flips_with_prime() {
        for face in ALL_FACES {
            let axis = face.axis(false);
            assert!((axis.length() - 1.0).abs() < 1e-6);
            assert_eq!(face.axis(true), -axis);
        }
        // Slices follow their reference faces
        assert_eq!(Face::Equator.axis(false), Face::Down.axis(false));
        assert_eq!(Face::RotateX.axis(true), Face::Right.axis(true));
    }

    #[test]
    fn test_whole_cube_layers_cover_all_slots() {
        for face in WHOLE_CUBE {
            let mut slots: Vec<u8> = face
                .layers()
                .iter()
                .flat_map(|(layer, _)| layer.cubie_indexes().iter().copied())
                .collect();
            slots.sort_unstable();
            assert_eq!(slots, ALL_SLOTS.to_vec());
            // Every layer turns about the same physical axis
            for (layer, reversed) in face.layers() {
                assert_eq!(layer.axis(*reversed), face.axis(false));
            }
        }
    }

    #[test]
    fn test_cycle_shifts_forward() {
        let mut items = [10, 11, 12, 13];
        cycle(&mut items, &[0, 1, 2, 3], 1);
        assert_eq!(items, [13, 10, 11, 12]);
    }

    #[test]
    fn test_cycle_full_turn_and_untouched_cells() {
        let mut items: [u8; 9] = std::array::from_fn(|i| i as u8);
        let cells = grid_cycle(|k| k);
        cycle(&mut items, &cells, 2);
        // Center and the clockwise target of the first corner
        assert_eq!(items[4], 4);
        assert_eq!(items[2], 0);
        for _ in 0..3 {
            cycle(&mut items, &cells, 2);
        }
        assert_eq!(items, std::array::from_fn(|i| i as u8));
    }
}
