//! Virtual cube: the 54 sticker colors
//!
//! ```text
//!              U0 U1 U2
//!              U3 U4 U5
//!              U6 U7 U8
//!   L27 L28 L29  F36 F37 F38  R18 R19 R20  B45 B46 B47
//!   L30 L31 L32  F39 F40 F41  R21 R22 R23  B48 B49 B50
//!   L33 L34 L35  F42 F43 F44  R24 R25 R26  B51 B52 B53
//!              D9  D10 D11
//!              D12 D13 D14
//!              D15 D16 D17
//! ```

use std::fmt;

use super::face::{Face, OUTER_FACES, cycle, grid_cycle};

/// Color index: the solved face that owns it (U=0, D=1, R=2, L=3, F=4, B=5)
pub type Color = u8;

pub const STICKER_COUNT: usize = 54;

/// Sticker-level cube state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerCube {
    cells: [Color; STICKER_COUNT],
}

impl Default for StickerCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl StickerCube {
    pub fn solved() -> Self {
        let mut cells = [0; STICKER_COUNT];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = (i / 9) as Color;
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Color; STICKER_COUNT] {
        &self.cells
    }

    /// The nine stickers of an outer face
    pub fn face(&self, face: Face) -> Option<&[Color]> {
        face.sticker_block().map(|block| &self.cells[block])
    }

    /// Every face shows a single color
    pub fn is_solved(&self) -> bool {
        self.cells
            .chunks_exact(9)
            .all(|face| face.iter().all(|&c| c == face[0]))
    }

    /// How many stickers of each color are on the cube
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &c in &self.cells {
            counts[c as usize] += 1;
        }
        counts
    }

    /// Quarter-turn the stickers of one face, slice or the whole cube
    pub(crate) fn rotate(&mut self, face: Face, prime: bool) {
        for &(layer, reversed) in face.layers() {
            self.rotate_layer(layer, prime != reversed);
        }
    }

    fn rotate_layer(&mut self, layer: Face, prime: bool) {
        if let Some(block) = layer.sticker_block() {
            let cells = grid_cycle(|k| block.start + k);
            cycle(&mut self.cells, &cells, if prime { 6 } else { 2 });
        }
        if let Some(ring) = layer.ring() {
            let ring = ring.map(usize::from);
            cycle(&mut self.cells, &ring, if prime { 9 } else { 3 });
        }
    }
}

impl fmt::Display for StickerCube {
    /// Unfolded net with each sticker shown as its solved face letter
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = |i: usize| OUTER_FACES[self.cells[i] as usize].letter();
        let row = |face: Face, r: usize| -> String {
            let start = face.sticker_face_index().unwrap_or(0) * 9 + r * 3;
            (start..start + 3).map(letter).collect()
        };

        for r in 0..3 {
            writeln!(f, "    {}", row(Face::Up, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::Left, r),
                row(Face::Front, r),
                row(Face::Right, r),
                row(Face::Back, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::Down, r))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_layout() {
        let cube = StickerCube::solved();
        assert!(cube.is_solved());
        assert_eq!(cube.face(Face::Right), Some(&[2; 9][..]));
        assert_eq!(cube.color_counts(), [9; 6]);
    }

    #[test]
    fn test_up_turn_moves_front_to_left() {
        let mut cube = StickerCube::solved();
        cube.rotate(Face::Up, false);
        assert!(!cube.is_solved());
        // Top row of Left now shows Front's color, Front shows Right's
        assert_eq!(&cube.cells()[27..30], &[4, 4, 4]);
        assert_eq!(&cube.cells()[36..39], &[2, 2, 2]);
        assert_eq!(cube.face(Face::Up), Some(&[0; 9][..]));
    }

    #[test]
    fn test_center_is_fixed() {
        let mut cube = StickerCube::solved();
        cube.rotate(Face::Right, false);
        cube.rotate(Face::Up, false);
        let before = cube.clone();
        cube.rotate(Face::Up, true);
        assert_eq!(cube.cells()[4], before.cells()[4]);
    }

    #[test]
    fn test_slices_follow_reference_faces() {
        // E turns like D: Left's middle row comes to Front
        let mut cube = StickerCube::solved();
        cube.rotate(Face::Equator, false);
        assert_eq!(&cube.cells()[39..42], &[3, 3, 3]);

        // M turns like L: Up comes down to Front
        let mut cube = StickerCube::solved();
        cube.rotate(Face::Middle, false);
        assert_eq!([cube.cells()[37], cube.cells()[40], cube.cells()[43]], [0, 0, 0]);

        // S turns like F: Left's middle column comes to Up's middle row
        let mut cube = StickerCube::solved();
        cube.rotate(Face::Standing, false);
        assert_eq!(&cube.cells()[3..6], &[3, 3, 3]);
    }

    #[test]
    fn test_whole_cube_rotations_keep_faces_uniform() {
        let mut cube = StickerCube::solved();
        cube.rotate(Face::RotateY, false);
        assert!(cube.is_solved());
        // Right's color is now in front
        assert_eq!(cube.cells()[40], 2);

        let mut cube = StickerCube::solved();
        cube.rotate(Face::RotateX, false);
        assert_eq!(cube.cells()[4], 4);

        let mut cube = StickerCube::solved();
        cube.rotate(Face::RotateZ, false);
        assert_eq!(cube.cells()[4], 3);
    }

    #[test]
    fn test_display_net() {
        let text = StickerCube::solved().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    UUU");
        assert_eq!(lines[4], "LLL FFF RRR BBB");
        assert_eq!(lines[8], "    DDD");
    }
}
