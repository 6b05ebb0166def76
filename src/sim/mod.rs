//! Cube move engine
//!
//! All puzzle logic lives here. This module must stay free of rendering and
//! platform concerns:
//! - Logical state changes only through whole quarter turns
//! - Time enters only through [`Engine::advance`]
//! - Seeded RNG for reproducible shuffles

pub mod cubies;
pub mod face;
pub mod history;
pub mod moves;
pub mod notation;
pub mod shuffle;
pub mod snapshot;
pub mod state;
pub mod stickers;
pub mod tick;

pub use cubies::{CUBIE_COUNT, Cubie, CubieArray, CubieId};
pub use face::{ALL_FACES, Face, OUTER_FACES, SLICES, WHOLE_CUBE};
pub use history::History;
pub use moves::{FaceMove, MoveOrigin};
pub use notation::{NotationError, SequenceError, format_sequence, parse_move, parse_sequence};
pub use shuffle::generate_shuffle;
pub use snapshot::CubeSnapshot;
pub use state::CubeState;
pub use stickers::{Color, STICKER_COUNT, StickerCube};
pub use tick::{Engine, MoveListener};
