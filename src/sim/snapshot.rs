//! Presentation snapshot
//!
//! Everything a UI layer reads from the engine in one serializable value.

use serde::{Deserialize, Serialize};

use super::notation::format_sequence;
use super::tick::Engine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    /// 54 color indices, face blocks in U D R L F B order
    pub stickers: Vec<u8>,
    /// Cubie id per slot
    pub cubies: Vec<u8>,
    pub solved: bool,
    /// Move currently animating, if any
    pub active: Option<String>,
    pub previous: String,
    pub shuffle: String,
    pub planned: String,
}

impl CubeSnapshot {
    pub fn capture(engine: &Engine) -> Self {
        Self {
            stickers: engine.stickers().to_vec(),
            cubies: engine.cube().cubie_ids().to_vec(),
            solved: engine.is_solved(),
            active: engine.active_move().map(|mv| mv.to_notation()),
            previous: format_sequence(engine.previous_moves()),
            shuffle: format_sequence(engine.shuffle_moves()),
            planned: format_sequence(engine.planned_moves()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Engine {
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STEP_DT;
    use crate::settings::Settings;
    use crate::sim::face::Face;
    use crate::sim::notation::parse_sequence;

    #[test]
    fn test_snapshot_of_fresh_engine() {
        let snapshot = Engine::new(Settings::default()).snapshot();
        assert!(snapshot.solved);
        assert_eq!(snapshot.stickers.len(), 54);
        assert_eq!(snapshot.cubies, (0..27).collect::<Vec<u8>>());
        assert_eq!(snapshot.active, None);
        assert!(snapshot.previous.is_empty());
    }

    #[test]
    fn test_snapshot_mid_animation() {
        let mut engine = Engine::new(Settings::default());
        engine.record_input_sequence("F");
        engine.rotate_face(Face::Up, true);
        engine.rotate_face(Face::Right, false);
        engine.advance(STEP_DT);
        engine.advance(STEP_DT);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.active.as_deref(), Some("F"));
        assert_eq!(snapshot.shuffle, "F");
        assert_eq!(snapshot.planned, "U' R");
        assert!(!snapshot.solved);
    }

    #[test]
    fn test_snapshot_json() {
        let mut engine = Engine::new(Settings::default());
        engine.rotate_face(Face::Middle, false);
        engine.drain();

        let json = engine.snapshot().to_json().unwrap();
        let back: CubeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, engine.snapshot());
        assert!(json.contains("\"previous\":\"M\""));
    }

    #[test]
    fn test_snapshot_moves_reload_through_notation() {
        let mut engine = Engine::new(Settings::default());
        engine.record_input_sequence("R2' U");
        engine.rotate_face(Face::Back, true);
        engine.drain();

        let json = engine.snapshot().to_json().unwrap();
        let back: CubeSnapshot = serde_json::from_str(&json).unwrap();
        let (moves, errors) = parse_sequence(&back.shuffle);
        assert!(errors.is_empty());
        // Doubles come back canonical with a full budget
        assert!(moves[0].is_double() && !moves[0].is_prime());
        assert_eq!(moves[0].remaining_degrees(), 180.0);
        assert_eq!(back.previous, "B'");
    }
}
