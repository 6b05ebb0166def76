//! Move notation codec
//!
//! Single-letter faces (`U D R L F B E M S Y X Z`), `'` for counter-clockwise
//! quarter turns and `2` for half turns.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::face::Face;
use super::moves::FaceMove;

/// Why a single token could not be read as a move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty move token")]
    Empty,
    #[error("unknown face letter '{letter}' in \"{token}\"")]
    UnknownFace { letter: char, token: String },
    #[error("invalid suffix \"{suffix}\" in \"{token}\"")]
    InvalidSuffix { suffix: String, token: String },
}

/// A rejected token within a whitespace-separated sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token {index}: {source}")]
pub struct SequenceError {
    /// Zero-based position among the non-empty tokens
    pub index: usize,
    pub source: NotationError,
}

impl FaceMove {
    pub fn to_notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FaceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face().letter())?;
        if self.is_double() {
            write!(f, "2")
        } else if self.is_prime() {
            write!(f, "'")
        } else {
            Ok(())
        }
    }
}

impl FromStr for FaceMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

/// Parse one token such as `R`, `U'` or `M2`
pub fn parse_move(token: &str) -> Result<FaceMove, NotationError> {
    let token = token.trim();
    let mut chars = token.chars();
    let letter = chars.next().ok_or(NotationError::Empty)?;
    let face = Face::from_letter(letter).ok_or_else(|| NotationError::UnknownFace {
        letter,
        token: token.to_string(),
    })?;

    match chars.as_str() {
        "" => Ok(FaceMove::quarter(face, false)),
        "'" => Ok(FaceMove::quarter(face, true)),
        "2" | "2'" | "'2" => Ok(FaceMove::double(face)),
        suffix => Err(NotationError::InvalidSuffix {
            suffix: suffix.to_string(),
            token: token.to_string(),
        }),
    }
}

/// Parse a whitespace-separated sequence, keeping every readable move.
///
/// Bad tokens are returned alongside instead of aborting the sequence.
pub fn parse_sequence(text: &str) -> (Vec<FaceMove>, Vec<SequenceError>) {
    let mut moves = Vec::new();
    let mut errors = Vec::new();

    for (index, token) in text.split_whitespace().enumerate() {
        match parse_move(token) {
            Ok(mv) => moves.push(mv),
            Err(source) => errors.push(SequenceError { index, source }),
        }
    }

    (moves, errors)
}

/// Join moves into a space-separated notation string
pub fn format_sequence<'a>(moves: impl IntoIterator<Item = &'a FaceMove>) -> String {
    moves
        .into_iter()
        .map(FaceMove::to_notation)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::face::ALL_FACES;
    use crate::sim::moves::MoveOrigin;
    use proptest::prelude::*;

    #[test]
    fn test_to_notation() {
        assert_eq!(FaceMove::quarter(Face::Right, false).to_notation(), "R");
        assert_eq!(FaceMove::quarter(Face::Up, true).to_notation(), "U'");
        assert_eq!(FaceMove::double(Face::Middle).to_notation(), "M2");
        assert_eq!(FaceMove::quarter(Face::RotateY, true).to_notation(), "Y'");
        assert_eq!(FaceMove::new(Face::Back, true, true).to_notation(), "B2");
    }

    #[test]
    fn test_parse_move() {
        let mv: FaceMove = "R'".parse().unwrap();
        assert_eq!(mv.face(), Face::Right);
        assert!(mv.is_prime());
        assert!(!mv.is_double());

        let mv = parse_move("E2").unwrap();
        assert!(mv.is_double());
        assert_eq!(mv.remaining_degrees(), 180.0);

        assert!(parse_move("F2'").unwrap().is_double());
        assert_eq!(parse_move("  Z ").unwrap().face(), Face::RotateZ);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_move(""), Err(NotationError::Empty));
        assert_eq!(parse_move("   "), Err(NotationError::Empty));
        assert_eq!(
            parse_move("Q'"),
            Err(NotationError::UnknownFace {
                letter: 'Q',
                token: "Q'".to_string()
            })
        );
        // Letters are case-sensitive
        assert!(matches!(
            parse_move("r"),
            Err(NotationError::UnknownFace { letter: 'r', .. })
        ));
        assert!(matches!(
            parse_move("R3"),
            Err(NotationError::InvalidSuffix { .. })
        ));
    }

    #[test]
    fn test_parse_sequence_skips_bad_tokens() {
        let (moves, errors) = parse_sequence("R  U' q F2\tK D");
        assert_eq!(format_sequence(&moves), "R U' F2 D");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].index, 2);
        assert_eq!(errors[1].index, 4);
        assert!(errors[0].to_string().contains("'q'"));
    }

    #[test]
    fn test_parse_sequence_empty() {
        let (moves, errors) = parse_sequence("   \n ");
        assert!(moves.is_empty());
        assert!(errors.is_empty());
    }

    fn any_move() -> impl Strategy<Value = FaceMove> {
        (0..ALL_FACES.len(), any::<bool>(), any::<bool>())
            .prop_map(|(i, prime, double)| FaceMove::new(ALL_FACES[i], prime, double))
    }

    proptest! {
        #[test]
        fn prop_notation_round_trip(mv in any_move()) {
            let parsed = parse_move(&mv.to_notation()).unwrap();
            prop_assert!(parsed.same_turn(&mv));
            prop_assert_eq!(parsed.origin(), MoveOrigin::User);
            prop_assert!(parsed.is_recorded());
        }

        #[test]
        fn prop_sequence_round_trip(moves in prop::collection::vec(any_move(), 0..30)) {
            let text = format_sequence(&moves);
            let (parsed, errors) = parse_sequence(&text);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(parsed.len(), moves.len());
            for (a, b) in parsed.iter().zip(&moves) {
                prop_assert!(a.same_turn(b));
            }
        }
    }
}
