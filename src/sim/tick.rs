//! Move queue and animator
//!
//! Core loop that advances the engine by one external time step. A move's
//! logical effect lands the moment it becomes active; the animation that
//! follows is cosmetic catch-up on the cubies of its face group.

use std::collections::VecDeque;
use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::cubies::CubieArray;
use super::face::Face;
use super::history::History;
use super::moves::{FaceMove, MoveOrigin};
use super::notation::{SequenceError, format_sequence, parse_sequence};
use super::shuffle::generate_shuffle;
use super::state::CubeState;
use super::stickers::{Color, STICKER_COUNT};
use crate::audio::SoundCue;
use crate::settings::Settings;

/// Callbacks fired by the engine as moves progress
pub trait MoveListener {
    /// A move became active (its logical effect is already applied)
    fn move_started(&mut self, _mv: &FaceMove, _cue: SoundCue) {}
    /// A move finished animating
    fn move_completed(&mut self, _mv: &FaceMove) {}
    /// A player move brought the scrambled cube back to solved
    fn solved(&mut self) {}
}

/// Silent listener
impl MoveListener for () {}

/// The cube, its move queue and its history
pub struct Engine {
    cube: CubeState,
    /// Queued moves, not yet applied
    planned: VecDeque<FaceMove>,
    /// Applied move still animating
    active: Option<FaceMove>,
    history: History,
    settings: Settings,
    rng: Pcg32,
    /// The cube has been unsolved since the last reset or victory
    scrambled: bool,
    listener: Box<dyn MoveListener>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("cube", &self.cube)
            .field("planned", &self.planned)
            .field("active", &self.active)
            .field("history", &self.history)
            .field("settings", &self.settings)
            .field("scrambled", &self.scrambled)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        Self::with_listener(settings, Box::new(()))
    }

    pub fn with_listener(mut settings: Settings, listener: Box<dyn MoveListener>) -> Self {
        settings.sanitize();
        let rng = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        };
        Self {
            cube: CubeState::new(),
            planned: VecDeque::new(),
            active: None,
            history: History::new(),
            settings,
            rng,
            scrambled: false,
            listener,
        }
    }

    // === Outputs ===

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    pub fn stickers(&self) -> &[Color; STICKER_COUNT] {
        self.cube.sticker_colors()
    }

    pub fn cubies(&self) -> &CubieArray {
        self.cube.cubies()
    }

    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn previous_moves(&self) -> &[FaceMove] {
        self.history.previous()
    }

    pub fn shuffle_moves(&self) -> &[FaceMove] {
        self.history.shuffle()
    }

    pub fn planned_moves(&self) -> impl ExactSizeIterator<Item = &FaceMove> + '_ {
        self.planned.iter()
    }

    pub fn active_move(&self) -> Option<&FaceMove> {
        self.active.as_ref()
    }

    /// Nothing animating and nothing queued
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.planned.is_empty()
    }

    /// Player moves as notation, oldest first
    pub fn history_notation(&self) -> String {
        self.history.notation()
    }

    /// Queued moves as notation, next first
    pub fn planned_notation(&self) -> String {
        format_sequence(&self.planned)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // === Commands ===

    /// Queue a quarter turn by the player
    pub fn rotate_face(&mut self, face: Face, prime: bool) {
        self.enqueue(FaceMove::quarter(face, prime));
    }

    /// Queue a move, folding a repeat of the queued tail into a half turn
    pub fn enqueue(&mut self, mv: FaceMove) {
        if self.settings.coalesce_doubles
            && let Some(tail) = self.planned.back_mut()
            && tail.can_merge(&mv)
        {
            tail.merge_into_double();
            log::debug!("Merged {} into queued {}", mv, tail);
            return;
        }
        self.planned.push_back(mv);
    }

    /// Queue a casual scramble from the engine's RNG
    pub fn shuffle(&mut self) {
        let moves = generate_shuffle(&mut self.rng, self.settings.shuffle_length);
        self.enqueue_shuffle(moves);
    }

    /// Queue the scramble every player gets for `seed`
    pub fn ranked_shuffle(&mut self, seed: u64) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let moves = generate_shuffle(&mut rng, self.settings.shuffle_length);
        self.enqueue_shuffle(moves);
    }

    fn enqueue_shuffle(&mut self, moves: Vec<FaceMove>) {
        log::info!("Shuffle: {}", format_sequence(&moves));
        // Keep the scramble move-for-move as generated
        self.planned.extend(moves);
    }

    /// Undo the newest player move. Pending moves are dropped first.
    pub fn reverse_last_move(&mut self) {
        let Some(last) = self.history.pop_previous() else {
            log::debug!("No move to reverse");
            return;
        };
        self.planned.clear();
        self.planned.push_back(last.inverse().unrecorded());
    }

    /// Undo everything: player moves, then the scramble
    pub fn reverse_all_moves(&mut self) {
        self.planned.clear();
        if self.cube.is_solved() {
            self.history.clear();
            return;
        }
        let plan = self.history.take_reversal();
        log::info!("Reversing {} moves", plan.len());
        self.planned.extend(plan);
    }

    /// Queue a notation sequence as hidden set-up moves.
    ///
    /// Unreadable tokens are skipped and returned; the rest still applies.
    pub fn record_input_sequence(&mut self, text: &str) -> Vec<SequenceError> {
        let (moves, errors) = parse_sequence(text);
        for err in &errors {
            log::warn!("Skipping move: {err}");
        }
        for mv in moves {
            self.enqueue(mv.with_origin(MoveOrigin::Hidden));
        }
        errors
    }

    /// Back to a fresh solved cube, dropping queue and history
    pub fn reset(&mut self) {
        self.cube = CubeState::new();
        self.planned.clear();
        self.active = None;
        self.history.clear();
        self.scrambled = false;
        log::info!("Cube reset");
    }

    // === Time ===

    /// Advance the engine by one time step of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        if let Some(remaining) = self.active.map(|mv| mv.remaining_degrees()) {
            let step = self.settings.animation_step(remaining, dt);
            self.turn_active(step);
        }

        if self.active.is_none() {
            self.activate_next();
        }
    }

    /// Run every queued move to completion, one tick per move
    pub fn drain(&mut self) {
        loop {
            if let Some(remaining) = self.active.map(|mv| mv.remaining_degrees()) {
                self.turn_active(remaining);
            }
            if !self.activate_next() {
                break;
            }
        }
    }

    fn activate_next(&mut self) -> bool {
        let Some(mv) = self.planned.pop_front() else {
            return false;
        };

        self.cube.apply_move(&mv);
        if !self.cube.is_solved() {
            self.scrambled = true;
        }

        let cue = SoundCue::for_face(mv.face());
        log::debug!("Move {} started ({} queued)", mv, self.planned.len());
        self.listener.move_started(&mv, cue);

        self.history.record(&mv);
        self.active = Some(mv);
        true
    }

    fn turn_active(&mut self, degrees: f32) {
        let Some(mut mv) = self.active.take() else {
            return;
        };

        let spent = mv.consume(degrees);
        self.cube
            .rotate_visual(mv.face(), mv.face().axis(mv.is_prime()), spent);

        if mv.is_complete() {
            self.complete(mv);
        } else {
            self.active = Some(mv);
        }
    }

    fn complete(&mut self, mv: FaceMove) {
        log::debug!("Move {} complete", mv);
        self.listener.move_completed(&mv);

        if !self.scrambled || !self.cube.is_solved() {
            return;
        }

        if mv.origin() == MoveOrigin::User {
            log::info!("Solved!");
            self.scrambled = false;
            self.planned.clear();
            self.history.clear();
            self.listener.solved();
        } else if mv.is_recorded() {
            // Set-up moves that land on solved leave nothing to undo; the
            // rest of the queued set-up still runs
            log::debug!("Set-up moves returned the cube to solved");
            self.scrambled = false;
            self.history.clear();
        }
    }
}
