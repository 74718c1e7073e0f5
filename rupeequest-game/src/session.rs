//! Session state machine: sequences month -> event -> consequence -> summary
//! across a twelve-month run, owning the authoritative `GameState` and all
//! per-month working state.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::constants::{EMI_LOAN_DECAY, FINAL_MONTH_INDEX, MONTHS_PER_YEAR};
use crate::data::{EventCatalog, LifeEvent};
use crate::engine::{self, EngineError, StateChanges, UnlockList};
use crate::events::builtin_catalog;
use crate::sampler::select_events;
use crate::state::{ConfigError, GameState, StartConfig, StressLevel};
use crate::summary::living_expenses;

/// Where the session currently sits in the play loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-session; nothing drawn yet.
    Start,
    /// Between months, waiting for the next month to begin.
    Playing,
    /// An event is on screen awaiting a choice.
    Event,
    /// Choice feedback awaiting acknowledgment.
    Consequence,
    /// Month-end report awaiting acknowledgment.
    Summary,
    /// Terminal; only a restart leaves it.
    GameOver,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Playing => "playing",
            Self::Event => "event",
            Self::Consequence => "consequence",
            Self::Summary => "summary",
            Self::GameOver => "gameover",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when a caller drives the machine out of order or with bad
/// inputs. The session state is never mutated when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("operation requires the '{expected}' phase, session is in '{actual}'")]
    PhaseViolation { expected: Phase, actual: Phase },
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of opening a month: the drawn events and, when the draw was
/// non-empty, the first one to present.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthStart {
    pub events: Vec<LifeEvent>,
    pub first_event: Option<LifeEvent>,
}

/// Stored feedback for the consequence screen. The replacement state itself
/// is read through `Session::state`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOutcome {
    pub consequence: String,
    pub changes: StateChanges,
    pub unlocked: UnlockList,
}

/// Result of closing a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEnd {
    /// Cash applied to the balance: income minus living expenses and EMI.
    pub net_change: i64,
    pub is_game_over: bool,
}

/// One full playthrough. Owns the game state, the month's drawn events, the
/// used-event tracking, and the session random source.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    state: GameState,
    catalog: EventCatalog,
    month_events: Vec<LifeEvent>,
    event_index: usize,
    last_outcome: Option<ChoiceOutcome>,
    used_events: HashSet<String>,
    rng: ChaCha20Rng,
    seed: u64,
}

impl Session {
    /// Construct a fresh session over the built-in catalog.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(seed, builtin_catalog().clone())
    }

    /// Construct a session over a custom catalog.
    #[must_use]
    pub fn with_catalog(seed: u64, catalog: EventCatalog) -> Self {
        Self {
            phase: Phase::Start,
            state: GameState::default(),
            catalog,
            month_events: Vec::new(),
            event_index: 0,
            last_outcome: None,
            used_events: HashSet::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Begin a session from the given starting values, clearing used-event
    /// tracking and history.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Config` when the configuration is invalid; the
    /// session is left untouched.
    pub fn start(&mut self, config: &StartConfig) -> Result<&GameState, SessionError> {
        let state = config.build_state()?;
        log::info!(
            "session started | player:{} difficulty:{}",
            state.player_name,
            state.difficulty
        );
        self.state = state;
        self.used_events.clear();
        self.month_events.clear();
        self.event_index = 0;
        self.last_outcome = None;
        self.phase = Phase::Playing;
        Ok(&self.state)
    }

    /// Fully reinitialize, as `start` does. Provided as the named exit from
    /// the terminal phase.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Config` when the configuration is invalid.
    pub fn restart(&mut self, config: &StartConfig) -> Result<&GameState, SessionError> {
        self.start(config)
    }

    /// Draw this month's events and present the first one. With an exhausted
    /// event pool the month skips straight to its summary.
    ///
    /// # Errors
    ///
    /// Returns a phase violation unless the session is in `Playing`.
    pub fn begin_month(&mut self) -> Result<MonthStart, SessionError> {
        self.expect_phase(Phase::Playing)?;
        let count = self.state.difficulty.events_per_month();
        let events = select_events(
            &self.catalog,
            count,
            &self.used_events,
            self.state.month,
            self.state.difficulty,
            &mut self.rng,
        );
        for event in &events {
            self.used_events.insert(event.id.clone());
        }
        log::debug!(
            "month begun | month:{} events:{}",
            self.state.month_name,
            events.len()
        );
        self.month_events.clone_from(&events);
        self.event_index = 0;
        self.phase = if events.is_empty() {
            Phase::Summary
        } else {
            Phase::Event
        };
        Ok(MonthStart {
            first_event: events.first().cloned(),
            events,
        })
    }

    /// Resolve the presented event with the chosen option.
    ///
    /// # Errors
    ///
    /// Returns a phase violation unless the session is in `Event`, or an
    /// engine error when `option_index` is out of range; state is untouched
    /// in both cases.
    pub fn choose_option(&mut self, option_index: usize) -> Result<&ChoiceOutcome, SessionError> {
        self.expect_phase(Phase::Event)?;
        let event = self.month_events[self.event_index].clone();
        let resolution = engine::resolve_choice(
            &self.state,
            &event,
            option_index,
            self.event_index,
            self.month_events.len(),
            &mut self.rng,
        )?;
        self.state = resolution.state;
        self.phase = Phase::Consequence;
        Ok(self.last_outcome.insert(ChoiceOutcome {
            consequence: resolution.consequence,
            changes: resolution.changes,
            unlocked: resolution.unlocked,
        }))
    }

    /// Dismiss the consequence screen, moving to the next event or to the
    /// month summary when the month's events are exhausted.
    ///
    /// # Errors
    ///
    /// Returns a phase violation unless the session is in `Consequence`.
    pub fn acknowledge(&mut self) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Consequence)?;
        let next_index = self.event_index + 1;
        if next_index < self.month_events.len() {
            self.event_index = next_index;
            self.phase = Phase::Event;
        } else {
            self.phase = Phase::Summary;
        }
        Ok(self.phase)
    }

    /// Close the month: settle the monthly ledger, advance the calendar, and
    /// either return to `Playing` or end the run after the final month.
    ///
    /// # Errors
    ///
    /// Returns a phase violation unless the session is in `Summary`.
    pub fn advance_month(&mut self) -> Result<MonthEnd, SessionError> {
        self.expect_phase(Phase::Summary)?;
        let state = &mut self.state;
        let net_change = state.income - (state.emi_per_month + living_expenses(state.income));
        let finished_month = state.month;

        state.balance += net_change;
        state.month = (finished_month + 1) % MONTHS_PER_YEAR;
        state.day = 1;
        state.refresh_month_name();
        state.age += u32::from((finished_month + 1) / MONTHS_PER_YEAR);
        if state.emi_per_month > 0 {
            state.loans = (state.loans - EMI_LOAN_DECAY).max(0);
        }
        state.events_this_month = 0;
        // Stress recovers one step over the month break; Medium holds.
        state.stress = match state.stress {
            StressLevel::Critical => StressLevel::High,
            StressLevel::High => StressLevel::Medium,
            other => other,
        };

        self.month_events.clear();
        self.event_index = 0;
        self.last_outcome = None;

        let is_game_over = finished_month == FINAL_MONTH_INDEX;
        self.phase = if is_game_over {
            Phase::GameOver
        } else {
            Phase::Playing
        };
        log::debug!(
            "month closed | net:{net_change} next:{} game_over:{is_game_over}",
            self.state.month_name
        );
        Ok(MonthEnd {
            net_change,
            is_game_over,
        })
    }

    /// Deterministically reseed the session random source.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn current_event(&self) -> Option<&LifeEvent> {
        if self.phase == Phase::Event || self.phase == Phase::Consequence {
            self.month_events.get(self.event_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn month_events(&self) -> &[LifeEvent] {
        &self.month_events
    }

    #[must_use]
    pub const fn event_index(&self) -> usize {
        self.event_index
    }

    #[must_use]
    pub const fn last_outcome(&self) -> Option<&ChoiceOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Fraction of this month's events already handled, for the progress bar.
    #[must_use]
    pub fn month_progress(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let progress = self.event_index as f32 / self.month_events.len().max(1) as f32;
        progress
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::PhaseViolation {
                expected,
                actual: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Difficulty;

    fn started_session(seed: u64) -> Session {
        let mut session = Session::new(seed);
        session.start(&StartConfig::default()).unwrap();
        session
    }

    fn play_through_month(session: &mut Session) {
        let start = session.begin_month().unwrap();
        for _ in 0..start.events.len() {
            session.choose_option(0).unwrap();
            session.acknowledge().unwrap();
        }
        assert_eq!(session.phase(), Phase::Summary);
    }

    #[test]
    fn new_session_waits_in_start() {
        let session = Session::new(1);
        assert_eq!(session.phase(), Phase::Start);
        assert!(session.current_event().is_none());
    }

    #[test]
    fn start_builds_defaults_and_enters_playing() {
        let session = started_session(1);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.state().balance, 15_000);
        assert_eq!(session.state().month_name, "January");
    }

    #[test]
    fn begin_month_draws_difficulty_count_and_marks_used() {
        let mut session = started_session(3);
        let start = session.begin_month().unwrap();
        assert_eq!(start.events.len(), Difficulty::Survival.events_per_month());
        assert_eq!(session.phase(), Phase::Event);
        assert_eq!(
            start.first_event.as_ref().map(|event| event.id.as_str()),
            start.events.first().map(|event| event.id.as_str())
        );
        for event in &start.events {
            assert!(session.used_events.contains(&event.id));
        }
    }

    #[test]
    fn wrong_phase_calls_fail_fast_without_mutating() {
        let mut session = started_session(5);
        let before = session.state().clone();

        assert_eq!(
            session.choose_option(0),
            Err(SessionError::PhaseViolation {
                expected: Phase::Event,
                actual: Phase::Playing,
            })
        );
        assert_eq!(
            session.acknowledge(),
            Err(SessionError::PhaseViolation {
                expected: Phase::Consequence,
                actual: Phase::Playing,
            })
        );
        assert_eq!(
            session.advance_month(),
            Err(SessionError::PhaseViolation {
                expected: Phase::Summary,
                actual: Phase::Playing,
            })
        );
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn out_of_range_choice_keeps_the_event_on_screen() {
        let mut session = started_session(7);
        session.begin_month().unwrap();
        let before = session.state().clone();
        let err = session.choose_option(99).unwrap_err();
        assert!(matches!(err, SessionError::Engine(_)));
        assert_eq!(session.phase(), Phase::Event);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn consequence_flow_walks_every_event_then_summary() {
        let mut session = started_session(11);
        let start = session.begin_month().unwrap();
        let total = start.events.len();

        for position in 0..total {
            assert_eq!(session.phase(), Phase::Event);
            assert_eq!(session.event_index(), position);
            let outcome = session.choose_option(0).unwrap();
            assert!(!outcome.consequence.is_empty());
            session.acknowledge().unwrap();
        }
        assert_eq!(session.phase(), Phase::Summary);
        assert_eq!(session.state().events_this_month as usize, total);
    }

    #[test]
    fn advance_month_settles_the_ledger() {
        let mut session = started_session(13);
        play_through_month(&mut session);

        let before = session.state().clone();
        let end = session.advance_month().unwrap();
        let expected_net = before.income - (before.emi_per_month + living_expenses(before.income));
        assert_eq!(end.net_change, expected_net);
        assert!(!end.is_game_over);

        let after = session.state();
        assert_eq!(after.balance, before.balance + expected_net);
        assert_eq!(after.month, 1);
        assert_eq!(after.month_name, "February");
        assert_eq!(after.day, 1);
        assert_eq!(after.events_this_month, 0);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn emi_decays_loans_with_a_floor() {
        let mut session = started_session(17);
        play_through_month(&mut session);
        {
            let state = &mut session.state;
            state.emi_per_month = 1_000;
            state.loans = 8_000;
        }
        session.advance_month().unwrap();
        assert_eq!(session.state().loans, 7_500);

        // Floor at zero.
        play_through_month(&mut session);
        session.state.loans = 300;
        session.advance_month().unwrap();
        assert_eq!(session.state().loans, 0);

        // No EMI, no decay.
        play_through_month(&mut session);
        session.state.emi_per_month = 0;
        session.state.loans = 2_000;
        session.advance_month().unwrap();
        assert_eq!(session.state().loans, 2_000);
    }

    #[test]
    fn stress_decays_one_step_and_medium_holds() {
        let cases = [
            (StressLevel::Critical, StressLevel::High),
            (StressLevel::High, StressLevel::Medium),
            (StressLevel::Medium, StressLevel::Medium),
            (StressLevel::Low, StressLevel::Low),
        ];
        for (start, expected) in cases {
            let mut session = started_session(19);
            play_through_month(&mut session);
            session.state.stress = start;
            session.advance_month().unwrap();
            assert_eq!(session.state().stress, expected, "from {start}");
        }
    }

    #[test]
    fn month_eleven_summary_ends_the_run() {
        let mut session = started_session(23);
        play_through_month(&mut session);
        session.state.month = 11;
        session.state.refresh_month_name();

        let end = session.advance_month().unwrap();
        assert!(end.is_game_over);
        assert_eq!(session.phase(), Phase::GameOver);
        // The calendar and age still wrap into the new year.
        assert_eq!(session.state().month, 0);
        assert_eq!(session.state().age, 23);

        assert!(matches!(
            session.begin_month(),
            Err(SessionError::PhaseViolation { .. })
        ));
    }

    #[test]
    fn restart_resets_history_and_used_events() {
        let mut session = started_session(29);
        play_through_month(&mut session);
        session.advance_month().unwrap();
        assert!(!session.used_events.is_empty());
        assert!(!session.state().decisions_history.is_empty());

        session
            .restart(&StartConfig {
                difficulty: Some(Difficulty::Peaceful),
                ..StartConfig::default()
            })
            .unwrap();
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.used_events.is_empty());
        assert!(session.state().decisions_history.is_empty());
        assert_eq!(session.state().difficulty, Difficulty::Peaceful);
        assert_eq!(session.month_events().len(), 0);
    }

    #[test]
    fn invalid_config_rejected_at_start() {
        let mut session = Session::new(31);
        let err = session
            .start(&StartConfig {
                savings: Some(-5),
                ..StartConfig::default()
            })
            .unwrap_err();
        assert!(matches!(err, SessionError::Config(_)));
        assert_eq!(session.phase(), Phase::Start);
    }

    #[test]
    fn empty_catalog_skips_straight_to_summary() {
        let mut session = Session::with_catalog(37, EventCatalog::empty());
        session.start(&StartConfig::default()).unwrap();
        let start = session.begin_month().unwrap();
        assert!(start.events.is_empty());
        assert!(start.first_event.is_none());
        assert_eq!(session.phase(), Phase::Summary);
    }
}
