//! Rupee Quest Game Engine
//!
//! Platform-agnostic core game logic for Rupee Quest, a turn-based personal
//! finance life simulation. This crate provides all game mechanics without UI
//! or platform-specific dependencies: the presentation layer renders the
//! state and events it exposes and drives the session through its phases.

pub mod achievements;
pub mod constants;
pub mod data;
pub mod engine;
pub mod events;
pub mod sampler;
pub mod session;
pub mod state;
pub mod summary;

// Re-export commonly used types
pub use achievements::{ACHIEVEMENTS, Achievement, newly_unlocked};
pub use data::{
    Cond, EventCatalog, EventKind, EventOption, LifeEvent, Op, Rarity, Risk, StatField, Step,
    StressOp,
};
pub use engine::{ChoiceResolution, EngineError, StateChanges, UnlockList, resolve_choice};
pub use events::builtin_catalog;
pub use sampler::{RarityWeights, rarity_weights, select_events};
pub use session::{ChoiceOutcome, MonthEnd, MonthStart, Phase, Session, SessionError};
pub use state::{
    ConfigError, Decision, Difficulty, GameState, MONTH_NAMES, StartConfig, StressLevel,
};
pub use summary::{
    FinalSummary, Grade, MonthGrade, MonthObjectives, MonthlyReport, final_summary,
    living_expenses, month_grade,
};
