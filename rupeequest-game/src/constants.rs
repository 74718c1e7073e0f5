//! Centralized balance and tuning constants for Rupee Quest game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that game balance can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Starting stats -----------------------------------------------------------
pub(crate) const START_BALANCE: i64 = 15_000;
pub(crate) const START_SAVINGS: i64 = 10_000;
pub(crate) const START_INCOME: i64 = 25_000;
pub(crate) const START_AGE: u32 = 22;
pub(crate) const START_FUTURE_SCORE: i64 = 50;
pub(crate) const DEFAULT_PLAYER_NAME: &str = "Player";

// Calendar -----------------------------------------------------------------
pub(crate) const MONTHS_PER_YEAR: u8 = 12;
pub(crate) const FINAL_MONTH_INDEX: u8 = 11;
pub(crate) const DAYS_PER_MONTH: u32 = 28;

// Monthly ledger -----------------------------------------------------------
pub(crate) const LIVING_EXPENSE_PCT: i64 = 60;
pub(crate) const EMI_LOAN_DECAY: i64 = 500;

// Event pacing -------------------------------------------------------------
pub(crate) const EVENTS_PER_MONTH_PEACEFUL: usize = 2;
pub(crate) const EVENTS_PER_MONTH_SURVIVAL: usize = 3;
pub(crate) const EVENTS_PER_MONTH_HARDCORE: usize = 4;

// Month grading ------------------------------------------------------------
pub(crate) const MONTH_GRADE_S_MIN: u32 = 7;
pub(crate) const MONTH_GRADE_A_MIN: u32 = 5;
pub(crate) const MONTH_GRADE_B_MIN: u32 = 3;
pub(crate) const MONTH_GRADE_C_MIN: u32 = 2;
pub(crate) const FUTURE_SCORE_TARGET: i64 = 60;

// Final grading ------------------------------------------------------------
pub(crate) const FINAL_GRADE_S_MIN: f64 = 120.0;
pub(crate) const FINAL_GRADE_A_MIN: f64 = 90.0;
pub(crate) const FINAL_GRADE_B_MIN: f64 = 60.0;
pub(crate) const FINAL_GRADE_C_MIN: f64 = 30.0;
pub(crate) const NET_WORTH_SCORE_DIVISOR: f64 = 1_000.0;
pub(crate) const SCAM_SCORE_BONUS: f64 = 10.0;
pub(crate) const LOAN_SCORE_PENALTY_DIVISOR: f64 = 500.0;

// Display helpers ----------------------------------------------------------
pub(crate) const FUTURE_PROGRESS_MAX: i64 = 100;
