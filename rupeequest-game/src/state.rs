use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    DEFAULT_PLAYER_NAME, FUTURE_PROGRESS_MAX, START_AGE, START_BALANCE, START_FUTURE_SCORE,
    START_INCOME, START_SAVINGS,
};

/// Display names for the twelve month slots, indexed by `GameState::month`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Ordinal stress meter. The ordering `Low < Medium < High < Critical` is
/// load-bearing: many effects move stress by exactly one step along it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl StressLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// One step worse, saturating at `Critical`.
    #[must_use]
    pub const fn raised(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High | Self::Critical => Self::Critical,
        }
    }

    /// One step better, saturating at `Low`.
    #[must_use]
    pub const fn relaxed(self) -> Self {
        match self {
            Self::Low | Self::Medium => Self::Low,
            Self::High => Self::Medium,
            Self::Critical => Self::High,
        }
    }

    /// Fill percentage for the stress meter shown by the presentation layer.
    #[must_use]
    pub const fn meter_pct(self) -> u8 {
        match self {
            Self::Low => 100,
            Self::Medium => 70,
            Self::High => 40,
            Self::Critical => 15,
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("low") {
            Ok(Self::Low)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Self::Medium)
        } else if s.eq_ignore_ascii_case("high") {
            Ok(Self::High)
        } else if s.eq_ignore_ascii_case("critical") {
            Ok(Self::Critical)
        } else {
            Err(())
        }
    }
}

/// Session difficulty, fixed after session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Peaceful,
    #[default]
    Survival,
    Hardcore,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Peaceful => "peaceful",
            Self::Survival => "survival",
            Self::Hardcore => "hardcore",
        }
    }

    /// How many events are drawn for each month at this difficulty.
    #[must_use]
    pub const fn events_per_month(self) -> usize {
        match self {
            Self::Peaceful => crate::constants::EVENTS_PER_MONTH_PEACEFUL,
            Self::Survival => crate::constants::EVENTS_PER_MONTH_SURVIVAL,
            Self::Hardcore => crate::constants::EVENTS_PER_MONTH_HARDCORE,
        }
    }

    /// Lenient parse used at configuration boundaries: unrecognized labels
    /// fall back to `Survival`, matching the sampler's weight-table fallback.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label).unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "peaceful" => Ok(Self::Peaceful),
            "survival" => Ok(Self::Survival),
            "hardcore" => Ok(Self::Hardcore),
            _ => Err(()),
        }
    }
}

/// One resolved choice, as recorded in the session history. Write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub event: String,
    pub choice: String,
    pub impact: String,
    pub day: u8,
    pub month: String,
}

/// The single mutable root of a session. Owned by the session state machine;
/// pure functions receive it by reference and return replacements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub balance: i64,
    pub savings: i64,
    pub loans: i64,
    pub emi_per_month: i64,
    pub income: i64,
    pub stress: StressLevel,
    pub future_score: i64,
    /// Zero-based calendar month, always 0..=11.
    pub month: u8,
    /// Cosmetic within-month day, derived from event position.
    pub day: u8,
    pub age: u32,
    /// Display name for `month`; kept in sync via `refresh_month_name`.
    pub month_name: String,
    pub scams_avoided: u32,
    pub decisions_history: Vec<Decision>,
    /// Unlocked achievement ids, duplicate-free, in unlock order.
    pub achievements: Vec<String>,
    pub events_this_month: u32,
    pub total_events_handled: u32,
    /// Consecutive choices that started or ended at `Low` stress.
    pub streak: u32,
    pub player_name: String,
    pub difficulty: Difficulty,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            balance: START_BALANCE,
            savings: START_SAVINGS,
            loans: 0,
            emi_per_month: 0,
            income: START_INCOME,
            stress: StressLevel::Low,
            future_score: START_FUTURE_SCORE,
            month: 0,
            day: 1,
            age: START_AGE,
            month_name: MONTH_NAMES[0].to_string(),
            scams_avoided: 0,
            decisions_history: Vec::new(),
            achievements: Vec::new(),
            events_this_month: 0,
            total_events_handled: 0,
            streak: 0,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            difficulty: Difficulty::Survival,
        }
    }
}

impl GameState {
    /// Month display name for a zero-based month index.
    #[must_use]
    pub fn month_name_for(month: u8) -> &'static str {
        MONTH_NAMES[usize::from(month % 12)]
    }

    pub(crate) fn refresh_month_name(&mut self) {
        self.month_name = Self::month_name_for(self.month).to_string();
    }

    #[must_use]
    pub const fn net_worth(&self) -> i64 {
        self.balance + self.savings - self.loans
    }

    /// Future score clamped to the 0-100 progress bar. Display only; the
    /// stored score is unbounded.
    #[must_use]
    pub fn future_progress(&self) -> u8 {
        u8::try_from(self.future_score.clamp(0, FUTURE_PROGRESS_MAX)).unwrap_or(0)
    }

    /// Most recent decisions, newest first, capped at `limit`.
    #[must_use]
    pub fn recent_decisions(&self, limit: usize) -> Vec<&Decision> {
        self.decisions_history.iter().rev().take(limit).collect()
    }
}

/// Player-tunable starting values for a new session. Every field is optional
/// and independently defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StartConfig {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub savings: Option<i64>,
    #[serde(default)]
    pub income: Option<i64>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// Errors raised when starting values violate their documented bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be non-negative (got {value})")]
    NegativeAmount { field: &'static str, value: i64 },
}

impl StartConfig {
    /// Validate the configured starting values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a money field is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("balance", self.balance),
            ("savings", self.savings),
            ("income", self.income),
        ] {
            if let Some(value) = value
                && value < 0
            {
                return Err(ConfigError::NegativeAmount { field, value });
            }
        }
        Ok(())
    }

    /// Build a fresh `GameState` from these values, falling back to the
    /// standard defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when validation fails.
    pub fn build_state(&self) -> Result<GameState, ConfigError> {
        self.validate()?;
        let mut state = GameState::default();
        if let Some(name) = &self.player_name {
            state.player_name = name.clone();
        }
        if let Some(balance) = self.balance {
            state.balance = balance;
        }
        if let Some(savings) = self.savings {
            state.savings = savings;
        }
        if let Some(income) = self.income {
            state.income = income;
        }
        if let Some(age) = self.age {
            state.age = age;
        }
        if let Some(difficulty) = self.difficulty {
            state.difficulty = difficulty;
        }
        Ok(state)
    }
}
