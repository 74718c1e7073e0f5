use serde::{Deserialize, Serialize};

use crate::state::{GameState, StressLevel};

/// Category of a life event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Emergency,
    Opportunity,
    Scam,
    Regular,
    Random,
    Boss,
}

/// Rarity tier driving difficulty-dependent sampling weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Advertised risk of an option. Informational for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    #[default]
    Safe,
    Moderate,
    Risky,
}

/// Scalar stats addressable by effect ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Balance,
    Savings,
    Loans,
    EmiPerMonth,
    Income,
    FutureScore,
}

impl StatField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Savings => "savings",
            Self::Loans => "loans",
            Self::EmiPerMonth => "emi_per_month",
            Self::Income => "income",
            Self::FutureScore => "future_score",
        }
    }
}

/// Stress adjustments expressible by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressOp {
    /// Overwrite the level outright.
    Set(StressLevel),
    /// Worsen one step; levels at or past `cap` stay put.
    RaiseCapped(StressLevel),
    /// Ease one step; levels at or below `floor` stay put.
    RelaxFloored(StressLevel),
    /// Ease one step only when currently at exactly this level.
    RelaxFrom(StressLevel),
}

/// Guards evaluated against the pre-choice snapshot, never the partially
/// applied working state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cond {
    SavingsAtLeast(i64),
    BalanceAtLeast(i64),
    IncomeAbove(i64),
    StressIs(StressLevel),
}

impl Cond {
    #[must_use]
    pub fn holds(self, state: &GameState) -> bool {
        match self {
            Self::SavingsAtLeast(amount) => state.savings >= amount,
            Self::BalanceAtLeast(amount) => state.balance >= amount,
            Self::IncomeAbove(amount) => state.income > amount,
            Self::StressIs(level) => state.stress == level,
        }
    }
}

/// A single state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// Add to a stat without clamping. Negative amounts subtract and may
    /// drive the stat below zero where the catalog allows it.
    Add(StatField, i64),
    /// Subtract from a stat, floored at zero.
    Spend(StatField, i64),
    /// Overwrite a stat.
    Set(StatField, i64),
    Stress(StressOp),
    /// Credit one avoided scam.
    AvoidScam,
}

/// One step of an option's effect. An effect is an ordered step list; the
/// engine interprets it against a working copy of the state. Catalog entries
/// carry at most one `Chance` step, so a resolution consults the random
/// source at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Op(Op),
    /// Branch on the pre-choice snapshot.
    If {
        cond: Cond,
        #[serde(default)]
        then: Vec<Op>,
        #[serde(default)]
        otherwise: Vec<Op>,
    },
    /// One uniform draw in `[0, 1)`; `win` applies when the roll strictly
    /// exceeds `threshold`. Thresholds are game-balance literals.
    Chance {
        threshold: f64,
        #[serde(default)]
        win: Vec<Op>,
        #[serde(default)]
        lose: Vec<Op>,
    },
}

/// A choice within a life event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOption {
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub risk: Risk,
    /// Feedback shown verbatim after the choice resolves. Never empty.
    pub consequence: String,
    #[serde(default)]
    pub effect: Vec<Step>,
}

/// A life event in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub kind: EventKind,
    pub rarity: Rarity,
    /// Informational headline cost; the options carry the real effects.
    #[serde(default)]
    pub expense: Option<i64>,
    /// Earliest zero-based month this event may be drawn.
    #[serde(default)]
    pub min_month: Option<u8>,
    pub options: Vec<EventOption>,
}

/// Container for all event data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EventCatalog {
    pub events: Vec<LifeEvent>,
}

impl EventCatalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid event data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a catalog from pre-built events.
    #[must_use]
    pub fn from_events(events: Vec<LifeEvent>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LifeEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
