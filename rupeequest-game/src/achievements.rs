//! Achievement catalog and unlock evaluation.
//!
//! Predicates are pure reads over `GameState`; they run after every choice
//! resolution, so they must stay cheap and side-effect free.

use crate::state::{GameState, StressLevel};

/// A condition-gated unlock. Predicates are named functions registered in the
/// static table below and dispatched by id.
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub condition: fn(&GameState) -> bool,
}

fn first_save(state: &GameState) -> bool {
    state.savings >= 20_000
}

fn scam_hunter(state: &GameState) -> bool {
    state.scams_avoided >= 3
}

fn debt_free(state: &GameState) -> bool {
    state.loans == 0 && state.total_events_handled > 5
}

fn investor(state: &GameState) -> bool {
    state.future_score >= 80
}

fn survivor(state: &GameState) -> bool {
    state.month >= 6
}

fn zen_master(state: &GameState) -> bool {
    state.streak >= 3 && state.stress == StressLevel::Low
}

fn rich(state: &GameState) -> bool {
    state.balance + state.savings >= 100_000
}

/// The process-wide immutable achievement catalog, in unlock-report order.
pub const ACHIEVEMENTS: [Achievement; 7] = [
    Achievement {
        id: "first_save",
        title: "First Step",
        description: "Reach ₹20,000 in savings",
        icon: "🎯",
        condition: first_save,
    },
    Achievement {
        id: "scam_hunter",
        title: "Scam Hunter",
        description: "Avoid 3 scams",
        icon: "🛡️",
        condition: scam_hunter,
    },
    Achievement {
        id: "debt_free",
        title: "Debt Free",
        description: "Clear all loans",
        icon: "🆓",
        condition: debt_free,
    },
    Achievement {
        id: "investor",
        title: "Smart Investor",
        description: "Reach future score of 80",
        icon: "📈",
        condition: investor,
    },
    Achievement {
        id: "survivor",
        title: "Survivor",
        description: "Complete 6 months",
        icon: "⚔️",
        condition: survivor,
    },
    Achievement {
        id: "zen_master",
        title: "Zen Master",
        description: "Keep stress Low for 3 consecutive events",
        icon: "🧘",
        condition: zen_master,
    },
    Achievement {
        id: "rich",
        title: "Wealthy",
        description: "Accumulate ₹100,000 total (balance + savings)",
        icon: "💎",
        condition: rich,
    },
];

/// Look up an achievement definition by id.
#[must_use]
pub fn get(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|achievement| achievement.id == id)
}

/// Ids whose condition holds for `state` but are not yet recorded on it,
/// in catalog order. Empty is the common case.
#[must_use]
pub fn newly_unlocked(state: &GameState) -> Vec<&'static str> {
    ACHIEVEMENTS
        .iter()
        .filter(|achievement| {
            !state.achievements.iter().any(|id| id == achievement.id)
                && (achievement.condition)(state)
        })
        .map(|achievement| achievement.id)
        .collect()
}
