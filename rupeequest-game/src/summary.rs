//! Month-end and end-of-run derived metrics. Pure reads over `GameState`,
//! no randomness.

use serde::{Deserialize, Serialize};

use crate::constants::{
    FINAL_GRADE_A_MIN, FINAL_GRADE_B_MIN, FINAL_GRADE_C_MIN, FINAL_GRADE_S_MIN,
    FUTURE_SCORE_TARGET, LIVING_EXPENSE_PCT, LOAN_SCORE_PENALTY_DIVISOR, MONTH_GRADE_A_MIN,
    MONTH_GRADE_B_MIN, MONTH_GRADE_C_MIN, MONTH_GRADE_S_MIN, NET_WORTH_SCORE_DIVISOR,
    SCAM_SCORE_BONUS,
};
use crate::state::{GameState, StressLevel};

/// Letter grades shared by the monthly and final report cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one living-expenses formula. `advance_month` and the monthly report
/// both call this; keeping a single definition is what keeps the displayed
/// summary in exact numeric sync with the balance actually applied.
#[must_use]
pub const fn living_expenses(income: i64) -> i64 {
    income * LIVING_EXPENSE_PCT / 100
}

/// Objective checklist rendered alongside the monthly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthObjectives {
    pub avoided_scams: bool,
    pub future_on_track: bool,
    pub stress_managed: bool,
    pub debt_free: bool,
}

/// Financial overview for the month that just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub income: i64,
    pub living_expenses: i64,
    pub emi_per_month: i64,
    /// `income - (living_expenses + emi_per_month)`; may be negative.
    pub net_change: i64,
    pub objectives: MonthObjectives,
}

impl MonthlyReport {
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        let living = living_expenses(state.income);
        Self {
            income: state.income,
            living_expenses: living,
            emi_per_month: state.emi_per_month,
            net_change: state.income - (living + state.emi_per_month),
            objectives: MonthObjectives {
                avoided_scams: state.scams_avoided > 0,
                future_on_track: state.future_score >= FUTURE_SCORE_TARGET,
                stress_managed: state.stress <= StressLevel::Medium,
                debt_free: state.loans == 0,
            },
        }
    }
}

/// Report card for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthGrade {
    pub grade: Grade,
    pub label: &'static str,
    pub score: u32,
}

/// Grade the month that just completed.
#[must_use]
pub fn month_grade(state: &GameState) -> MonthGrade {
    let report = MonthlyReport::for_state(state);
    let mut score = 0u32;
    if report.net_change > 0 {
        score += 2;
    }
    match state.stress {
        StressLevel::Low => score += 2,
        StressLevel::Medium => score += 1,
        StressLevel::High | StressLevel::Critical => {}
    }
    if state.future_score >= FUTURE_SCORE_TARGET {
        score += 2;
    }
    if state.scams_avoided > 0 {
        score += 1;
    }
    if state.loans == 0 {
        score += 1;
    }

    let (grade, label) = if score >= MONTH_GRADE_S_MIN {
        (Grade::S, "PERFECT")
    } else if score >= MONTH_GRADE_A_MIN {
        (Grade::A, "EXCELLENT")
    } else if score >= MONTH_GRADE_B_MIN {
        (Grade::B, "GOOD")
    } else if score >= MONTH_GRADE_C_MIN {
        (Grade::C, "OKAY")
    } else {
        (Grade::D, "TOUGH")
    };

    MonthGrade {
        grade,
        label,
        score,
    }
}

/// End-of-run report card plus the aggregates the result screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalSummary {
    pub grade: Grade,
    pub label: &'static str,
    /// Composite score; fractional because net worth and loans contribute
    /// divided amounts.
    pub score: f64,
    pub net_worth: i64,
    pub future_score: i64,
    pub scams_avoided: u32,
    pub total_events_handled: u32,
    pub stress: StressLevel,
    pub achievements_unlocked: usize,
}

/// Grade a finished session.
#[must_use]
pub fn final_summary(state: &GameState) -> FinalSummary {
    let net_worth = state.net_worth();
    #[allow(clippy::cast_precision_loss)]
    let score = state.future_score as f64
        + net_worth as f64 / NET_WORTH_SCORE_DIVISOR
        + f64::from(state.scams_avoided) * SCAM_SCORE_BONUS
        - state.loans as f64 / LOAN_SCORE_PENALTY_DIVISOR;

    let (grade, label) = if score >= FINAL_GRADE_S_MIN {
        (Grade::S, "LEGENDARY!")
    } else if score >= FINAL_GRADE_A_MIN {
        (Grade::A, "EXCELLENT!")
    } else if score >= FINAL_GRADE_B_MIN {
        (Grade::B, "GOOD RUN")
    } else if score >= FINAL_GRADE_C_MIN {
        (Grade::C, "SURVIVED")
    } else {
        (Grade::D, "GAME OVER")
    };

    FinalSummary {
        grade,
        label,
        score,
        net_worth,
        future_score: state.future_score,
        scams_avoided: state.scams_avoided,
        total_events_handled: state.total_events_handled,
        stress: state.stress,
        achievements_unlocked: state.achievements.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn living_expenses_floor_the_income_share() {
        assert_eq!(living_expenses(25_000), 15_000);
        assert_eq!(living_expenses(25_001), 15_000);
        assert_eq!(living_expenses(0), 0);
    }

    #[test]
    fn monthly_report_balances_income_against_both_deductions() {
        let state = GameState {
            emi_per_month: 1_000,
            ..GameState::default()
        };
        let report = MonthlyReport::for_state(&state);
        assert_eq!(report.living_expenses, 15_000);
        assert_eq!(report.net_change, 25_000 - 15_000 - 1_000);
        assert!(report.objectives.debt_free);
        assert!(!report.objectives.avoided_scams);
    }

    #[test]
    fn default_month_is_excellent() {
        // Net positive (+2), Low stress (+2), future 50 < 60, no scams
        // avoided, loans clear (+1): score 5.
        let grade = month_grade(&GameState::default());
        assert_eq!(grade.score, 5);
        assert_eq!(grade.grade, Grade::A);
        assert_eq!(grade.label, "EXCELLENT");
    }

    #[test]
    fn perfect_month_needs_every_objective() {
        let state = GameState {
            future_score: 60,
            scams_avoided: 1,
            ..GameState::default()
        };
        let grade = month_grade(&state);
        assert_eq!(grade.score, 8);
        assert_eq!(grade.grade, Grade::S);
        assert_eq!(grade.label, "PERFECT");
    }

    #[test]
    fn drowning_month_grades_tough() {
        let state = GameState {
            income: 0,
            loans: 50_000,
            emi_per_month: 5_000,
            stress: StressLevel::Critical,
            future_score: 10,
            ..GameState::default()
        };
        let grade = month_grade(&state);
        assert_eq!(grade.score, 0);
        assert_eq!(grade.grade, Grade::D);
        assert_eq!(grade.label, "TOUGH");
    }

    #[test]
    fn final_score_formula_matches_the_reference_run() {
        // futureScore 50, net worth 25,000, 3 scams avoided, no loans:
        // 50 + 25 + 30 - 0 = 105 -> A / EXCELLENT!
        let state = GameState {
            balance: 10_000,
            savings: 15_000,
            future_score: 50,
            scams_avoided: 3,
            ..GameState::default()
        };
        let summary = final_summary(&state);
        assert_eq!(summary.net_worth, 25_000);
        assert!((summary.score - 105.0).abs() < f64::EPSILON);
        assert_eq!(summary.grade, Grade::A);
        assert_eq!(summary.label, "EXCELLENT!");
    }

    #[test]
    fn loans_drag_the_final_grade_down() {
        let state = GameState {
            balance: 0,
            savings: 0,
            loans: 30_000,
            future_score: 40,
            ..GameState::default()
        };
        // 40 + (-30) - 60 = -50 -> D.
        let summary = final_summary(&state);
        assert_eq!(summary.net_worth, -30_000);
        assert_eq!(summary.grade, Grade::D);
        assert_eq!(summary.label, "GAME OVER");
    }

    #[test]
    fn legendary_threshold_is_inclusive() {
        let state = GameState {
            balance: 70_000,
            savings: 0,
            future_score: 50,
            ..GameState::default()
        };
        // 50 + 70 = 120 exactly.
        let summary = final_summary(&state);
        assert_eq!(summary.grade, Grade::S);
        assert_eq!(summary.label, "LEGENDARY!");
    }
}
