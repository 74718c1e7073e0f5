//! Choice resolution: the effect interpreter plus the bookkeeping that turns
//! one chosen option into the next authoritative state.

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::achievements;
use crate::constants::DAYS_PER_MONTH;
use crate::data::{LifeEvent, Op, StatField, Step, StressOp};
use crate::state::{Decision, GameState, StressLevel};

/// Newly unlocked achievement ids for one resolution. Usually empty.
pub type UnlockList = SmallVec<[String; 2]>;

/// Errors raised by choice resolution. The input state is never touched when
/// one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("option index {index} out of range for event '{event_id}' ({len} options)")]
    OptionOutOfRange {
        event_id: String,
        index: usize,
        len: usize,
    },
}

/// Before/after values over the watched-field allowlist, for the
/// "before -> after" consequence presentation. Only fields that actually
/// changed are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChanges {
    pub balance: Option<(i64, i64)>,
    pub savings: Option<(i64, i64)>,
    pub loans: Option<(i64, i64)>,
    pub stress: Option<(StressLevel, StressLevel)>,
    pub future_score: Option<(i64, i64)>,
    pub income: Option<(i64, i64)>,
}

impl StateChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.balance.is_none()
            && self.savings.is_none()
            && self.loans.is_none()
            && self.stress.is_none()
            && self.future_score.is_none()
            && self.income.is_none()
    }

    fn diff(before: &GameState, after: &GameState) -> Self {
        let field = |a: i64, b: i64| (a != b).then_some((a, b));
        Self {
            balance: field(before.balance, after.balance),
            savings: field(before.savings, after.savings),
            loans: field(before.loans, after.loans),
            stress: (before.stress != after.stress).then_some((before.stress, after.stress)),
            future_score: field(before.future_score, after.future_score),
            income: field(before.income, after.income),
        }
    }
}

/// Outcome of resolving one choice.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceResolution {
    /// The replacement state. Callers adopt it wholesale.
    pub state: GameState,
    /// Feedback text of the chosen option, verbatim.
    pub consequence: String,
    pub unlocked: UnlockList,
    pub changes: StateChanges,
}

/// Resolve `option_index` of `event` against `state`.
///
/// `position_in_month` is the zero-based slot of this event within the
/// month's draw of `events_in_month` events; together they place the cosmetic
/// day-of-month. Probabilistic effects consult `rng` at most once.
///
/// # Errors
///
/// Returns `EngineError::OptionOutOfRange` when the index does not name an
/// option of `event`.
pub fn resolve_choice<R: Rng>(
    state: &GameState,
    event: &LifeEvent,
    option_index: usize,
    position_in_month: usize,
    events_in_month: usize,
    rng: &mut R,
) -> Result<ChoiceResolution, EngineError> {
    let option = event
        .options
        .get(option_index)
        .ok_or_else(|| EngineError::OptionOutOfRange {
            event_id: event.id.clone(),
            index: option_index,
            len: event.options.len(),
        })?;

    let before = state;
    let mut next = state.clone();
    apply_effect(&option.effect, before, &mut next, rng);

    let day = day_of_month(position_in_month, events_in_month);
    next.day = day;
    next.total_events_handled += 1;
    next.events_this_month += 1;
    // The streak survives when the player was already calm or ends up calm.
    next.streak = if next.stress == StressLevel::Low || before.stress == StressLevel::Low {
        before.streak + 1
    } else {
        0
    };
    next.decisions_history.push(Decision {
        event: event.title.clone(),
        choice: option.label.clone(),
        impact: option.consequence.clone(),
        day,
        month: next.month_name.clone(),
    });

    let mut unlocked = UnlockList::new();
    for id in achievements::newly_unlocked(&next) {
        next.achievements.push(id.to_string());
        unlocked.push(id.to_string());
    }
    if !unlocked.is_empty() {
        log::info!("achievements unlocked | {}", unlocked.join(", "));
    }

    let changes = StateChanges::diff(before, &next);
    log::debug!(
        "choice resolved | event:{} option:{option_index} day:{day}",
        event.id
    );

    Ok(ChoiceResolution {
        state: next,
        consequence: option.consequence.clone(),
        unlocked,
        changes,
    })
}

fn day_of_month(position_in_month: usize, events_in_month: usize) -> u8 {
    let total = events_in_month.max(1);
    ((position_in_month + 1) * DAYS_PER_MONTH as usize / total) as u8
}

/// Interpret an effect step list. Conditions branch on `before`, the
/// pre-choice snapshot; ops mutate `state`, the working copy.
pub(crate) fn apply_effect<R: Rng>(
    steps: &[Step],
    before: &GameState,
    state: &mut GameState,
    rng: &mut R,
) {
    for step in steps {
        match step {
            Step::Op(op) => apply_op(*op, state),
            Step::If {
                cond,
                then,
                otherwise,
            } => {
                let branch = if cond.holds(before) { then } else { otherwise };
                for op in branch {
                    apply_op(*op, state);
                }
            }
            Step::Chance {
                threshold,
                win,
                lose,
            } => {
                let roll: f64 = rng.r#gen();
                let branch = if roll > *threshold { win } else { lose };
                for op in branch {
                    apply_op(*op, state);
                }
            }
        }
    }
}

fn apply_op(op: Op, state: &mut GameState) {
    match op {
        Op::Add(field, amount) => *stat_mut(state, field) += amount,
        Op::Spend(field, amount) => {
            let stat = stat_mut(state, field);
            *stat = (*stat - amount).max(0);
        }
        Op::Set(field, value) => *stat_mut(state, field) = value,
        Op::Stress(stress_op) => state.stress = apply_stress(stress_op, state.stress),
        Op::AvoidScam => state.scams_avoided += 1,
    }
}

fn stat_mut(state: &mut GameState, field: StatField) -> &mut i64 {
    match field {
        StatField::Balance => &mut state.balance,
        StatField::Savings => &mut state.savings,
        StatField::Loans => &mut state.loans,
        StatField::EmiPerMonth => &mut state.emi_per_month,
        StatField::Income => &mut state.income,
        StatField::FutureScore => &mut state.future_score,
    }
}

fn apply_stress(op: StressOp, current: StressLevel) -> StressLevel {
    match op {
        StressOp::Set(level) => level,
        StressOp::RaiseCapped(cap) => {
            if current < cap {
                current.raised()
            } else {
                current
            }
        }
        StressOp::RelaxFloored(floor) => {
            if current > floor {
                current.relaxed()
            } else {
                current
            }
        }
        StressOp::RelaxFrom(level) => {
            if current == level {
                current.relaxed()
            } else {
                current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::builtin_catalog;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand_chacha::ChaCha20Rng;

    fn win_rng() -> StepRng {
        // Every draw is ~1.0, strictly above any catalog threshold.
        StepRng::new(u64::MAX, 0)
    }

    fn lose_rng() -> StepRng {
        // Every draw is 0.0, never above a threshold.
        StepRng::new(0, 0)
    }

    fn medical() -> &'static LifeEvent {
        builtin_catalog().get("medical_emergency").unwrap()
    }

    #[test]
    fn medical_use_savings_spends_the_emergency_fund() {
        let state = GameState::default();
        let outcome = resolve_choice(&state, medical(), 0, 0, 3, &mut lose_rng()).unwrap();

        assert_eq!(outcome.state.savings, 2_000);
        assert_eq!(outcome.state.stress, StressLevel::Low);
        assert_eq!(outcome.state.future_score, 55);
        assert_eq!(
            outcome.consequence,
            "Paid ₹8,000 from savings. This is why emergency funds exist!"
        );
    }

    #[test]
    fn medical_short_savings_raises_stress_instead() {
        let state = GameState {
            savings: 5_000,
            ..GameState::default()
        };
        let outcome = resolve_choice(&state, medical(), 0, 0, 3, &mut lose_rng()).unwrap();
        assert_eq!(outcome.state.savings, 0);
        assert_eq!(outcome.state.stress, StressLevel::High);
        assert_eq!(outcome.state.future_score, 45);
    }

    #[test]
    fn medical_ignore_is_always_critical() {
        for start_score in [0i64, 50, 200] {
            let state = GameState {
                future_score: start_score,
                ..GameState::default()
            };
            let outcome = resolve_choice(&state, medical(), 2, 0, 3, &mut lose_rng()).unwrap();
            assert_eq!(outcome.state.stress, StressLevel::Critical);
            assert_eq!(outcome.state.future_score, start_score - 20);
        }
    }

    #[test]
    fn out_of_range_option_is_an_error() {
        let state = GameState::default();
        let err = resolve_choice(&state, medical(), 3, 0, 3, &mut lose_rng()).unwrap_err();
        assert_eq!(
            err,
            EngineError::OptionOutOfRange {
                event_id: "medical_emergency".to_string(),
                index: 3,
                len: 3,
            }
        );
    }

    #[test]
    fn resolution_is_pure_given_a_fixed_random_source() {
        let state = GameState::default();
        let event = builtin_catalog().get("stock_tip").unwrap();
        let first = resolve_choice(&state, event, 0, 1, 3, &mut ChaCha20Rng::seed_from_u64(9))
            .unwrap();
        let second = resolve_choice(&state, event, 0, 1, 3, &mut ChaCha20Rng::seed_from_u64(9))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn chance_branches_follow_the_roll() {
        let state = GameState::default();
        let event = builtin_catalog().get("stock_tip").unwrap();

        let won = resolve_choice(&state, event, 0, 0, 1, &mut win_rng()).unwrap();
        assert_eq!(won.state.balance, 21_000);
        assert_eq!(won.state.future_score, 60);

        let lost = resolve_choice(&state, event, 0, 0, 1, &mut lose_rng()).unwrap();
        assert_eq!(lost.state.balance, 12_000);
        assert_eq!(lost.state.future_score, 45);
    }

    #[test]
    fn day_tracks_event_position() {
        assert_eq!(day_of_month(0, 3), 9);
        assert_eq!(day_of_month(1, 3), 18);
        assert_eq!(day_of_month(2, 3), 28);
        assert_eq!(day_of_month(0, 1), 28);
        assert_eq!(day_of_month(1, 4), 14);
    }

    #[test]
    fn streak_rule_matches_pre_or_post_calm() {
        let event = builtin_catalog().get("freelance_gig").unwrap();

        // Pre-choice Low: accepting raises stress to Medium but keeps streak.
        let calm = GameState {
            streak: 2,
            ..GameState::default()
        };
        let outcome = resolve_choice(&calm, event, 0, 0, 3, &mut lose_rng()).unwrap();
        assert_eq!(outcome.state.stress, StressLevel::Medium);
        assert_eq!(outcome.state.streak, 3);

        // Pre Medium, post High: streak resets.
        let tense = GameState {
            stress: StressLevel::Medium,
            streak: 4,
            ..GameState::default()
        };
        let outcome = resolve_choice(&tense, event, 0, 0, 3, &mut lose_rng()).unwrap();
        assert_eq!(outcome.state.stress, StressLevel::High);
        assert_eq!(outcome.state.streak, 0);

        // Pre High, declining relaxes back to Medium; pre was not Low and
        // post is not Low, so the streak still resets.
        let frazzled = GameState {
            stress: StressLevel::High,
            streak: 1,
            ..GameState::default()
        };
        let outcome = resolve_choice(&frazzled, event, 2, 0, 3, &mut lose_rng()).unwrap();
        assert_eq!(outcome.state.stress, StressLevel::Medium);
        assert_eq!(outcome.state.streak, 0);
    }

    #[test]
    fn scam_avoidance_counts_and_unlocks() {
        let mut state = GameState {
            scams_avoided: 2,
            ..GameState::default()
        };
        let event = builtin_catalog().get("scam_call").unwrap();
        let outcome = resolve_choice(&state, event, 0, 0, 2, &mut lose_rng()).unwrap();
        assert_eq!(outcome.state.scams_avoided, 3);
        assert_eq!(outcome.unlocked.len(), 1);
        assert_eq!(outcome.unlocked[0], "scam_hunter");
        assert!(outcome.state.achievements.contains(&"scam_hunter".to_string()));

        // Achievements never unlock twice.
        state = outcome.state;
        let event = builtin_catalog().get("lottery_scam").unwrap();
        let outcome = resolve_choice(&state, event, 0, 1, 2, &mut lose_rng()).unwrap();
        assert_eq!(outcome.state.scams_avoided, 4);
        assert!(outcome.unlocked.is_empty());
        assert_eq!(
            outcome
                .state
                .achievements
                .iter()
                .filter(|id| id.as_str() == "scam_hunter")
                .count(),
            1
        );
    }

    #[test]
    fn changed_fields_cover_only_the_allowlist_diffs() {
        let state = GameState::default();
        let outcome = resolve_choice(&state, medical(), 1, 0, 3, &mut lose_rng()).unwrap();
        let changes = outcome.changes;
        assert_eq!(changes.loans, Some((0, 8_000)));
        assert_eq!(changes.stress, Some((StressLevel::Low, StressLevel::High)));
        assert_eq!(changes.future_score, Some((50, 40)));
        assert_eq!(changes.balance, None);
        assert_eq!(changes.savings, None);
        assert_eq!(changes.income, None);
    }

    #[test]
    fn history_appends_most_recent_last() {
        let state = GameState::default();
        let outcome = resolve_choice(&state, medical(), 0, 1, 3, &mut lose_rng()).unwrap();
        let decision = outcome.state.decisions_history.last().unwrap();
        assert_eq!(decision.event, "Medical Emergency");
        assert_eq!(decision.choice, "Use Savings");
        assert_eq!(decision.day, 18);
        assert_eq!(decision.month, "January");
        assert_eq!(outcome.state.total_events_handled, 1);
        assert_eq!(outcome.state.events_this_month, 1);
    }

    #[test]
    fn conditions_read_the_pre_choice_snapshot() {
        // Exactly ₹8,000 in savings: the spend leaves zero, but the branch
        // still takes the funded path because it checks the snapshot.
        let state = GameState {
            savings: 8_000,
            ..GameState::default()
        };
        let outcome = resolve_choice(&state, medical(), 0, 0, 3, &mut lose_rng()).unwrap();
        assert_eq!(outcome.state.savings, 0);
        assert_eq!(outcome.state.stress, StressLevel::Low);
        assert_eq!(outcome.state.future_score, 55);
    }
}
