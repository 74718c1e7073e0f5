//! Event selection logic.

use rand::Rng;
use std::collections::HashSet;

use crate::data::{EventCatalog, LifeEvent, Rarity};
use crate::state::Difficulty;

/// Per-rarity sampling weights for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub legendary: u32,
}

impl RarityWeights {
    #[must_use]
    pub const fn weight(self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
        }
    }
}

/// Rarity weight table for a difficulty tier. The ratios, not the absolute
/// numbers, are what the game balance depends on.
#[must_use]
pub const fn rarity_weights(difficulty: Difficulty) -> RarityWeights {
    match difficulty {
        Difficulty::Peaceful => RarityWeights {
            common: 50,
            uncommon: 30,
            rare: 15,
            legendary: 5,
        },
        Difficulty::Survival => RarityWeights {
            common: 40,
            uncommon: 35,
            rare: 18,
            legendary: 7,
        },
        Difficulty::Hardcore => RarityWeights {
            common: 30,
            uncommon: 35,
            rare: 25,
            legendary: 10,
        },
    }
}

/// Draw up to `count` distinct events for a month.
///
/// Eligibility: not in `used_ids` and `min_month <= current_month` (events
/// without a gate are always eligible). Each draw picks proportionally to the
/// difficulty's rarity weights and removes the pick from the pool, so one
/// call never repeats an event. Returns fewer than `count` events when the
/// eligible pool runs dry; that is not an error.
pub fn select_events<R: Rng>(
    catalog: &EventCatalog,
    count: usize,
    used_ids: &HashSet<String>,
    current_month: u8,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<LifeEvent> {
    let weights = rarity_weights(difficulty);
    let mut pool: Vec<&LifeEvent> = catalog
        .events
        .iter()
        .filter(|event| {
            !used_ids.contains(&event.id)
                && event.min_month.is_none_or(|gate| current_month >= gate)
        })
        .collect();

    let mut picked = Vec::with_capacity(count.min(pool.len()));
    for _ in 0..count {
        if pool.is_empty() {
            break;
        }
        let weighted: Vec<(usize, u32)> = pool
            .iter()
            .enumerate()
            .map(|(idx, event)| (idx, weights.weight(event.rarity)))
            .collect();
        let Some(chosen_idx) = choose_weighted(&weighted, rng) else {
            break;
        };
        let event = pool.remove(chosen_idx);
        log::debug!(
            "event draw | month:{current_month} difficulty:{difficulty} picked:{}",
            event.id
        );
        picked.push(event.clone());
    }

    picked
}

fn choose_weighted<R: Rng>(weights: &[(usize, u32)], rng: &mut R) -> Option<usize> {
    let total_weight: u32 = weights.iter().map(|(_, weight)| *weight).sum();
    if total_weight == 0 {
        return None;
    }

    let roll = rng.gen_range(0..total_weight);
    let mut current = 0;
    for (idx, weight) in weights {
        current += *weight;
        if roll < current {
            return Some(*idx);
        }
    }

    weights.first().map(|(idx, _)| *idx)
}
