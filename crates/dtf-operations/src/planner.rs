use rand::{seq::index, Rng};

use crate::{config::SimulationConfig, constants::MAX_BPS};

/// Bounds on the allocation weights of a fund.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationRules {
    pub min_bps: u64,
    pub max_bps: u64,
    pub max_tokens: usize,
}

impl From<&SimulationConfig> for AllocationRules {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            min_bps: config.allocation_min,
            max_bps: config.allocation_max,
            max_tokens: config.max_tokens_per_fund,
        }
    }
}

/// Picks between one and `max_tokens` of the candidates without replacement
/// and assigns each a weight. Every weight but the last is drawn from
/// `[min_bps, min(max_bps, remaining)]` and the last takes whatever is left,
/// capped at `max_bps`. Planning stops early once the remaining budget can't
/// fit another minimum weight, so the weights always sum to at most 100%.
pub fn plan_allocations<R, T>(rng: &mut R, candidates: &[T], rules: &AllocationRules) -> Vec<(T, u64)>
where
    R: Rng + ?Sized,
    T: Clone,
{
    if candidates.is_empty() || rules.max_tokens == 0 {
        return Vec::new();
    }
    let count = rng.gen_range(1..=rules.max_tokens.min(candidates.len()));
    let picked = index::sample(rng, candidates.len(), count);

    let mut plan = Vec::with_capacity(count);
    let mut remaining = MAX_BPS;
    for (i, idx) in picked.iter().enumerate() {
        if remaining <= rules.min_bps {
            break;
        }
        let ceiling = rules.max_bps.min(remaining);
        let weight = if i == count - 1 {
            ceiling
        } else {
            rng.gen_range(rules.min_bps..=ceiling)
        };
        remaining -= weight;
        plan.push((candidates[idx].clone(), weight));
    }
    plan
}
