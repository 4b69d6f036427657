//! Sampling without replacement over a pool of catalog indices.

use super::{MatchTier, RecommendError};
use clap::ValueEnum;
use rand::seq::index;
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

/// What to do when a tier asks for more rows than its pool holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SamplingPolicy {
    /// Return the whole pool, in random order.
    #[default]
    Cap,
    /// Fail with [`RecommendError::InsufficientPopulation`].
    Strict,
}

/// Picks `amount` distinct entries of `pool`, in random order.
pub fn sample_pool<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[usize],
    amount: usize,
    policy: SamplingPolicy,
    tier: MatchTier,
) -> Result<Vec<usize>, RecommendError> {
    let amount = if amount > pool.len() {
        match policy {
            SamplingPolicy::Strict => {
                return Err(RecommendError::InsufficientPopulation {
                    tier,
                    requested: amount,
                    available: pool.len(),
                })
            }
            SamplingPolicy::Cap => {
                debug!(
                    "{:?} pool has {} rows, capping sample of {}",
                    tier,
                    pool.len(),
                    amount
                );
                pool.len()
            }
        }
    } else {
        amount
    };
    if amount == 0 {
        return Ok(vec![]);
    }

    Ok(index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect())
}
