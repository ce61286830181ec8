use std::sync::atomic::{AtomicBool, Ordering};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::design::{Design, split_by_labels};
use crate::statistic::Statistic;
use crate::{Error, Float};

/// How the Monte Carlo trials are scheduled.
///
/// A pure performance concern: both strategies draw from the same per-trial
/// random streams, so they produce bit-identical null distributions for the
/// same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Execution {
    /// Run every trial on the calling thread.
    #[default]
    Sequential,

    /// Fan the trials out across the rayon thread pool.
    ///
    /// Degrades to [`Sequential`](Execution::Sequential) when the `parallel`
    /// feature is disabled.
    Parallel,
}

/// One independent generator per trial, all derived from the same root seed.
fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);

    rng
}

fn finite<T: Float>(value: T) -> Result<T, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteStatistic)
    }
}

fn check_live(cancel: Option<&AtomicBool>) -> Result<(), Error> {
    match cancel {
        Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
        _ => Ok(()),
    }
}

/// Builds the null distribution: `iterations` resampled statistic values.
///
/// One-sample and paired designs resample the working vector with
/// replacement and record the statistic of each resample. Two-sample designs
/// shuffle a scratch copy of the group labels, partition the pooled data by
/// the shuffled labels, and record the difference of the per-group
/// statistics. Trials only read the shared design data and write disjoint
/// output slots, and a non-finite statistic aborts the whole batch.
pub(crate) fn draw_null_distribution<T, S>(
    design: &Design<T>,
    statistic: &S,
    iterations: usize,
    execution: Execution,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<T>, Error>
where
    T: Float,
    S: Statistic<T>,
{
    match design {
        Design::OneSample { working }
        | Design::Paired {
            centered: working, ..
        } => {
            collect_trials!(iterations, execution, |trial| {
                check_live(cancel)?;

                let mut rng = trial_rng(seed, trial);
                let resampled: Vec<T> = (0..working.len())
                    .map(|_| working[rng.gen_range(0..working.len())])
                    .collect();

                finite(statistic.evaluate(&resampled))
            })
        },
        Design::TwoSample { pooled, labels } => {
            collect_trials!(iterations, execution, |trial| {
                check_live(cancel)?;

                let mut rng = trial_rng(seed, trial);
                let mut shuffled = labels.clone();
                shuffled.shuffle(&mut rng);

                let (first, second) = split_by_labels(pooled, &shuffled);

                finite(statistic.evaluate(&first) - statistic.evaluate(&second))
            })
        },
    }
}
