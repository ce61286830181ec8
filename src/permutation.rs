use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::design::Design;
use crate::observed::{effect_magnitude, observed_effect};
use crate::pvalue::{Alternative, p_value};
use crate::resample::{Execution, draw_null_distribution};
use crate::statistic::Statistic;
use crate::{Computation, Error, Float};

/// Options for a resampling test.
///
/// The defaults mirror the conventional call: an unpaired two-sided test
/// against `mu = 0` with one million sequential trials and an entropy seed.
#[derive(Debug, Clone)]
pub struct PermutationConfig<T> {
    /// Treat `data1` and `data2` as paired observations. Requires a second
    /// sample of the same length and switches resampling to the
    /// with-replacement rule over the centered pair differences.
    pub paired: bool,

    /// The alternative hypothesis governing tail counting.
    pub alternative: Alternative,

    /// The hypothesized population mean, used only by one-sample tests.
    pub mu: T,

    /// Number of Monte Carlo trials.
    pub iterations: usize,

    /// Scheduling strategy for the trials. Either choice yields the same
    /// result for the same seed.
    pub execution: Execution,

    /// Manual override for the two-sided effect magnitude, taken verbatim in
    /// place of the absolute observed effect. Permits reusing an externally
    /// derived threshold without recomputation.
    pub bound: Option<T>,

    /// Root seed for the per-trial random streams. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Cooperative cancellation flag, checked before each trial. Raising it
    /// aborts the batch with [`Error::Cancelled`].
    pub cancel: Option<Arc<AtomicBool>>,
}

impl<T: Float> Default for PermutationConfig<T> {
    fn default() -> Self {
        Self {
            paired: false,
            alternative: Alternative::TwoSided,
            mu: T::zero(),
            iterations: 1_000_000,
            execution: Execution::Sequential,
            bound: None,
            seed: None,
            cancel: None,
        }
    }
}

/// Runs a Monte Carlo resampling test and returns the observed effect with
/// its p-value.
///
/// The design is decided by the shape of the input: two samples give a
/// label-permutation test of group exchangeability (or, with
/// `config.paired`, a with-replacement test over the centered pair
/// differences), while `data2: None` gives a one-sample test of `data1`
/// against `config.mu`. An empty second sample counts as absent.
///
/// The observed effect is computed once from the untouched input: the
/// statistic of `mu - data1` (one-sample), the statistic of `data1 - data2`
/// (paired), or the difference of per-group statistics (two-sample).
///
/// # Examples
///
/// ```
/// use permutest::{Mean, PermutationConfig, permutation_test};
///
/// let config = PermutationConfig {
///     iterations: 10_000,
///     seed: Some(7),
///     ..PermutationConfig::default()
/// };
///
/// // A genuine mean shift between the groups.
/// let data1 = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let data2 = [6.0, 7.0, 8.0, 9.0, 10.0];
/// let shifted = permutation_test(&data1, Some(data2.as_slice()), &Mean, &config).unwrap();
/// assert!(shifted.p_value < 0.05);
///
/// // The same multiset in both groups: no difference to detect.
/// let same = permutation_test(&data1, Some([5.0, 4.0, 3.0, 2.0, 1.0].as_slice()), &Mean, &config)
///     .unwrap();
/// assert_eq!(same.p_value, 1.0);
/// ```
///
/// A one-sample test against a hypothesized mean:
///
/// ```
/// use permutest::{Mean, PermutationConfig, permutation_test};
///
/// let config = PermutationConfig {
///     mu: 5.0,
///     iterations: 1_000,
///     seed: Some(7),
///     ..PermutationConfig::default()
/// };
///
/// // Every observation matches `mu`, so the null distribution degenerates
/// // to zero and the test cannot reject.
/// let result = permutation_test(&[5.0, 5.0, 5.0, 5.0, 5.0], None, &Mean, &config).unwrap();
/// assert_eq!(result.statistic, 0.0);
/// assert_eq!(result.p_value, 1.0);
/// ```
pub fn permutation_test<T, S>(
    data1: &[T],
    data2: Option<&[T]>,
    statistic: &S,
    config: &PermutationConfig<T>,
) -> Result<Computation<T>, Error>
where
    T: Float,
    S: Statistic<T>,
{
    if config.iterations == 0 {
        return Err(Error::ZeroIterations);
    }

    let design = Design::from_samples(data1, data2, config.paired, config.mu)?;

    let observed = observed_effect(&design, statistic);
    if !observed.is_finite() {
        return Err(Error::NonFiniteStatistic);
    }

    let null_distribution = draw(&design, statistic, config)?;
    let magnitude = effect_magnitude(observed, config.bound);
    let p_value = p_value(&null_distribution, observed, magnitude, config.alternative)?;

    Ok(Computation {
        statistic: observed,
        p_value,
    })
}

/// Builds and returns the null distribution for the given input, without
/// computing a p-value.
///
/// This is the reporting-sink interface: a caller that wants to inspect or
/// plot the resampling distribution next to the observed effect runs this
/// with the same configuration as the test itself.
///
/// # Examples
///
/// ```
/// use permutest::{Mean, PermutationConfig, null_distribution};
///
/// let config = PermutationConfig {
///     iterations: 500,
///     seed: Some(3),
///     ..PermutationConfig::default()
/// };
///
/// let null = null_distribution(&[1.2, 0.8, 1.5, 0.9, 1.1], None, &Mean, &config).unwrap();
/// assert_eq!(null.len(), 500);
/// ```
pub fn null_distribution<T, S>(
    data1: &[T],
    data2: Option<&[T]>,
    statistic: &S,
    config: &PermutationConfig<T>,
) -> Result<Vec<T>, Error>
where
    T: Float,
    S: Statistic<T>,
{
    if config.iterations == 0 {
        return Err(Error::ZeroIterations);
    }

    let design = Design::from_samples(data1, data2, config.paired, config.mu)?;

    draw(&design, statistic, config)
}

fn draw<T, S>(
    design: &Design<T>,
    statistic: &S,
    config: &PermutationConfig<T>,
) -> Result<Vec<T>, Error>
where
    T: Float,
    S: Statistic<T>,
{
    let seed = config.seed.unwrap_or_else(rand::random);

    draw_null_distribution(
        design,
        statistic,
        config.iterations,
        config.execution,
        seed,
        config.cancel.as_deref(),
    )
}
