use crate::{Error, Float};

/// The alternative hypothesis: which direction of deviation from the null
/// counts as evidence against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Alternative {
    /// Deviations in either direction: trials at or beyond the effect
    /// magnitude on both tails count as extreme.
    #[default]
    TwoSided,

    /// Deviations at or above the observed effect.
    Greater,

    /// Deviations at or below the observed effect.
    Less,
}

/// The empirical tail probability of the observed effect under the null
/// distribution.
///
/// Ties at the threshold count as extreme (inclusive comparisons), a
/// conservative convention that shifts p-values upward at small iteration
/// counts and is preserved exactly for reproducibility. The result is
/// clamped into `[0, 1]`: a zero magnitude puts ties at zero in both tails
/// at once, so the raw two-sided count can exceed the trial count.
pub(crate) fn p_value<T: Float>(
    null_distribution: &[T],
    observed: T,
    magnitude: T,
    alternative: Alternative,
) -> Result<T, Error> {
    if null_distribution.is_empty() {
        return Err(Error::ZeroIterations);
    }

    let extreme = match alternative {
        Alternative::TwoSided => {
            let lower = null_distribution
                .iter()
                .filter(|&&t| t <= -magnitude)
                .count();
            let upper = null_distribution
                .iter()
                .filter(|&&t| t >= magnitude)
                .count();

            lower + upper
        },
        Alternative::Greater => null_distribution.iter().filter(|&&t| t >= observed).count(),
        Alternative::Less => null_distribution.iter().filter(|&&t| t <= observed).count(),
    };

    let p_value = T::from(extreme).unwrap() / T::from(null_distribution.len()).unwrap();

    Ok(p_value.max(T::zero()).min(T::one()))
}
