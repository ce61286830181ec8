use crate::Float;
use crate::design::{Design, split_by_labels};
use crate::statistic::Statistic;

/// The effect observed on the original, unresampled data. Computed once per
/// test, before any resampling.
///
/// One-sample effects are measured on the same `mu - data1` vector the
/// resampler draws from, so the observed value and the null distribution
/// describe the same quantity.
pub(crate) fn observed_effect<T, S>(design: &Design<T>, statistic: &S) -> T
where
    T: Float,
    S: Statistic<T>,
{
    match design {
        Design::OneSample { working } => statistic.evaluate(working),
        Design::Paired { differences, .. } => statistic.evaluate(differences),
        Design::TwoSample { pooled, labels } => {
            let (first, second) = split_by_labels(pooled, labels);

            statistic.evaluate(&first) - statistic.evaluate(&second)
        },
    }
}

/// The threshold used by the two-sided tail count: the absolute observed
/// effect, unless the caller supplied a `bound` to reuse verbatim.
pub(crate) fn effect_magnitude<T: Float>(observed: T, bound: Option<T>) -> T {
    bound.unwrap_or_else(|| observed.abs())
}
