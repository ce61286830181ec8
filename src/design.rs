use crate::{Error, Float};

/// The resampling design, decided once from the shape of the input and
/// dispatched by `match` everywhere else.
///
/// Each variant carries the derived vectors the resampler and the
/// observed-effect calculation read; the caller's samples are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Design<T> {
    /// `working[i] = mu - data1[i]`, resampled with replacement.
    OneSample { working: Vec<T> },
    /// `centered` is `(data2 - data1)` minus its own mean, resampled with
    /// replacement; `differences` is `data1 - data2`, kept for the observed
    /// effect.
    Paired { centered: Vec<T>, differences: Vec<T> },
    /// `pooled` is `data1` followed by `data2`; `labels` marks each entry's
    /// origin (`false` for `data1`), index-aligned with `pooled`.
    TwoSample { pooled: Vec<T>, labels: Vec<bool> },
}

impl<T: Float> Design<T> {
    /// Validates the samples and derives the working data for one test run.
    ///
    /// An empty second sample is treated as absent, so the test degrades to
    /// the one-sample design.
    pub(crate) fn from_samples(
        data1: &[T],
        data2: Option<&[T]>,
        paired: bool,
        mu: T,
    ) -> Result<Self, Error> {
        if data1.is_empty() {
            return Err(Error::EmptySample);
        }

        let second = data2.filter(|sample| !sample.is_empty());

        if data1.iter().any(|v| v.is_nan())
            || second.is_some_and(|sample| sample.iter().any(|v| v.is_nan()))
        {
            return Err(Error::ContainsNaN);
        }

        match (second, paired) {
            (None, true) => Err(Error::MissingPairedSample),
            (None, false) => Ok(Self::OneSample {
                working: data1.iter().map(|&x| mu - x).collect(),
            }),
            (Some(data2), true) => {
                if data1.len() != data2.len() {
                    return Err(Error::LengthMismatch {
                        first: data1.len(),
                        second: data2.len(),
                    });
                }

                let deltas: Vec<T> = data1.iter().zip(data2).map(|(&x, &y)| y - x).collect();
                let mean = deltas.iter().fold(T::zero(), |acc, &d| acc + d)
                    / T::from(deltas.len()).unwrap();

                Ok(Self::Paired {
                    centered: deltas.iter().map(|&d| d - mean).collect(),
                    differences: deltas.iter().map(|&d| -d).collect(),
                })
            },
            (Some(data2), false) => {
                let mut pooled = Vec::with_capacity(data1.len() + data2.len());
                pooled.extend_from_slice(data1);
                pooled.extend_from_slice(data2);

                let labels = (0..pooled.len()).map(|i| i >= data1.len()).collect();

                Ok(Self::TwoSample { pooled, labels })
            },
        }
    }
}

/// Partitions `pooled` by `labels`, preserving pooled order within each group.
pub(crate) fn split_by_labels<T: Copy>(pooled: &[T], labels: &[bool]) -> (Vec<T>, Vec<T>) {
    let mut first = Vec::with_capacity(pooled.len());
    let mut second = Vec::with_capacity(pooled.len());

    for (&value, &label) in pooled.iter().zip(labels) {
        if label {
            second.push(value);
        } else {
            first.push(value);
        }
    }

    (first, second)
}
