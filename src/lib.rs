#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

#[macro_use]
pub(crate) mod macros;

mod design;
mod error;
mod observed;
mod permutation;
mod pvalue;
mod resample;
mod statistic;

use std::iter::Sum;

pub use error::Error;
use num_traits::{Float as Float_, Num, NumAssign, NumOps};
pub use permutation::{PermutationConfig, null_distribution, permutation_test};
pub use pvalue::Alternative;
pub use resample::Execution;
pub use statistic::{Mean, Statistic};

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(feature = "parallel")]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(feature = "parallel")]
impl<T: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync> Float for T {}

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(not(feature = "parallel"))]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(not(feature = "parallel"))]
impl<T: Float_ + Num + NumAssign + NumOps + Sum> Float for T {}

/// The outcome of a resampling test.
///
/// `statistic` is the effect observed on the original, unresampled data:
/// the statistic of `mu - data1` for a one-sample test, the statistic of
/// `data1 - data2` for a paired test, and the difference of per-group
/// statistics for a two-sample test.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Computation<T: Float> {
    /// The observed effect the test was run against.
    pub statistic: T,

    /// The p-value: the fraction of resampled outcomes at least as extreme as
    /// the observed effect under the chosen alternative hypothesis.
    pub p_value: T,
}

#[cfg(all(feature = "serde", test))]
mod computation_serde_test {
    use serde_test::{Token, assert_ser_tokens};

    use super::Computation;

    #[test]
    fn test_computation_tokens() {
        let computation = Computation {
            statistic: 1.0,
            p_value: 0.05,
        };

        let expected_tokens = vec![
            Token::Struct {
                name: "Computation",
                len: 2,
            },
            Token::Str("statistic"),
            Token::F64(1.0),
            Token::Str("p_value"),
            Token::F64(0.05),
            Token::StructEnd,
        ];

        assert_ser_tokens(&computation, &expected_tokens);
    }
}
