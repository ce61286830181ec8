use thiserror::Error as ThisError;

/// Represents errors that can occur while running a resampling test.
#[derive(Debug, ThisError, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The first sample is empty, leaving the test statistic undefined.
    #[error("Sample `data1` must not be empty.")]
    EmptySample,

    /// A paired test was requested with samples of different lengths.
    #[error("Paired samples must have equal lengths, but were given {first} and {second}.")]
    LengthMismatch { first: usize, second: usize },

    /// A paired test was requested without a second sample.
    #[error("A paired test requires a second sample.")]
    MissingPairedSample,

    /// The iteration count is zero, so no null distribution can be built
    /// and the tail probability would divide by zero.
    #[error("The number of iterations must be at least 1.")]
    ZeroIterations,

    /// The input data contains `NaN` values.
    /// Resampling tests cannot be performed on data with `NaN`s.
    #[error("Input data must not contain NaN values.")]
    ContainsNaN,

    /// The test statistic evaluated to a non-finite value on the observed
    /// data or on a resampled subset. The whole batch is aborted rather than
    /// skipping the trial, since skipping would bias the null distribution.
    #[error("The test statistic produced a non-finite value.")]
    NonFiniteStatistic,

    /// The cancellation flag was raised before every trial completed.
    #[error("The test was cancelled before completing.")]
    Cancelled,
}
