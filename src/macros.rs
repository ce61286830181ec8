#[macro_export]
macro_rules! collect_trials {
    ($iterations:expr, $execution:expr, $trial:expr) => {{
        #[cfg(feature = "parallel")]
        let trials = match $execution {
            $crate::Execution::Sequential => (0..$iterations).map($trial).collect(),
            $crate::Execution::Parallel => {
                use rayon::prelude::*;
                (0..$iterations).into_par_iter().map($trial).collect()
            },
        };
        #[cfg(not(feature = "parallel"))]
        let trials = {
            let _ = $execution;
            (0..$iterations).map($trial).collect()
        };
        trials
    }};
}
