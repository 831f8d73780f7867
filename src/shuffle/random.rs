use rand::Rng;

/// Source of the uniform integer draws consumed while scoring.
///
/// Every `rand::Rng` is a `RandomSource`; tests substitute scripted or mocked draws.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`.
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.gen_range(low..=high)
    }
}
