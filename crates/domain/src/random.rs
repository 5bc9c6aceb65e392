use rand::Rng;

/// Source of uniformly distributed indices.
///
/// For `len > 0` an implementation must return a value in `0..len`. The value returned for
/// `len == 0` is unspecified and must not be used as an index.
pub trait RandomSource {
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Adapter that draws indices from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}

/// Deterministic source that always yields the same position (modulo the length).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource(pub usize);

impl RandomSource for FixedSource {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0 % len
    }
}
