use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of the random grade and topic picks, injectable so tests stay deterministic.
pub trait Chooser {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picks from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChooser<R> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
