use rand::Rng;

/// Source of randomness for builders and the orchestrator.
///
/// Every [`rand::Rng`] implements this, so a seeded `StdRng` gives
/// reproducible runs. Tests can implement it directly to script exact picks.
pub trait Randomness {
    /// Uniform index in `0..upper`; `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Fair coin.
    fn coin_flip(&mut self) -> bool {
        self.below(2) == 0
    }

    /// Uniform pick from `items`, `None` when empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: Rng + ?Sized> Randomness for R {
    fn below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }

    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}
