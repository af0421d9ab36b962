/// Trailing-edge debounce keyed by generation.
///
/// Every trigger hands out a new generation; the host arms a timer carrying
/// it. When a timer fires, only the newest generation settles, so a burst of
/// resize events regenerates the field once.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        self.generation
    }

    /// True exactly once, for the latest generation.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.pending && generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
