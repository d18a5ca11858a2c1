/// Maximum number of datapoints plotted at once.
pub const MAX_DATA: usize = 100_000;

/// How the buffer behaves when an append would overflow its capacity.
///
/// `Compat` reproduces the historical roll-and-overwrite behavior,
/// including its quirk: when the buffer is not yet full and an incoming
/// batch would overflow it, the buffer is rolled in place and its length
/// stays frozen below capacity instead of growing to it. `Strict` is the
/// idealized ring: the buffer fills to capacity and only then starts
/// discarding its oldest samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollMode {
    #[default]
    Compat,
    Strict,
}

/// Capacity-bounded, chronologically ordered f64 sample store.
///
/// Oldest samples sit at index 0. Appends never grow the buffer past its
/// capacity; overflowing data evicts the oldest samples. Appends are
/// O(len) due to the in-place roll, which is fine at the supported scale.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    data: Vec<f64>,
    capacity: usize,
    mode: RollMode,
}

impl SampleBuffer {
    pub fn new(capacity: usize) -> Self {
        Self::with_mode(capacity, RollMode::default())
    }

    pub fn with_mode(capacity: usize, mode: RollMode) -> Self {
        Self {
            data: Vec::new(),
            capacity: capacity.max(1),
            mode,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mode(&self) -> RollMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples in chronological order, oldest first.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Merge a batch of samples, evicting the oldest on overflow.
    ///
    /// An empty batch leaves the buffer untouched; callers still redraw
    /// after every append, empty or not.
    pub fn append(&mut self, batch: &[f64]) {
        if batch.is_empty() {
            return;
        }
        match self.mode {
            RollMode::Compat => self.append_compat(batch),
            RollMode::Strict => self.append_strict(batch),
        }
    }

    fn append_compat(&mut self, batch: &[f64]) {
        let current = self.data.len();
        let incoming = batch.len();
        let cap = self.capacity;

        if current < cap {
            if incoming + current <= cap {
                self.data.extend_from_slice(batch);
            } else if incoming < cap {
                // Length stays at `current` here, so a buffer that is
                // rolled before filling up never reaches capacity.
                self.roll_in(batch);
            } else {
                self.data.clear();
                self.data.extend_from_slice(&batch[incoming - cap..]);
            }
        } else if incoming <= current {
            self.roll_in(batch);
        } else {
            let keep = current;
            self.data.clear();
            self.data.extend_from_slice(&batch[incoming - keep..]);
        }
    }

    fn append_strict(&mut self, batch: &[f64]) {
        let incoming = batch.len();
        let cap = self.capacity;
        if incoming >= cap {
            self.data.clear();
            self.data.extend_from_slice(&batch[incoming - cap..]);
            return;
        }
        let overflow = (self.data.len() + incoming).saturating_sub(cap);
        if overflow > 0 {
            self.data.drain(..overflow);
        }
        self.data.extend_from_slice(batch);
    }

    /// Shift left by the batch length and overwrite the trailing slots.
    ///
    /// A batch longer than the buffer replaces the whole contents with
    /// its most recent samples (the roll would be a modular no-op and the
    /// trailing-slot write would not fit).
    fn roll_in(&mut self, batch: &[f64]) {
        let current = self.data.len();
        let incoming = batch.len();
        if incoming >= current {
            self.data.copy_from_slice(&batch[incoming - current..]);
        } else {
            self.data.rotate_left(incoming);
            self.data[current - incoming..].copy_from_slice(batch);
        }
    }
}
