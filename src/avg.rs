//! Averaging primitives for noisy per-frame readings.

use std::collections::VecDeque;

/// Trait for types that compute an average over values of type `V`.
pub trait Averager<V> {
    /// Adds a new value to the averager, returning the resulting average.
    fn push(&mut self, value: V) -> V;

    /// Resets the averager to the state just after construction, discarding all history.
    fn reset(&mut self);
}

impl<V> Averager<V> for Box<dyn Averager<V>> {
    fn push(&mut self, value: V) -> V {
        (**self).push(value)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Moving average over a fixed window of the most recent values (FIR filter).
///
/// All values in the window are weighted equally. When the window is full, pushing a new value
/// evicts the oldest one (strict FIFO), so after `capacity` pushes the window always holds exactly
/// the `capacity` most recent samples in arrival order.
#[derive(Debug, Clone)]
pub struct MovingAvg {
    window: VecDeque<f32>,
    capacity: usize,
    /// Running sum of everything in `window`, updated incrementally on push/evict.
    sum: f32,
}

impl MovingAvg {
    /// Creates a moving average over the last `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be at least 1");
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0.0,
        }
    }

    /// Returns the number of samples currently held.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` while no sample has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Returns the configured window capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the mean of the currently held samples, or `None` if the window is empty.
    pub fn mean(&self) -> Option<f32> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.sum / self.window.len() as f32)
        }
    }
}

impl Averager<f32> for MovingAvg {
    fn push(&mut self, value: f32) -> f32 {
        if self.window.len() == self.capacity {
            if let Some(evicted) = self.window.pop_front() {
                self.sum -= evicted;
            }
        }
        self.window.push_back(value);
        self.sum += value;

        self.sum / self.window.len() as f32
    }

    fn reset(&mut self) {
        self.window.clear();
        self.sum = 0.0;
    }
}

/// Exponential moving average, a weighted average whose weights decay exponentially.
///
/// This is a tunable single-pole IIR filter. The first pushed value seeds the average unchanged.
#[derive(Clone)]
pub struct Ema {
    alpha: f32,
    current: Option<f32>,
}

impl Ema {
    /// Creates an exponential moving average with smoothing constant `alpha`.
    ///
    /// `alpha` close to 1.0 strongly favors recent values, `alpha` close to 0.0 changes the
    /// average only slowly.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside of `0.0..=1.0`.
    pub fn new(alpha: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&alpha),
            "EMA smoothing constant must lie in [0, 1]"
        );
        Self {
            alpha,
            current: None,
        }
    }
}

impl Averager<f32> for Ema {
    fn push(&mut self, value: f32) -> f32 {
        let avg = match self.current {
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
            None => value,
        };
        self.current = Some(avg);
        avg
    }

    fn reset(&mut self) {
        self.current = None;
    }
}
