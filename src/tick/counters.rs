//! Interrupt-to-loop tick handoff.

use core::sync::atomic::{AtomicU32, Ordering};

/// One producer/consumer counter pair.
///
/// The producer is the only writer of `produced`, the consumer the only writer
/// of `consumed`, so plain atomic loads and stores suffice (no read-modify-write,
/// which Cortex-M0 lacks). Pending = produced - consumed, wrapping.
#[derive(Debug)]
struct TickCounter {
    produced: AtomicU32,
    consumed: AtomicU32,
}

impl TickCounter {
    const fn new() -> Self {
        Self {
            produced: AtomicU32::new(0),
            consumed: AtomicU32::new(0),
        }
    }

    #[inline]
    fn produce(&self) {
        let next = self.produced.load(Ordering::Relaxed).wrapping_add(1);
        self.produced.store(next, Ordering::Release);
    }

    #[inline]
    fn pending(&self) -> u32 {
        let produced = self.produced.load(Ordering::Acquire);
        produced.wrapping_sub(self.consumed.load(Ordering::Relaxed))
    }

    #[inline]
    fn take(&self) -> bool {
        let consumed = self.consumed.load(Ordering::Relaxed);
        if self.produced.load(Ordering::Acquire) == consumed {
            return false;
        }
        self.consumed.store(consumed.wrapping_add(1), Ordering::Release);
        true
    }
}

/// Fine and coarse tick counts shared between the timer interrupt and the
/// dispatch loop.
///
/// Ticks are fungible: only counts cross the boundary, never data. Written
/// only by [`TickSource`](super::TickSource), drained only by the
/// [`Dispatcher`](crate::Dispatcher).
///
/// `new` is `const` so firmware can place the counters in a `static` shared
/// with the interrupt handler.
#[derive(Debug)]
pub struct TickCounters {
    fine: TickCounter,
    coarse: TickCounter,
}

impl Default for TickCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl TickCounters {
    /// Create counters with nothing pending.
    pub const fn new() -> Self {
        Self {
            fine: TickCounter::new(),
            coarse: TickCounter::new(),
        }
    }

    /// Record one fine tick. Producer side only.
    #[inline]
    pub(crate) fn produce_fine(&self) {
        self.fine.produce();
    }

    /// Record one coarse tick. Producer side only.
    #[inline]
    pub(crate) fn produce_coarse(&self) {
        self.coarse.produce();
    }

    /// Fine ticks produced but not yet consumed.
    #[inline]
    pub fn fine_pending(&self) -> u32 {
        self.fine.pending()
    }

    /// Coarse ticks produced but not yet consumed.
    #[inline]
    pub fn coarse_pending(&self) -> u32 {
        self.coarse.pending()
    }

    /// Consume one fine tick. Returns `false` if none was pending.
    #[inline]
    pub fn take_fine(&self) -> bool {
        self.fine.take()
    }

    /// Consume one coarse tick. Returns `false` if none was pending.
    #[inline]
    pub fn take_coarse(&self) -> bool {
        self.coarse.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce_and_take() {
        let counters = TickCounters::new();
        assert_eq!(counters.fine_pending(), 0);
        assert!(!counters.take_fine());

        counters.produce_fine();
        counters.produce_fine();
        counters.produce_coarse();
        assert_eq!(counters.fine_pending(), 2);
        assert_eq!(counters.coarse_pending(), 1);

        assert!(counters.take_fine());
        assert_eq!(counters.fine_pending(), 1);
        assert!(counters.take_fine());
        assert!(!counters.take_fine());
        assert_eq!(counters.fine_pending(), 0);

        assert!(counters.take_coarse());
        assert!(!counters.take_coarse());
    }

    #[test]
    fn test_pending_across_wrap() {
        let counter = TickCounter {
            produced: AtomicU32::new(u32::MAX),
            consumed: AtomicU32::new(u32::MAX - 1),
        };
        assert_eq!(counter.pending(), 1);

        counter.produce();
        assert_eq!(counter.pending(), 2);
        assert!(counter.take());
        assert!(counter.take());
        assert!(!counter.take());
    }

    #[test]
    fn test_static_placement() {
        static COUNTERS: TickCounters = TickCounters::new();
        COUNTERS.produce_fine();
        assert!(COUNTERS.take_fine());
    }
}
