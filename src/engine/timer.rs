//! One-shot timers on the context clock.
//!
//! Deadlines are in context seconds. Nothing fires on its own: the engine
//! polls [`Timers::pop_due`] at block boundaries while rendering, so a timer
//! fires at most one block after its deadline and never while the clock is
//! frozen.

/// Identifies one scheduled timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: TimerHandle,
    deadline: f64,
    payload: T,
}

#[derive(Debug)]
pub struct Timers<T> {
    next_handle: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to come due at `deadline`.
    pub fn schedule(&mut self, deadline: f64, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            deadline,
            payload,
        });
        handle
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(index) => {
                self.pending.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return the earliest timer due at `now`.
    ///
    /// Ties on the deadline go to the timer scheduled first.
    pub fn pop_due(&mut self, now: f64) -> Option<(TimerHandle, T)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= now)
            .min_by(|(_, a), (_, b)| {
                a.deadline
                    .total_cmp(&b.deadline)
                    .then(a.handle.0.cmp(&b.handle.0))
            })
            .map(|(index, _)| index)?;

        let fired = self.pending.swap_remove(index);
        Some((fired.handle, fired.payload))
    }
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}
