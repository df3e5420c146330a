use crate::timers::{SharedTimers, TimerId};
use std::sync::{Arc, Mutex};

struct ThrottleState<T> {
    last_applied_ms: Option<f64>,
    pending: Option<T>,
    timer: Option<TimerId>,
    generation: u64,
}

/// Applies at most one value per `interval_ms`.
///
/// The first value of a quiet period applies immediately; later values are
/// coalesced and the newest one is applied when the interval elapses, so the
/// final position of a drag is never dropped.
pub(crate) struct Throttle<T> {
    state: Arc<Mutex<ThrottleState<T>>>,
    apply: Arc<dyn Fn(T) + Send + Sync>,
    timers: SharedTimers,
    interval_ms: u32,
}

impl<T> Clone for Throttle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            apply: self.apply.clone(),
            timers: self.timers.clone(),
            interval_ms: self.interval_ms,
        }
    }
}

impl<T: Send + 'static> Throttle<T> {
    pub fn new(
        timers: SharedTimers,
        interval_ms: u32,
        apply: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(ThrottleState {
                last_applied_ms: None,
                pending: None,
                timer: None,
                generation: 0,
            })),
            apply: Arc::new(apply),
            timers,
            interval_ms,
        }
    }

    pub fn call(&self, value: T) {
        let now = self.timers.now_ms();
        let interval = self.interval_ms as f64;

        let schedule_in = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            let elapsed = s.last_applied_ms.map(|last| now - last);
            let ready = s.timer.is_none() && elapsed.map_or(true, |e| e >= interval);
            if ready {
                s.last_applied_ms = Some(now);
                s.pending = None;
                drop(s);
                (self.apply)(value);
                return;
            }

            s.pending = Some(value);
            if s.timer.is_some() {
                return;
            }
            s.generation += 1;
            let wait = (interval - elapsed.unwrap_or(0.0)).max(0.0).ceil() as u32;
            (s.generation, wait)
        };

        let (generation, wait) = schedule_in;
        let this = self.clone();
        let tid = self
            .timers
            .schedule(wait, Box::new(move || this.fire_trailing(generation)));

        if let Ok(mut s) = self.state.lock() {
            if s.generation == generation && s.pending.is_some() {
                s.timer = tid;
            } else if let Some(tid) = tid {
                self.timers.cancel(tid);
            }
        }
    }

    /// Applies the coalesced value now, if any.
    pub fn flush(&self) {
        let pending = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            if let Some(tid) = s.timer.take() {
                self.timers.cancel(tid);
            }
            s.generation += 1;
            let pending = s.pending.take();
            if pending.is_some() {
                s.last_applied_ms = Some(self.timers.now_ms());
            }
            pending
        };
        if let Some(v) = pending {
            (self.apply)(v);
        }
    }

    pub fn cancel(&self) {
        if let Ok(mut s) = self.state.lock() {
            if let Some(tid) = s.timer.take() {
                self.timers.cancel(tid);
            }
            s.pending = None;
            s.generation += 1;
        }
    }

    fn fire_trailing(&self, generation: u64) {
        let pending = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            if s.generation != generation {
                return;
            }
            s.timer = None;
            let pending = s.pending.take();
            if pending.is_some() {
                s.last_applied_ms = Some(self.timers.now_ms());
            }
            pending
        };
        if let Some(v) = pending {
            (self.apply)(v);
        }
    }
}
