use crate::timers::{SharedTimers, TimerId};
use std::sync::{Arc, Mutex};

type SaveFn<T> = Arc<dyn Fn(T) -> Result<(), String> + Send + Sync>;
type NotifyFn = Arc<dyn Fn() + Send + Sync>;

struct DebounceState<T> {
    timer: Option<TimerId>,
    pending: Option<T>,
    saving: bool,
    /// Bumped on every schedule/cancel so a superseded timer callback is a no-op.
    generation: u64,
}

struct Callbacks<T> {
    on_save: SaveFn<T>,
    on_save_start: Option<NotifyFn>,
    on_save_complete: Option<NotifyFn>,
}

/// Last-write-wins autosave.
///
/// At most one timer is pending per instance. `on_save_start` fires once when a
/// burst begins and `on_save_complete` once when it ends (saved or cancelled).
pub(crate) struct DebouncedSave<T> {
    state: Arc<Mutex<DebounceState<T>>>,
    callbacks: Arc<Callbacks<T>>,
    timers: SharedTimers,
    delay_ms: u32,
}

impl<T> Clone for DebouncedSave<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            callbacks: self.callbacks.clone(),
            timers: self.timers.clone(),
            delay_ms: self.delay_ms,
        }
    }
}

impl<T: Send + 'static> DebouncedSave<T> {
    pub fn new(
        timers: SharedTimers,
        delay_ms: u32,
        on_save: impl Fn(T) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(DebounceState {
                timer: None,
                pending: None,
                saving: false,
                generation: 0,
            })),
            callbacks: Arc::new(Callbacks {
                on_save: Arc::new(on_save),
                on_save_start: None,
                on_save_complete: None,
            }),
            timers,
            delay_ms,
        }
    }

    pub fn with_indicators(
        mut self,
        on_save_start: impl Fn() + Send + Sync + 'static,
        on_save_complete: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.callbacks = Arc::new(Callbacks {
            on_save: self.callbacks.on_save.clone(),
            on_save_start: Some(Arc::new(on_save_start)),
            on_save_complete: Some(Arc::new(on_save_complete)),
        });
        self
    }

    pub fn debounced_save(&self, data: T) {
        let (generation, starting) = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            if let Some(tid) = s.timer.take() {
                self.timers.cancel(tid);
            }
            s.pending = Some(data);
            s.generation += 1;
            let starting = !s.saving;
            s.saving = true;
            (s.generation, starting)
        };

        if starting {
            if let Some(cb) = &self.callbacks.on_save_start {
                cb();
            }
        }

        let this = self.clone();
        let tid = self
            .timers
            .schedule(self.delay_ms, Box::new(move || this.fire(generation)));

        if let Ok(mut s) = self.state.lock() {
            if s.generation == generation {
                s.timer = tid;
            } else if let Some(tid) = tid {
                self.timers.cancel(tid);
            }
        }
    }

    /// Cancels the pending timer and saves `data` right now.
    pub fn force_save(&self, data: T) {
        self.cancel_save();
        self.run_save(data);
    }

    /// Saves the pending payload now, if any. Returns whether a save ran.
    pub fn flush(&self) -> bool {
        let pending = {
            let Ok(mut s) = self.state.lock() else {
                return false;
            };
            if let Some(tid) = s.timer.take() {
                self.timers.cancel(tid);
            }
            s.generation += 1;
            s.pending.take()
        };
        match pending {
            Some(data) => {
                self.run_save(data);
                self.finish_burst();
                true
            }
            None => false,
        }
    }

    /// Drops the pending payload without saving.
    pub fn cancel_save(&self) {
        let was_saving = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            if let Some(tid) = s.timer.take() {
                self.timers.cancel(tid);
            }
            s.pending = None;
            s.generation += 1;
            std::mem::replace(&mut s.saving, false)
        };
        if was_saving {
            if let Some(cb) = &self.callbacks.on_save_complete {
                cb();
            }
        }
    }

    fn fire(&self, generation: u64) {
        let pending = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            if s.generation != generation {
                return;
            }
            s.timer = None;
            s.pending.take()
        };
        if let Some(data) = pending {
            self.run_save(data);
        }
        self.finish_burst();
    }

    fn run_save(&self, data: T) {
        if let Err(e) = (self.callbacks.on_save)(data) {
            tracing::error!(error = %e, "Auto-save failed");
        }
    }

    fn finish_burst(&self) {
        let was_saving = {
            let Ok(mut s) = self.state.lock() else {
                return;
            };
            if s.timer.is_some() {
                return;
            }
            std::mem::replace(&mut s.saving, false)
        };
        if was_saving {
            if let Some(cb) = &self.callbacks.on_save_complete {
                cb();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::ManualTimers;
    use std::sync::atomic::{AtomicUsize, Ordering};

    impl<T> DebouncedSave<T> {
        fn is_saving(&self) -> bool {
            self.state.lock().map(|s| s.saving).unwrap_or(false)
        }

        fn has_pending(&self) -> bool {
            self.state.lock().map(|s| s.pending.is_some()).unwrap_or(false)
        }
    }

    struct Recorder {
        saves: Arc<Mutex<Vec<String>>>,
        starts: Arc<AtomicUsize>,
        completes: Arc<AtomicUsize>,
    }

    fn setup(fail: bool) -> (ManualTimers, DebouncedSave<String>, Recorder) {
        let timers = ManualTimers::new();
        let saves = Arc::new(Mutex::new(Vec::new()));
        let starts = Arc::new(AtomicUsize::new(0));
        let completes = Arc::new(AtomicUsize::new(0));

        let s2 = saves.clone();
        let (st, co) = (starts.clone(), completes.clone());
        let d = DebouncedSave::new(timers.shared(), 1000, move |v: String| {
            s2.lock().unwrap().push(v);
            if fail {
                Err("disk full".to_string())
            } else {
                Ok(())
            }
        })
        .with_indicators(
            move || {
                st.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                co.fetch_add(1, Ordering::SeqCst);
            },
        );

        (
            timers,
            d,
            Recorder {
                saves,
                starts,
                completes,
            },
        )
    }

    #[test]
    fn test_burst_saves_once_with_last_payload() {
        let (timers, d, p) = setup(false);
        for i in 1..=5 {
            d.debounced_save(format!("v{i}"));
            timers.advance(200.0);
        }
        assert!(p.saves.lock().unwrap().is_empty());
        assert_eq!(timers.pending(), 1);

        timers.advance(1000.0);
        assert_eq!(*p.saves.lock().unwrap(), vec!["v5"]);
        assert_eq!(p.starts.load(Ordering::SeqCst), 1);
        assert_eq!(p.completes.load(Ordering::SeqCst), 1);
        assert!(!d.is_saving());
    }

    #[test]
    fn test_force_save_supersedes_pending_timer() {
        let (timers, d, p) = setup(false);
        d.debounced_save("draft".to_string());
        d.force_save("final".to_string());
        timers.advance(5000.0);
        assert_eq!(*p.saves.lock().unwrap(), vec!["final"]);
        assert_eq!(timers.pending(), 0);
        assert!(!d.is_saving());
    }

    #[test]
    fn test_cancel_save_discards_payload_and_clears_indicator() {
        let (timers, d, p) = setup(false);
        d.debounced_save("x".to_string());
        assert!(d.is_saving());
        d.cancel_save();
        timers.advance(5000.0);
        assert!(p.saves.lock().unwrap().is_empty());
        assert_eq!(p.completes.load(Ordering::SeqCst), 1);
        assert!(!d.is_saving());
    }

    #[test]
    fn test_failing_save_still_clears_indicator() {
        let (timers, d, p) = setup(true);
        d.debounced_save("x".to_string());
        timers.advance(1000.0);
        assert_eq!(p.saves.lock().unwrap().len(), 1);
        assert_eq!(p.completes.load(Ordering::SeqCst), 1);
        assert!(!d.is_saving());

        d.debounced_save("y".to_string());
        timers.advance(1000.0);
        assert_eq!(p.saves.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_flush_saves_pending_now() {
        let (timers, d, p) = setup(false);
        assert!(!d.flush());
        d.debounced_save("x".to_string());
        assert!(d.flush());
        assert!(!d.has_pending());
        timers.advance(5000.0);
        assert_eq!(*p.saves.lock().unwrap(), vec!["x"]);
        assert_eq!(p.completes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_separate_bursts_each_notify_once() {
        let (timers, d, p) = setup(false);
        d.debounced_save("a".to_string());
        timers.advance(1000.0);
        d.debounced_save("b".to_string());
        d.debounced_save("c".to_string());
        timers.advance(1000.0);
        assert_eq!(*p.saves.lock().unwrap(), vec!["a", "c"]);
        assert_eq!(p.starts.load(Ordering::SeqCst), 2);
        assert_eq!(p.completes.load(Ordering::SeqCst), 2);
    }
}
