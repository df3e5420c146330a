use std::sync::Arc;

pub(crate) type TimerId = i32;

/// One-shot timers plus a millisecond clock.
///
/// Debounce and throttle state machines are written against this so they can
/// be driven by the browser event loop or stepped by hand in tests.
pub(crate) trait TimerHost: Send + Sync {
    fn now_ms(&self) -> f64;
    fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce() + Send>) -> Option<TimerId>;
    fn cancel(&self, id: TimerId);
}

pub(crate) type SharedTimers = Arc<dyn TimerHost>;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserTimers;

impl BrowserTimers {
    pub fn shared() -> SharedTimers {
        Arc::new(BrowserTimers)
    }
}

impl TimerHost for BrowserTimers {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce() + Send>) -> Option<TimerId> {
        use wasm_bindgen::JsCast;

        let win = web_sys::window()?;
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || f());
        win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .ok()
    }

    fn cancel(&self, id: TimerId) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(id);
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualTimers;

#[cfg(test)]
mod manual {
    use super::*;
    use std::sync::Mutex;

    type Pending = (TimerId, f64, Box<dyn FnOnce() + Send>);

    #[derive(Default)]
    struct State {
        now: f64,
        next_id: TimerId,
        pending: Vec<Pending>,
    }

    /// Virtual clock; callbacks run only inside [`ManualTimers::advance`].
    #[derive(Clone, Default)]
    pub(crate) struct ManualTimers {
        state: Arc<Mutex<State>>,
    }

    impl ManualTimers {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn shared(&self) -> SharedTimers {
            Arc::new(self.clone())
        }

        pub fn pending(&self) -> usize {
            self.state.lock().map(|s| s.pending.len()).unwrap_or(0)
        }

        pub fn advance(&self, ms: f64) {
            let target = self.state.lock().map(|s| s.now + ms).unwrap_or(ms);
            loop {
                let next = {
                    let Ok(mut s) = self.state.lock() else {
                        return;
                    };
                    let due = s
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.1 <= target)
                        .min_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let p = s.pending.remove(i);
                        s.now = s.now.max(p.1);
                        p.2
                    })
                };
                match next {
                    Some(f) => f(),
                    None => break,
                }
            }
            if let Ok(mut s) = self.state.lock() {
                s.now = target;
            }
        }
    }

    impl TimerHost for ManualTimers {
        fn now_ms(&self) -> f64 {
            self.state.lock().map(|s| s.now).unwrap_or(0.0)
        }

        fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce() + Send>) -> Option<TimerId> {
            let mut s = self.state.lock().ok()?;
            s.next_id += 1;
            let id = s.next_id;
            let due = s.now + delay_ms as f64;
            s.pending.push((id, due, f));
            Some(id)
        }

        fn cancel(&self, id: TimerId) {
            if let Ok(mut s) = self.state.lock() {
                s.pending.retain(|p| p.0 != id);
            }
        }
    }

    mod tests {
        use super::*;
        use std::sync::atomic::{AtomicUsize, Ordering};

        #[test]
        fn test_manual_timers_fire_in_due_order() {
            let t = ManualTimers::new();
            let order = Arc::new(Mutex::new(Vec::new()));
            for (delay, tag) in [(30u32, "c"), (10, "a"), (20, "b")] {
                let order = order.clone();
                t.schedule(delay, Box::new(move || order.lock().unwrap().push(tag)));
            }
            t.advance(25.0);
            assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
            t.advance(10.0);
            assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
            assert_eq!(t.now_ms(), 35.0);
        }

        #[test]
        fn test_manual_timers_cancel() {
            let t = ManualTimers::new();
            let hits = Arc::new(AtomicUsize::new(0));
            let h = hits.clone();
            let id = t
                .schedule(5, Box::new(move || {
                    h.fetch_add(1, Ordering::SeqCst);
                }))
                .expect("schedule");
            t.cancel(id);
            t.advance(10.0);
            assert_eq!(hits.load(Ordering::SeqCst), 0);
            assert_eq!(t.pending(), 0);
        }
    }
}
