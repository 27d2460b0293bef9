// src/notice.rs
use gloo_timers::callback::Timeout;

/// How long a notice stays up.
pub const NOTICE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub tone: Tone,
    pub text: String,
}

/// Runs a task once after a delay. Dropping the returned handle cancels it.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Holds the dismissal task of the notice on screen. Arming it again
/// cancels whatever was pending.
pub struct NoticeTimer<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> NoticeTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn arm(&mut self, delay_ms: u32, on_expire: impl FnOnce() + 'static) {
        // drop before scheduling so the old task can never run after this
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(on_expire)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Pending {
        due: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        queue: Vec<Pending>,
    }

    /// Virtual-clock scheduler; nothing fires until `advance`.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub(crate) struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub(crate) fn advance(&self, ms: u64) {
            let due: Vec<Pending> = {
                let mut clock = self.clock.borrow_mut();
                clock.now += ms;
                let now = clock.now;
                let (due, later): (Vec<Pending>, Vec<Pending>) = std::mem::take(&mut clock.queue)
                    .into_iter()
                    .partition(|p| p.due <= now);
                clock.queue = later;
                due
            };
            for p in due {
                if !p.cancelled.get() {
                    (p.task)();
                }
            }
        }

        pub(crate) fn pending(&self) -> usize {
            self.clock
                .borrow()
                .queue
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + u64::from(delay_ms);
            clock.queue.push(Pending {
                due,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }
}
