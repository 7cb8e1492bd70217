//! Recurring tick scheduling with explicit cancellation.
//!
//! A [`Scheduler`] turns a callback into a live periodic timer and hands back
//! an owned handle. Dropping the handle releases the timer, so a callback can
//! never outlive the widget that started it. In the browser the handle is a
//! `gloo_timers` [`Interval`], which clears itself on drop.

use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;

/// Something that can run a callback every `period_ms` milliseconds.
pub trait Scheduler {
    /// Owning handle; dropping it must cancel the recurring callback.
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;

    /// Cancel `handle` from inside its own callback.
    fn release(handle: Self::Handle) {
        drop(handle);
    }
}

/// Browser scheduler backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }

    fn release(handle: Interval) {
        // Clear the interval now; free the running closure once it has returned.
        let closure = handle.cancel();
        Timeout::new(0, move || drop(closure)).forget();
    }
}

/// What a tick callback wants after it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// A started (or never-started) recurring tick.
///
/// The tick can end itself by returning [`TickFlow::Stop`]; the owner can end
/// it with `cancel` or by dropping the handle.
pub struct TickHandle<H> {
    slot: Rc<RefCell<Option<H>>>,
}

impl<H> TickHandle<H> {
    pub fn new(handle: H) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(handle))),
        }
    }

    /// A handle with nothing scheduled behind it.
    pub fn idle() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Run `tick` every `period_ms` until it returns `Stop` or the handle goes.
    pub fn schedule<S, F>(scheduler: &S, period_ms: u32, mut tick: F) -> Self
    where
        S: Scheduler<Handle = H> + 'static,
        F: FnMut() -> TickFlow + 'static,
        H: 'static,
    {
        let slot = Rc::new(RefCell::new(None));
        let weak = Rc::downgrade(&slot);
        let handle = scheduler.every(
            period_ms,
            Box::new(move || {
                if tick() == TickFlow::Continue {
                    return;
                }
                let finished = match weak.upgrade() {
                    Some(slot) => {
                        let taken = slot.borrow_mut().take();
                        taken
                    }
                    None => None,
                };
                if let Some(handle) = finished {
                    S::release(handle);
                }
            }),
        );
        *slot.borrow_mut() = Some(handle);
        Self { slot }
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub fn cancel(&mut self) {
        // Dropping the scheduler handle is what clears the timer.
        let taken = self.slot.borrow_mut().take();
        drop(taken);
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(
        scheduler: &ManualScheduler,
        hits: &Rc<Cell<u32>>,
    ) -> TickHandle<super::manual::ManualHandle> {
        let hits = Rc::clone(hits);
        TickHandle::new(scheduler.every(1000, Box::new(move || hits.set(hits.get() + 1))))
    }

    #[test]
    fn test_handle_runs_until_cancelled() {
        let scheduler = ManualScheduler::default();
        let hits = Rc::new(Cell::new(0));
        let mut handle = counting(&scheduler, &hits);

        assert!(handle.is_running());
        scheduler.fire();
        scheduler.fire();
        assert_eq!(hits.get(), 2);

        handle.cancel();
        assert!(!handle.is_running());
        assert_eq!(scheduler.fire(), 0);
        assert_eq!(hits.get(), 2);

        // Cancelling twice is harmless.
        handle.cancel();
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn test_drop_releases_callback() {
        let scheduler = ManualScheduler::default();
        let hits = Rc::new(Cell::new(0));
        {
            let _handle = counting(&scheduler, &hits);
            scheduler.fire();
            assert_eq!(scheduler.live(), 1);
        }
        assert_eq!(scheduler.live(), 0);
        assert_eq!(scheduler.fire(), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_tick_stops_itself() {
        let scheduler = ManualScheduler::default();
        let hits = Rc::new(Cell::new(0));
        let handle = {
            let hits = Rc::clone(&hits);
            TickHandle::schedule(&scheduler, 1000, move || {
                hits.set(hits.get() + 1);
                if hits.get() == 3 {
                    TickFlow::Stop
                } else {
                    TickFlow::Continue
                }
            })
        };

        for _ in 0..5 {
            scheduler.fire();
        }
        assert_eq!(hits.get(), 3);
        assert!(!handle.is_running());
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn test_idle_handle() {
        let mut handle: TickHandle<()> = TickHandle::idle();
        assert!(!handle.is_running());
        handle.cancel();
        assert!(!handle.is_running());
    }
}
