//! Countdown tracking for the hackathon timer widget.
//!
//! The tracker keeps a fixed end timestamp, recomputes the remaining time once
//! per tick and reports milestone edges (every 30 minutes, every hour, entry
//! into the final hour, completion) by comparing each new reading with the one
//! before it. Rendering lives in the binary; everything here runs natively so
//! it can be tested without a browser.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod effects;
pub mod messages;
pub mod schedule;
pub mod utils;

use schedule::{Scheduler, TickFlow, TickHandle};

/// Default countdown parameters
pub mod defaults {
    /// A full hackathon: 24 hours.
    pub const DURATION_MS: i64 = 24 * 60 * 60 * 1000;
    pub const TICK_MS: u32 = 1000;
}

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Remaining time, decomposed from `total` (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total: u64,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        hours: 0,
        minutes: 0,
        seconds: 0,
        total: 0,
    };

    /// Decompose a millisecond difference. Anything at or below zero is `ZERO`.
    pub fn from_millis(difference: i64) -> Self {
        if difference <= 0 {
            return Self::ZERO;
        }
        let total = difference as u64;
        Self {
            hours: total / MS_PER_HOUR,
            minutes: (total % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (total % MS_PER_MINUTE) / MS_PER_SECOND,
            total,
        }
    }

    /// Time left between `now_ms` and `end_ms`, clamped at zero.
    pub fn until(end_ms: i64, now_ms: i64) -> Self {
        Self::from_millis(end_ms.saturating_sub(now_ms))
    }

    /// Whole minutes left, `floor(total / 60000)`.
    pub fn total_minutes(&self) -> u64 {
        self.total / MS_PER_MINUTE
    }

    pub fn is_zero(&self) -> bool {
        self.total == 0
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// A boundary crossed between two consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneEvent {
    Milestone30Min,
    HourBoundary,
    FinalHourEntered,
    Completed,
}

impl fmt::Display for MilestoneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneEvent::Milestone30Min => write!(f, "30-minute milestone"),
            MilestoneEvent::HourBoundary => write!(f, "hour boundary"),
            MilestoneEvent::FinalHourEntered => write!(f, "final hour entered"),
            MilestoneEvent::Completed => write!(f, "countdown completed"),
        }
    }
}

/// Edges between `previous` and `next`, in detection order.
///
/// Each check compares against the prior reading, so a boundary that stays
/// current for several ticks fires once. The hour boundary is also a 30-minute
/// boundary; both are reported.
pub fn detect_milestones(previous: &TimeRemaining, next: &TimeRemaining) -> Vec<MilestoneEvent> {
    let mut fired = Vec::new();

    let minutes = next.total_minutes();
    if minutes > 0 && minutes != previous.total_minutes() {
        if minutes % 30 == 0 {
            fired.push(MilestoneEvent::Milestone30Min);
        }
        if minutes % 60 == 0 {
            fired.push(MilestoneEvent::HourBoundary);
        }
    }

    if next.hours == 0 && previous.hours > 0 {
        fired.push(MilestoneEvent::FinalHourEntered);
    }

    if next.total == 0 && previous.total > 0 {
        fired.push(MilestoneEvent::Completed);
    }

    fired
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub remaining: TimeRemaining,
    pub is_active: bool,
    pub milestones: Vec<MilestoneEvent>,
}

impl Tick {
    pub fn fired(&self, event: MilestoneEvent) -> bool {
        self.milestones.contains(&event)
    }

    pub fn completed(&self) -> bool {
        self.fired(MilestoneEvent::Completed)
    }
}

/// One tick as a pure function of the prior reading, the deadline and now.
///
/// A wall clock that steps backwards never raises the remaining time: the
/// previous reading is kept instead.
pub fn advance(previous: &TimeRemaining, end_ms: i64, now_ms: i64) -> Tick {
    let mut remaining = TimeRemaining::until(end_ms, now_ms);
    if remaining.total > previous.total {
        debug!(
            "Clock moved backwards ({} ms > {} ms), holding previous reading",
            remaining.total, previous.total
        );
        remaining = *previous;
    }

    let milestones = detect_milestones(previous, &remaining);
    Tick {
        remaining,
        is_active: remaining.total > 0,
        milestones,
    }
}

/// Stateful tracker: a fixed deadline plus the last reading.
#[derive(Debug, Clone)]
pub struct Countdown {
    end_ms: i64,
    previous: TimeRemaining,
    active: bool,
}

impl Countdown {
    /// Starts a countdown of `duration_ms` at `start_ms`.
    ///
    /// The initial reading is the full duration, so a start value that sits
    /// on a boundary is not itself a crossing.
    pub fn new(start_ms: i64, duration_ms: i64) -> Self {
        let previous = TimeRemaining::from_millis(duration_ms);
        Self {
            end_ms: start_ms.saturating_add(duration_ms),
            previous,
            active: previous.total > 0,
        }
    }

    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    pub fn remaining(&self) -> TimeRemaining {
        self.previous
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance to `now_ms`. Returns `None` once the countdown has completed.
    pub fn tick(&mut self, now_ms: i64) -> Option<Tick> {
        if !self.active {
            return None;
        }
        let tick = advance(&self.previous, self.end_ms, now_ms);
        self.previous = tick.remaining;
        self.active = tick.is_active;
        Some(tick)
    }
}

/// Wall-clock source in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// `Date.now()` in the browser, `SystemTime` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as i64)
                .unwrap_or(0)
        }
    }
}

/// A running countdown: the tracker plus the tick that drives it.
///
/// Dropping the handle cancels the tick.
pub struct CountdownHandle<H> {
    tracker: Rc<RefCell<Countdown>>,
    ticker: TickHandle<H>,
}

impl<H> CountdownHandle<H> {
    pub fn remaining(&self) -> TimeRemaining {
        self.tracker.borrow().remaining()
    }

    pub fn is_active(&self) -> bool {
        self.tracker.borrow().is_active()
    }

    pub fn end_ms(&self) -> i64 {
        self.tracker.borrow().end_ms()
    }

    /// Whether a recurring tick is still scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn stop(&mut self) {
        self.ticker.cancel();
    }
}

/// Create a countdown of `duration_ms` and schedule its one-second tick.
///
/// `on_tick` sees every tick while active; `on_complete` runs exactly once,
/// when the remaining time first reaches zero. A non-positive duration
/// completes immediately and schedules nothing. The completing tick cancels
/// the recurring timer itself; dropping the handle cancels it earlier.
pub fn start_countdown<S, C, T, D>(
    scheduler: &S,
    clock: C,
    duration_ms: i64,
    mut on_tick: T,
    on_complete: D,
) -> CountdownHandle<S::Handle>
where
    S: Scheduler + 'static,
    S::Handle: 'static,
    C: Clock + 'static,
    T: FnMut(&Tick) + 'static,
    D: FnOnce() + 'static,
{
    let tracker = Rc::new(RefCell::new(Countdown::new(clock.now_ms(), duration_ms)));
    let mut on_complete = Some(on_complete);

    if !tracker.borrow().is_active() {
        info!("Countdown of {} ms is already complete", duration_ms);
        if let Some(done) = on_complete.take() {
            done();
        }
        return CountdownHandle {
            tracker,
            ticker: TickHandle::idle(),
        };
    }

    info!(
        "Starting countdown: {} ({} ms)",
        tracker.borrow().remaining(),
        duration_ms
    );

    let shared = Rc::clone(&tracker);
    let ticker = TickHandle::schedule(scheduler, defaults::TICK_MS, move || {
        let tick = match shared.borrow_mut().tick(clock.now_ms()) {
            Some(tick) => tick,
            None => return TickFlow::Stop,
        };
        for event in &tick.milestones {
            debug!("{} at {}", event, tick.remaining);
        }

        on_tick(&tick);

        if !tick.completed() {
            return TickFlow::Continue;
        }
        info!("Countdown complete");
        if let Some(done) = on_complete.take() {
            done();
        }
        TickFlow::Stop
    });

    CountdownHandle { tracker, ticker }
}

/// Remaining time between two JavaScript timestamps, for plain JS callers.
///
/// # Returns
/// Serialized `{hours, minutes, seconds, total}`, or `null` if serialization fails
#[wasm_bindgen]
pub fn countdown_snapshot(end_ms: f64, now_ms: f64) -> JsValue {
    let remaining = TimeRemaining::until(end_ms as i64, now_ms as i64);
    serde_wasm_bindgen::to_value(&remaining).unwrap_or(JsValue::NULL)
}
