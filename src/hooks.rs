use gloo_timers::callback::{Interval, Timeout};
use hackathon_countdown::schedule::IntervalScheduler;
use hackathon_countdown::{
    start_countdown, CountdownHandle, MilestoneEvent, SystemClock, Tick, TimeRemaining,
};
use yew::prelude::*;

/// What the countdown widget renders from.
#[derive(Clone, PartialEq, Debug)]
pub struct CountdownState {
    pub remaining: TimeRemaining,
    pub is_active: bool,
    /// Events fired on the most recent tick that fired any.
    pub milestones: Vec<MilestoneEvent>,
    /// Bumped every time `milestones` is replaced; drives one-shot effects.
    pub burst: u32,
}

impl CountdownState {
    fn starting(duration_ms: i64) -> Self {
        let remaining = TimeRemaining::from_millis(duration_ms);
        Self {
            remaining,
            is_active: remaining.total > 0,
            milestones: Vec::new(),
            burst: 0,
        }
    }
}

/// Runs a countdown for the lifetime of the calling component.
///
/// The interval is created when the component mounts (or `duration_ms`
/// changes). The completing tick clears it; unmount drops whatever is left.
#[hook]
pub fn use_countdown(duration_ms: i64, on_complete: Option<Callback<()>>) -> CountdownState {
    let state = use_state_eq(|| CountdownState::starting(duration_ms));
    let ticker = use_mut_ref(|| None::<CountdownHandle<Interval>>);

    {
        let state = state.clone();
        let ticker = ticker.clone();
        use_effect_with(duration_ms, move |&duration_ms| {
            state.set(CountdownState::starting(duration_ms));

            let publish = state.clone();
            let mut burst = 0u32;
            let mut latest: Vec<MilestoneEvent> = Vec::new();
            let handle = start_countdown(
                &IntervalScheduler,
                SystemClock,
                duration_ms,
                move |tick: &Tick| {
                    if !tick.milestones.is_empty() {
                        burst = burst.wrapping_add(1);
                        latest = tick.milestones.clone();
                    }
                    publish.set(CountdownState {
                        remaining: tick.remaining,
                        is_active: tick.is_active,
                        milestones: latest.clone(),
                        burst,
                    });
                },
                move || {
                    if let Some(on_complete) = on_complete {
                        on_complete.emit(());
                    }
                },
            );
            *ticker.borrow_mut() = Some(handle);

            move || {
                ticker.borrow_mut().take();
            }
        });
    }

    (*state).clone()
}

/// `true` for `visible_ms` after `trigger` changes to a non-zero value.
///
/// The pending hide is cancelled if the trigger moves again or the component
/// unmounts.
#[hook]
pub fn use_transient(trigger: u32, visible_ms: u32) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(trigger, move |&trigger| {
            let timeout = if trigger == 0 || visible_ms == 0 {
                visible.set(false);
                None
            } else {
                visible.set(true);
                let hide = visible.clone();
                Some(Timeout::new(visible_ms, move || hide.set(false)))
            };
            move || drop(timeout)
        });
    }

    *visible
}

/// A counter advanced every `period_ms`, wrapping at `len`.
#[hook]
pub fn use_rotation(len: usize, period_ms: u32) -> usize {
    let index = use_state_eq(|| 0usize);

    {
        let index = index.clone();
        use_effect_with((len, period_ms), move |&(len, period_ms)| {
            let mut next = 0usize;
            let interval = Interval::new(period_ms, move || {
                next = (next + 1) % len.max(1);
                index.set(next);
            });
            move || drop(interval)
        });
    }

    *index
}
