//! Hackathon countdown page built with Yew.
//! Wires the countdown hook to the timer display, motivational text and
//! milestone overlays.

use hackathon_countdown::config::{
    CLICK_PULSE_MS, COMPLETION_BANNER_MS, DURATION_QUERY_KEY, TAGLINE, TITLE,
};
use hackathon_countdown::defaults;
use hackathon_countdown::effects::dominant_effect;
use hackathon_countdown::utils::{parse_duration_to_ms, query_param};
use log::{info, warn};
use yew::prelude::*;

mod components;
mod hooks;

use components::{
    AnimationTrigger, CompletionBanner, MotivationalText, StatusIndicator, TimerDigit, TimerInfo,
};
use hooks::{use_countdown, use_transient};

/// Duration from `?duration=...`, or the 24 hour default.
fn duration_from_location() -> i64 {
    let search = gloo_utils::window()
        .location()
        .search()
        .unwrap_or_default();

    match query_param(&search, DURATION_QUERY_KEY) {
        None => defaults::DURATION_MS,
        Some(raw) => match parse_duration_to_ms(&raw) {
            Ok(ms) => {
                info!("Countdown duration from query: {} ms", ms);
                ms
            }
            Err(e) => {
                warn!("Ignoring {}={}: {}", DURATION_QUERY_KEY, raw, e);
                defaults::DURATION_MS
            }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    #[prop_or(defaults::DURATION_MS)]
    pub duration_ms: i64,
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
}

/// The countdown page: title, digits, motivational text and overlays.
#[function_component(CountdownTimer)]
fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let countdown = use_countdown(props.duration_ms, props.on_complete.clone());

    let plan = dominant_effect(&countdown.milestones);
    let overlay_on = use_transient(
        if plan.is_some() { countdown.burst } else { 0 },
        plan.map(|p| p.overlay_ms).unwrap_or(0),
    );

    let clicks = use_state(|| 0u32);
    let pulsing = use_transient(*clicks, CLICK_PULSE_MS);
    let onclick = {
        let clicks = clicks.clone();
        Callback::from(move |_: MouseEvent| clicks.set(clicks.wrapping_add(1)))
    };

    let remaining = countdown.remaining;
    let final_hour = remaining.hours == 0;

    html! {
        <div class="relative min-h-screen flex flex-col items-center justify-center cyber-grid">
            <div class="mb-8 text-center">
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-4">
                    <span class="motivation-text">{ TITLE }</span>
                </h1>
                <p class="text-lg md:text-xl text-muted-foreground uppercase tracking-widest">
                    { TAGLINE }
                </p>
            </div>

            <div class="cyber-card p-8 md:p-12 lg:p-16 mb-8">
                <div class="flex items-center justify-center space-x-4 md:space-x-8">
                    <TimerDigit value={remaining.hours} label="Hours"
                        pulsing={pulsing} final_hour={final_hour} onclick={onclick.clone()} />
                    <div class="timer-separator">{ ":" }</div>
                    <TimerDigit value={remaining.minutes} label="Minutes"
                        pulsing={pulsing} final_hour={final_hour} onclick={onclick.clone()} />
                    <div class="timer-separator">{ ":" }</div>
                    <TimerDigit value={remaining.seconds} label="Seconds"
                        pulsing={pulsing} final_hour={final_hour} onclick={onclick} />
                </div>
            </div>

            <MotivationalText
                remaining={remaining}
                is_active={countdown.is_active}
                duration_ms={props.duration_ms}
                milestones={countdown.milestones.clone()}
                burst={countdown.burst}
            />

            if let (true, Some(plan)) = (overlay_on, plan) {
                <AnimationTrigger plan={plan} remaining={remaining} burst={countdown.burst} />
            }

            <StatusIndicator is_active={countdown.is_active} />
            <TimerInfo remaining={remaining} />
        </div>
    }
}

/// App root: resolves the duration once and shows the completion banner.
#[function_component]
pub fn App() -> Html {
    let duration_ms = use_memo((), |_| duration_from_location());

    let completions = use_state(|| 0u32);
    let banner_on = use_transient(*completions, COMPLETION_BANNER_MS);
    let on_complete = {
        let completions = completions.clone();
        Callback::from(move |_: ()| completions.set(completions.wrapping_add(1)))
    };

    html! {
        <>
            <CountdownTimer duration_ms={*duration_ms} {on_complete} />
            if banner_on {
                <CompletionBanner />
            }
        </>
    }
}

/// Entry point: installs the panic hook and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
