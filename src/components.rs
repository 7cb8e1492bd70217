//! Yew view components for the countdown page.
//!
//! Most components here render straight from props; the few that animate
//! (quote rotation, overlay particles) own their timers through the hooks in
//! `hooks.rs` so nothing keeps firing after unmount.

use crate::hooks::{use_rotation, use_transient};
use hackathon_countdown::config::{CONFETTI_PIECES, QUOTE_ROTATION_MS, SPOTLIGHT_MS};
use hackathon_countdown::effects::{
    confetti_burst, firework_sparks, headline, subline, EffectKind, EffectPlan,
};
use hackathon_countdown::messages::{
    motivational_message, spotlight_for, MessageContext, FINAL_HOUR_MESSAGES, QUOTES,
};
use hackathon_countdown::utils::{
    format_hours_minutes, format_two_digits, hour_pips, progress_percent, PipState,
};
use hackathon_countdown::{MilestoneEvent, TimeRemaining};
use rand::Rng;
use yew::prelude::*;

/// One two-digit block of the timer with its label.
#[derive(Properties, PartialEq)]
pub struct TimerDigitProps {
    pub value: u64,
    pub label: &'static str,
    pub pulsing: bool,
    pub final_hour: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(TimerDigit)]
pub fn timer_digit(props: &TimerDigitProps) -> Html {
    let class = classes!(
        "timer-digit",
        "transition-all",
        "duration-300",
        "cursor-pointer",
        "select-none",
        props.pulsing.then_some("animate-milestone-pulse"),
        props.final_hour.then_some("text-red-500"),
    );

    html! {
        <div class="text-center">
            <div {class} onclick={props.onclick.clone()} aria-label={props.label}>
                { format_two_digits(props.value) }
            </div>
            <div class="timer-label mt-2">{ props.label }</div>
        </div>
    }
}

/// Rotating quote, milestone spotlight and progress indicators.
#[derive(Properties, PartialEq)]
pub struct MotivationalTextProps {
    pub remaining: TimeRemaining,
    pub is_active: bool,
    pub duration_ms: i64,
    pub milestones: Vec<MilestoneEvent>,
    pub burst: u32,
}

#[function_component(MotivationalText)]
pub fn motivational_text(props: &MotivationalTextProps) -> Html {
    let quote_index = use_rotation(QUOTES.len(), QUOTE_ROTATION_MS);

    let spotlight = spotlight_for(&props.milestones);
    let spotlight_on = use_transient(
        if spotlight.is_some() { props.burst } else { 0 },
        SPOTLIGHT_MS,
    );

    // Drawn once per final hour instead of on every render.
    let final_hour = props.is_active && props.remaining.hours == 0;
    let final_pick = use_memo(final_hour, |_| {
        rand::rng().random_range(0..FINAL_HOUR_MESSAGES.len())
    });

    let ctx = MessageContext {
        is_active: props.is_active,
        quote_index,
        spotlight: if spotlight_on { spotlight } else { None },
        final_pick: *final_pick,
    };
    let message = motivational_message(&props.remaining, &ctx);

    let class = classes!(
        "motivation-text",
        "text-center",
        "max-w-4xl",
        "mx-auto",
        "transition-all",
        "duration-500",
        final_hour.then_some("text-red-400 animate-pulse"),
        spotlight_on.then_some("scale-110"),
    );

    let percent = progress_percent(&props.remaining, props.duration_ms);
    let pips = hour_pips(&props.remaining, props.duration_ms, props.is_active);

    html! {
        <div class="mb-12">
            <div {class}>{ message }</div>

            <div class="mt-8 flex justify-center space-x-2">
                { for pips.iter().enumerate().map(|(i, pip)| {
                    let state = match pip {
                        PipState::Completed => "bg-secondary glow-secondary",
                        PipState::Current => "bg-primary glow-primary animate-pulse",
                        PipState::Pending => "bg-muted",
                    };
                    html! {
                        <div key={i} class={classes!("w-2", "h-2", "rounded-full", state)} />
                    }
                }) }
            </div>

            <div class="mt-4 w-full max-w-md mx-auto">
                <div class="h-1 bg-muted rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-primary to-secondary"
                        style={format!("width: {:.2}%", percent)}
                    />
                </div>
                <div class="mt-2 text-center">
                    <span class="text-xs text-muted-foreground">
                        { format!("{}% Complete", percent.round()) }
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Full-screen overlay shown while a milestone effect is on.
#[derive(Properties, PartialEq)]
pub struct AnimationTriggerProps {
    pub plan: EffectPlan,
    pub remaining: TimeRemaining,
    pub burst: u32,
}

#[function_component(AnimationTrigger)]
pub fn animation_trigger(props: &AnimationTriggerProps) -> Html {
    let confetti = use_memo(props.burst, |_| {
        confetti_burst(&mut rand::rng(), CONFETTI_PIECES)
    });
    let sparks = use_memo(props.burst, |_| firework_sparks(&mut rand::rng()));
    let particles_on = use_transient(props.burst, props.plan.particles_ms);

    let kind = props.plan.kind;
    let headline_class = classes!(
        "text-4xl",
        "md:text-6xl",
        "lg:text-8xl",
        "font-black",
        "text-center",
        match kind {
            EffectKind::FinalHourAlert => "text-red-400 animate-pulse",
            EffectKind::Fireworks => "motivation-text",
            EffectKind::ConfettiBurst => "text-secondary",
        },
    );

    let particles = match kind {
        EffectKind::ConfettiBurst if particles_on => html! {
            { for confetti.iter().map(|piece| html! {
                <div
                    key={piece.id}
                    class={classes!(
                        "absolute", "w-3", "h-3", piece.color, "animate-confetti-burst"
                    )}
                    style={format!(
                        "left: {:.1}%; top: {:.1}%; animation-delay: {:.2}s",
                        piece.x_pct, piece.y_pct, piece.delay_s
                    )}
                />
            }) }
        },
        EffectKind::Fireworks if particles_on => html! {
            <div class="absolute inset-0">
                { for sparks.iter().map(|spark| html! {
                    <div
                        key={spark.id}
                        class={classes!("absolute", "w-2", "h-2", "rounded-full", spark.color)}
                        style={format!(
                            "left: {:.1}%; top: {:.1}%; \
                             animation: confetti-burst 2s ease-out {:.1}s forwards",
                            spark.left_pct, spark.top_pct, spark.delay_s
                        )}
                    />
                }) }
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="fixed inset-0 z-50 pointer-events-none">
            { particles }

            <div class="absolute inset-0 flex items-center justify-center">
                <div class="cyber-card p-8 md:p-12 max-w-4xl mx-auto animate-milestone-pulse">
                    <div class={headline_class}>{ headline(kind, &props.remaining) }</div>
                    if let Some(text) = subline(kind) {
                        <div class="mt-4 text-xl md:text-2xl text-center text-muted-foreground">
                            { text }
                        </div>
                    }
                </div>
            </div>

            if kind == EffectKind::FinalHourAlert {
                <div class="absolute inset-0 bg-red-500/20 animate-pulse" />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusIndicatorProps {
    pub is_active: bool,
}

#[function_component(StatusIndicator)]
pub fn status_indicator(props: &StatusIndicatorProps) -> Html {
    let (dot, label) = if props.is_active {
        ("bg-secondary animate-pulse", "ACTIVE")
    } else {
        ("bg-red-500", "COMPLETE")
    };

    html! {
        <div class="absolute bottom-8 left-8 flex items-center space-x-2">
            <div class={classes!("w-3", "h-3", "rounded-full", dot)} />
            <span class="text-sm text-muted-foreground">{ label }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerInfoProps {
    pub remaining: TimeRemaining,
}

#[function_component(TimerInfo)]
pub fn timer_info(props: &TimerInfoProps) -> Html {
    html! {
        <div class="absolute bottom-8 right-8 text-right">
            <div class="text-sm text-muted-foreground">
                if props.remaining.is_zero() {
                    <div class="text-secondary font-bold">{ "🎉 HACKATHON COMPLETE! 🎉" }</div>
                } else {
                    <div>{ "Time Remaining" }</div>
                    <div class="text-primary font-mono">
                        { format_hours_minutes(props.remaining.total) }
                    </div>
                }
            </div>
        </div>
    }
}

/// Completion notice shown for a while once the countdown ends.
#[function_component(CompletionBanner)]
pub fn completion_banner() -> Html {
    html! {
        <div
            class="fixed bottom-8 left-1/2 -translate-x-1/2 z-50 cyber-card p-6 text-center"
            role="status"
        >
            <div class="text-lg font-bold">{ "🎉 HACKATHON COMPLETE! 🎉" }</div>
            <div class="text-sm text-muted-foreground">
                { "Time to present your amazing creation to the world!" }
            </div>
        </div>
    }
}
