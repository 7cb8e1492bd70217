//! Celebration effects chosen for milestone events.
//!
//! The tracker only reports edges; this module decides how each one is shown
//! and lays out the random confetti and firework pieces. Layout functions take
//! the random source as a parameter so they can be seeded.

use crate::config::{
    CONFETTI_MS, FINAL_HOUR_OVERLAY_MS, FIREWORKS_MS, FIREWORK_SPARKS_PER_ROW, HOUR_OVERLAY_MS,
    MILESTONE_OVERLAY_MS,
};
use crate::{MilestoneEvent, TimeRemaining};
use rand::seq::IndexedRandom;
use rand::Rng;

pub const CONFETTI_COLORS: [&str; 6] = [
    "bg-primary",
    "bg-secondary",
    "bg-accent",
    "bg-neon-cyan",
    "bg-neon-pink",
    "bg-neon-orange",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    ConfettiBurst,
    Fireworks,
    FinalHourAlert,
}

/// How long a milestone stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectPlan {
    pub kind: EffectKind,
    /// Whole overlay, headline included.
    pub overlay_ms: u32,
    /// Confetti or sparks inside the overlay; zero when there are none.
    pub particles_ms: u32,
}

/// The treatment for a single event. Completion has no overlay.
pub fn plan_for(event: MilestoneEvent) -> Option<EffectPlan> {
    match event {
        MilestoneEvent::Milestone30Min => Some(EffectPlan {
            kind: EffectKind::ConfettiBurst,
            overlay_ms: MILESTONE_OVERLAY_MS,
            particles_ms: CONFETTI_MS,
        }),
        MilestoneEvent::HourBoundary => Some(EffectPlan {
            kind: EffectKind::Fireworks,
            overlay_ms: HOUR_OVERLAY_MS,
            particles_ms: FIREWORKS_MS,
        }),
        MilestoneEvent::FinalHourEntered => Some(EffectPlan {
            kind: EffectKind::FinalHourAlert,
            overlay_ms: FINAL_HOUR_OVERLAY_MS,
            particles_ms: 0,
        }),
        MilestoneEvent::Completed => None,
    }
}

/// Of the events fired on one tick, the one to show: the last with a plan.
pub fn dominant_effect(events: &[MilestoneEvent]) -> Option<EffectPlan> {
    events.iter().rev().find_map(|event| plan_for(*event))
}

pub fn headline(kind: EffectKind, remaining: &TimeRemaining) -> String {
    match kind {
        EffectKind::FinalHourAlert => "🚨 FINAL HOUR ACTIVATED! 🚨".to_string(),
        EffectKind::Fireworks => {
            let hours = remaining.hours;
            let plural = if hours == 1 { "" } else { "S" };
            format!("🎉 {} HOUR{} REMAINING! 🎉", hours, plural)
        }
        EffectKind::ConfettiBurst => "🎯 MILESTONE REACHED! 🎯".to_string(),
    }
}

pub fn subline(kind: EffectKind) -> Option<&'static str> {
    match kind {
        EffectKind::Fireworks => Some("Keep pushing! Innovation never sleeps! 💪"),
        EffectKind::FinalHourAlert => Some("This is your moment - make it count! ⚡"),
        EffectKind::ConfettiBurst => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    pub color: &'static str,
    /// Animation delay in seconds, `[0, 0.5)`.
    pub delay_s: f64,
    /// Position in percent of the viewport.
    pub x_pct: f64,
    pub y_pct: f64,
}

pub fn confetti_burst<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|id| ConfettiPiece {
            id,
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or(CONFETTI_COLORS[0]),
            delay_s: rng.random_range(0.0..0.5),
            x_pct: rng.random_range(0.0..100.0),
            y_pct: rng.random_range(0.0..100.0),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub id: usize,
    pub color: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
}

/// Two staggered rows of sparks; the second row starts a second later.
pub fn firework_sparks<R: Rng + ?Sized>(rng: &mut R) -> Vec<Spark> {
    let per_row = FIREWORK_SPARKS_PER_ROW;
    let upper = (0..per_row).map(|i| Spark {
        id: i,
        color: "bg-primary",
        left_pct: 20.0 + i as f64 * 15.0,
        top_pct: 10.0 + rng.random_range(0.0..30.0),
        delay_s: i as f64 * 0.3,
    });
    let mut sparks: Vec<Spark> = upper.collect();
    sparks.extend((0..per_row).map(|i| Spark {
        id: per_row + i,
        color: "bg-secondary",
        left_pct: 25.0 + i as f64 * 15.0,
        top_pct: 40.0 + rng.random_range(0.0..30.0),
        delay_s: i as f64 * 0.3 + 1.0,
    }));
    sparks
}
