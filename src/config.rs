//! Widget-level configuration constants.

// Page text
pub const TITLE: &str = "HACKATHON";
pub const TAGLINE: &str = "Code • Create • Conquer";
pub const DURATION_QUERY_KEY: &str = "duration";

// Milestone overlays
pub const MILESTONE_OVERLAY_MS: u32 = 3_000;
pub const HOUR_OVERLAY_MS: u32 = 5_000;
pub const FINAL_HOUR_OVERLAY_MS: u32 = 3_000;
pub const CONFETTI_MS: u32 = 2_000;
pub const FIREWORKS_MS: u32 = 4_000;
pub const CONFETTI_PIECES: usize = 20;
pub const FIREWORK_SPARKS_PER_ROW: usize = 6;

// Motivational text
pub const QUOTE_ROTATION_MS: u32 = 8_000;
pub const SPOTLIGHT_MS: u32 = 4_000;

// Progress
pub const MAX_HOUR_PIPS: usize = 24;

// Interaction and completion
pub const CLICK_PULSE_MS: u32 = 600;
pub const COMPLETION_BANNER_MS: u32 = 10_000;
