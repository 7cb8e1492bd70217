//! Motivational text shown under the timer.

use crate::{MilestoneEvent, TimeRemaining};

pub const QUOTES: [&str; 15] = [
    "Keep coding, keep creating! 💻",
    "Innovation happens here! ⚡",
    "Turn caffeine into code! ☕",
    "Build the future today! 🚀",
    "Debug the world, one line at a time! 🌍",
    "Code like there's no tomorrow! ⏰",
    "Think big, code bigger! 💡",
    "Make it work, make it better! 🔧",
    "From idea to reality! ✨",
    "Push your limits! 💪",
    "Create something amazing! 🎯",
    "The magic happens in the code! 🎩",
    "Solve problems, change the world! 🌟",
    "Code, test, repeat! 🔄",
    "Innovation in progress! ⚙️",
];

/// Indexed by hours elapsed: `HOURLY_MESSAGES[24 - hours_left]`.
pub const HOURLY_MESSAGES: [&str; 25] = [
    "24 hours of pure innovation ahead! 🎯",
    "23 hours to make your mark! 💥",
    "22 hours of coding excellence! ⭐",
    "21 hours to build something incredible! 🚀",
    "20 hours of non-stop creativity! 🎨",
    "19 hours to change the world! 🌍",
    "18 hours of breakthrough moments! 💡",
    "17 hours to code your dreams! ✨",
    "16 hours of innovation left! ⚡",
    "15 hours to make it perfect! 🎯",
    "14 hours of coding mastery! 👑",
    "13 hours to ship something amazing! 📦",
    "12 hours - halfway to greatness! 🏃‍♂️",
    "11 hours of intense focus! 🎯",
    "10 hours to polish your creation! ✨",
    "9 hours - the final push begins! 💪",
    "8 hours of dedication left! ⏰",
    "7 hours to make it shine! 🌟",
    "6 hours - almost there! 🏁",
    "5 hours - time to optimize! ⚡",
    "4 hours - final features! 🔧",
    "3 hours - debugging time! 🐛",
    "2 hours - presentation prep! 📊",
    "1 hour - final touches! 🎨",
    "Time's up! Present your masterpiece! 🎉",
];

pub const FINAL_HOUR_MESSAGES: [&str; 5] = [
    "🚨 FINAL HOUR - Make every second count!",
    "⏰ 60 minutes to finish strong!",
    "🔥 This is it - the final sprint!",
    "💥 Last chance to add that killer feature!",
    "⚡ Final hour energy - you've got this!",
];

pub const CHECKPOINT_MESSAGE: &str = "🎯 30-minute checkpoint - Keep the momentum going!";
pub const COMPLETE_MESSAGE: &str =
    "🎉 Congratulations! Time to present your amazing creation! 🎉";

/// What the motivational line should say right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageContext {
    pub is_active: bool,
    /// Position in the quote rotation; wraps.
    pub quote_index: usize,
    /// Milestone currently spotlighted in place of the quote, if any.
    pub spotlight: Option<MilestoneEvent>,
    /// Which final-hour message was drawn for this final hour; wraps.
    pub final_pick: usize,
}

pub fn hourly_message(hours_left: u64) -> Option<&'static str> {
    let elapsed = 24usize.checked_sub(usize::try_from(hours_left).ok()?)?;
    HOURLY_MESSAGES.get(elapsed).copied()
}

/// Completion first, then the final hour, then a spotlighted milestone,
/// then the rotating quote.
pub fn motivational_message(remaining: &TimeRemaining, ctx: &MessageContext) -> &'static str {
    let quote = QUOTES[ctx.quote_index % QUOTES.len()];

    if !ctx.is_active {
        return COMPLETE_MESSAGE;
    }
    if remaining.hours == 0 {
        return FINAL_HOUR_MESSAGES[ctx.final_pick % FINAL_HOUR_MESSAGES.len()];
    }
    match ctx.spotlight {
        Some(MilestoneEvent::HourBoundary) => hourly_message(remaining.hours).unwrap_or(quote),
        Some(MilestoneEvent::Milestone30Min) => CHECKPOINT_MESSAGE,
        _ => quote,
    }
}

/// The milestone to spotlight from one tick's events, hour marks first.
pub fn spotlight_for(events: &[MilestoneEvent]) -> Option<MilestoneEvent> {
    if events.contains(&MilestoneEvent::HourBoundary) {
        Some(MilestoneEvent::HourBoundary)
    } else if events.contains(&MilestoneEvent::Milestone30Min) {
        Some(MilestoneEvent::Milestone30Min)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;

    fn ctx() -> MessageContext {
        MessageContext {
            is_active: true,
            quote_index: 0,
            spotlight: None,
            final_pick: 0,
        }
    }

    #[test]
    fn test_quote_rotation_wraps() {
        let remaining = TimeRemaining::from_millis(5 * HOUR);
        let mut c = ctx();
        c.quote_index = 1;
        assert_eq!(motivational_message(&remaining, &c), QUOTES[1]);
        c.quote_index = QUOTES.len() + 2;
        assert_eq!(motivational_message(&remaining, &c), QUOTES[2]);
    }

    #[test]
    fn test_spotlights() {
        let remaining = TimeRemaining::from_millis(12 * HOUR);
        let mut c = ctx();
        c.spotlight = Some(MilestoneEvent::HourBoundary);
        assert_eq!(
            motivational_message(&remaining, &c),
            "12 hours - halfway to greatness! 🏃‍♂️"
        );

        c.spotlight = Some(MilestoneEvent::Milestone30Min);
        assert_eq!(motivational_message(&remaining, &c), CHECKPOINT_MESSAGE);
    }

    #[test]
    fn test_final_hour_and_completion_take_precedence() {
        let last = TimeRemaining::from_millis(HOUR / 2);
        let mut c = ctx();
        c.spotlight = Some(MilestoneEvent::Milestone30Min);
        c.final_pick = 7;
        assert_eq!(motivational_message(&last, &c), FINAL_HOUR_MESSAGES[2]);

        c.is_active = false;
        assert_eq!(motivational_message(&TimeRemaining::ZERO, &c), COMPLETE_MESSAGE);
    }

    #[test]
    fn test_hourly_message_bounds() {
        assert_eq!(hourly_message(24), Some(HOURLY_MESSAGES[0]));
        assert_eq!(hourly_message(1), Some("1 hour - final touches! 🎨"));
        assert_eq!(hourly_message(0), Some(HOURLY_MESSAGES[24]));
        assert_eq!(hourly_message(30), None);

        // Longer than a day falls back to the quote.
        let long = TimeRemaining::from_millis(30 * HOUR);
        let mut c = ctx();
        c.spotlight = Some(MilestoneEvent::HourBoundary);
        assert_eq!(motivational_message(&long, &c), QUOTES[0]);
    }

    #[test]
    fn test_spotlight_for() {
        assert_eq!(
            spotlight_for(&[MilestoneEvent::Milestone30Min, MilestoneEvent::HourBoundary]),
            Some(MilestoneEvent::HourBoundary)
        );
        assert_eq!(
            spotlight_for(&[MilestoneEvent::Milestone30Min]),
            Some(MilestoneEvent::Milestone30Min)
        );
        assert_eq!(spotlight_for(&[MilestoneEvent::FinalHourEntered]), None);
    }
}
