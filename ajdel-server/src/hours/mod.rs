//! Business hours - open/closed state and countdown
//!
//! The shop advertises one regular window for six days of the week and a
//! reduced window on Friday. Everything here is derived from a single
//! instant: [`BusinessHours::status_at`] classifies the instant as
//! open/closed and computes the seconds left until the next flip.
//!
//! # Timezone
//!
//! All arithmetic runs in fixed UTC+3 (Riyadh). Saudi Arabia does not
//! observe DST, so the offset never changes; host-local timezone
//! conversion is deliberately avoided.
//!
//! # Modules
//!
//! - [`poller`] - once-per-second re-evaluation published on a watch channel

pub mod poller;

pub use poller::StatusPoller;

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use serde::Serialize;

use shared::LocalizedText;

/// Riyadh is UTC+3 year-round
const UTC_OFFSET_SECS: i32 = 3 * 3600;

const SECONDS_PER_DAY: u32 = 24 * 3600;

/// Day-of-week index with the reduced schedule (0=Sunday .. 6=Saturday)
const FRIDAY: u32 = 5;

/// Opening window of a single day, in whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    /// Opening hour, 0-23
    pub open: u32,
    /// Closing hour, 1-24 (24 = midnight)
    pub close: u32,
}

impl DayWindow {
    fn open_secs(&self) -> u32 {
        self.open * 3600
    }

    fn close_secs(&self) -> u32 {
        self.close * 3600
    }
}

/// Invalid opening window
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid business hours window: open={open} close={close} (need 0 <= open < close <= 24)")]
pub struct InvalidWindow {
    pub open: u32,
    pub close: u32,
}

/// Weekly schedule: one regular window plus the Friday window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessHours {
    pub regular: DayWindow,
    pub friday: DayWindow,
}

impl BusinessHours {
    /// Build a schedule, enforcing `0 <= open < close <= 24` per window
    pub fn new(regular: DayWindow, friday: DayWindow) -> Result<Self, InvalidWindow> {
        for window in [regular, friday] {
            if window.open >= window.close || window.close > 24 {
                return Err(InvalidWindow {
                    open: window.open,
                    close: window.close,
                });
            }
        }
        Ok(Self { regular, friday })
    }

    /// Window for the given day-of-week index (0=Sunday .. 6=Saturday)
    pub fn window_for(&self, day_of_week: u32) -> &DayWindow {
        if day_of_week == FRIDAY {
            &self.friday
        } else {
            &self.regular
        }
    }

    /// Evaluate the schedule at the given instant
    ///
    /// Total over all instants: never panics, never errors. Each call is
    /// independent, so callers may re-evaluate as often as they like.
    pub fn status_at(&self, instant: DateTime<Utc>) -> BusinessStatus {
        let local = instant.with_timezone(&riyadh_offset());
        let day_of_week = local.weekday().num_days_from_sunday();
        let current = local.num_seconds_from_midnight();

        let today = self.window_for(day_of_week);
        let open_secs = today.open_secs();
        let close_secs = today.close_secs();

        let is_open = open_secs <= current && current < close_secs;

        let (seconds_remaining, message) = if is_open {
            (close_secs - current, close_after())
        } else if current < open_secs {
            // Before today's opening
            (open_secs - current, open_at())
        } else {
            // After today's closing: count down to tomorrow's opening.
            // Tomorrow is re-classified, so a Thursday evening correctly
            // targets Friday's later open hour.
            let tomorrow = self.window_for((day_of_week + 1) % 7);
            (
                (SECONDS_PER_DAY - current) + tomorrow.open_secs(),
                open_at(),
            )
        };

        BusinessStatus {
            is_open,
            seconds_remaining,
            message,
            countdown: format_countdown(seconds_remaining),
        }
    }
}

impl Default for BusinessHours {
    /// Shipped schedule: 11:00-24:00 regular, 16:00-24:00 on Friday
    fn default() -> Self {
        Self {
            regular: DayWindow { open: 11, close: 24 },
            friday: DayWindow { open: 16, close: 24 },
        }
    }
}

/// Snapshot of the shop's open/closed state at one instant
///
/// Ephemeral value: rebuilt on every evaluation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessStatus {
    pub is_open: bool,
    /// Seconds until the next state flip (close if open, open if closed)
    pub seconds_remaining: u32,
    /// "We Close After" / "We Open At" label pair
    pub message: LocalizedText,
    /// `seconds_remaining` formatted as `H:MM:SS`
    pub countdown: String,
}

fn riyadh_offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_SECS).unwrap()
}

fn close_after() -> LocalizedText {
    LocalizedText::new("نغلق بعد", "We Close After")
}

fn open_at() -> LocalizedText {
    LocalizedText::new("نفتح بعد", "We Open At")
}

/// Format a countdown as `H:MM:SS` (hours unpadded)
pub fn format_countdown(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests;
