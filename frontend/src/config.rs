use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before the page asks every live reveal group to re-measure.
pub const SCROLL_REFRESH_DELAY_MS: u32 = 100;

/// Simulated round trip of the contact form.
pub const SUBMIT_LATENCY_MS: u32 = 1_500;

/// How long the "sent" confirmation stays on the submit button.
pub const SUBMITTED_DISPLAY_MS: u32 = 5_000;

/// Window scroll offset (px) after which the nav switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;
