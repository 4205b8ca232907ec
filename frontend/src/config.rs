use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose UI state logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll offset in pixels after which the header turns solid.
pub const HEADER_SOLID_THRESHOLD: f64 = 50.0;

/// Share of a section that has to be visible before it is revealed.
pub const REVEAL_AMOUNT: f64 = 0.3;
/// Distance in pixels a hidden section sits away from its final position.
pub const REVEAL_OFFSET: f64 = 50.0;
pub const REVEAL_DURATION_SECS: f64 = 0.5;

/// Scroll progress over which the hero background fades out and zooms in.
pub const HERO_PARALLAX_RANGE: (f64, f64) = (0.0, 0.5);
pub const HERO_MAX_SCALE: f64 = 1.2;
