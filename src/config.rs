/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Delay before a submitted login flips to signed in (milliseconds)
    pub const LOGIN_DELAY_MS: u32 = 1_000;

    /// localStorage key for the "onboarding seen" flag
    pub const ONBOARDING_STORAGE_KEY: &'static str = "yla_onboarding_seen";

    /// Longest frame delta fed to a tween step (milliseconds).
    /// Frames arriving later than this (background tab, debugger) are clamped.
    pub const MAX_FRAME_DELTA_MS: f64 = 40.0;

    /// Frame delta assumed for the first frame after a tween wakes up
    pub const DEFAULT_FRAME_DELTA_MS: f64 = 1_000.0 / 60.0;

    pub const SPRING_MASS: f64 = 1.0;
    pub const SPRING_STIFFNESS: f64 = 80.0;
    pub const SPRING_DAMPING: f64 = 12.0;
    pub const SPRING_REST_DELTA: f64 = 0.001;

    /// Fixed charge added on top of the tier fee on the invoice (R$)
    pub const INVOICE_BASE_CHARGE: f64 = 45.30;
}
