use super::error::AppError;
use crate::config::Config;
use crate::utils::format::format_pt_br;

/// Physical constants of the damped spring driving a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// Distance and speed under which the spring counts as settled
    pub rest_delta: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: Config::SPRING_MASS,
            stiffness: Config::SPRING_STIFFNESS,
            damping: Config::SPRING_DAMPING,
            rest_delta: Config::SPRING_REST_DELTA,
        }
    }
}

/// How a tween renders its live value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
}

impl NumberFormat {
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_pt_br(value, self.decimals),
            self.suffix
        )
    }
}

/// Raw integrator state of one animated value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TweenState {
    pub current: f64,
    pub target: f64,
    pub velocity: f64,
}

/// A spring-animated numeric display value.
///
/// The tween is a plain integrator: callers feed it targets with
/// [`Tween::observe`] and advance it with [`Tween::step`] from whatever clock
/// they have (animation frames in the browser, a loop in tests).
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    state: TweenState,
    spring: SpringConfig,
    format: NumberFormat,
}

impl Tween {
    /// Creates a tween resting at 0.
    pub fn new(format: NumberFormat) -> Self {
        Self::with_spring(format, SpringConfig::default())
    }

    pub fn with_spring(format: NumberFormat, spring: SpringConfig) -> Self {
        Self {
            state: TweenState::default(),
            spring,
            format,
        }
    }

    pub const fn state(&self) -> TweenState {
        self.state
    }

    pub const fn current(&self) -> f64 {
        self.state.current
    }

    pub const fn target(&self) -> f64 {
        self.state.target
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    pub fn set_format(&mut self, format: NumberFormat) {
        self.format = format;
    }

    /// Re-aims the spring at `target`.
    ///
    /// Position and velocity carry over, so an in-flight animation bends
    /// toward the new target instead of restarting.
    pub fn observe(&mut self, target: f64) -> Result<(), AppError> {
        if !target.is_finite() {
            return Err(AppError::InvalidValue(format!(
                "Tween target must be finite, got {target}"
            )));
        }
        self.state.target = target;
        Ok(())
    }

    pub fn is_settled(&self) -> bool {
        let rest = self.spring.rest_delta;
        (self.state.current - self.state.target).abs() < rest && self.state.velocity.abs() < rest
    }

    /// Advances the spring by `dt` seconds. Returns `true` while still animating.
    ///
    /// A non-finite or non-positive `dt` leaves the state untouched.
    pub fn step(&mut self, dt: f64) -> bool {
        if !is_valid_dt(dt) || self.is_settled() {
            return false;
        }

        let SpringConfig {
            mass,
            stiffness,
            damping,
            ..
        } = self.spring;
        let state = &mut self.state;

        let acceleration =
            -stiffness * (state.current - state.target) / mass - damping * state.velocity / mass;
        state.velocity += acceleration * dt;
        state.current += state.velocity * dt;

        !self.is_settled()
    }

    /// The live value rendered with prefix, pt-BR digits and suffix.
    ///
    /// At rest the target is rendered, since `current` only gets within
    /// `rest_delta` of it.
    pub fn display(&self) -> String {
        if self.is_settled() {
            self.format.render(self.state.target)
        } else {
            self.format.render(self.state.current)
        }
    }

    /// Lazily steps the tween by `dt`, yielding the rendered value after each
    /// step until it settles.
    pub const fn frames(&mut self, dt: f64) -> TweenFrames<'_> {
        TweenFrames { tween: self, dt }
    }
}

/// Iterator returned by [`Tween::frames`].
#[derive(Debug)]
pub struct TweenFrames<'a> {
    tween: &'a mut Tween,
    dt: f64,
}

impl Iterator for TweenFrames<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if !is_valid_dt(self.dt) || self.tween.is_settled() {
            return None;
        }
        self.tween.step(self.dt);
        Some(self.tween.display())
    }
}

fn is_valid_dt(dt: f64) -> bool {
    dt.is_finite() && dt > 0.0
}

/// Seconds to step for an animation frame stamped `now` (milliseconds).
///
/// Without a previous stamp this is the first frame after waking and gets a
/// nominal 1/60 s. Otherwise the gap is clamped to `[0, MAX_FRAME_DELTA_MS]`,
/// so a backgrounded tab resumes with one bounded step.
pub fn frame_delta(last: Option<f64>, now: f64) -> f64 {
    let dt_ms = last.map_or(Config::DEFAULT_FRAME_DELTA_MS, |last| {
        (now - last).clamp(0.0, Config::MAX_FRAME_DELTA_MS)
    });
    dt_ms / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_new_tween_rests_at_zero() {
        let tween = Tween::new(NumberFormat::default());
        assert_eq!(tween.current(), 0.0);
        assert!(tween.is_settled());
        assert_eq!(tween.display(), "0");
    }

    #[test]
    fn test_settled_tween_does_not_step() {
        let mut tween = Tween::new(NumberFormat::default());
        assert!(!tween.step(FRAME));
        assert_eq!(tween.state(), TweenState::default());
    }

    #[test]
    fn test_observe_does_not_move_current() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(340.0).unwrap();
        assert_eq!(tween.current(), 0.0);
        assert_eq!(tween.target(), 340.0);
        assert!(!tween.is_settled());
    }

    #[test]
    fn test_first_step_moves_toward_target() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(100.0).unwrap();
        assert!(tween.step(FRAME));
        assert!(tween.current() > 0.0);
        assert!(tween.state().velocity > 0.0);
    }

    #[test]
    fn test_rejects_non_finite_target() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(10.0).unwrap();

        assert!(matches!(
            tween.observe(f64::NAN),
            Err(AppError::InvalidValue(_))
        ));
        assert!(matches!(
            tween.observe(f64::INFINITY),
            Err(AppError::InvalidValue(_))
        ));
        assert_eq!(tween.target(), 10.0);
    }

    #[test]
    fn test_frames_end_when_settled() {
        let mut tween = Tween::new(NumberFormat::new(0).suffix(" kWh"));
        tween.observe(410.0).unwrap();

        let frames: Vec<String> = tween.frames(FRAME).collect();
        assert!(!frames.is_empty());
        assert!(frames.len() < 1_000);
        assert_eq!(frames.last().map(String::as_str), Some("410 kWh"));
        assert!(tween.is_settled());
        assert_eq!(tween.frames(FRAME).count(), 0);
    }

    #[test]
    fn test_invalid_dt_is_a_no_op() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(100.0).unwrap();

        for dt in [f64::NAN, f64::INFINITY, 0.0, -FRAME] {
            assert!(!tween.step(dt), "dt {dt}");
            assert_eq!(tween.current(), 0.0);
            assert_eq!(tween.state().velocity, 0.0);
        }
    }

    #[test]
    fn test_recovers_after_nan_dt() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(5.0).unwrap();
        tween.step(f64::NAN);
        tween.observe(10.0).unwrap();

        let last = tween.frames(FRAME).take(5_000).last();
        assert!(tween.is_settled());
        assert!(tween.current().is_finite());
        assert_eq!(last.as_deref(), Some("10"));
    }

    #[test]
    fn test_frames_with_invalid_dt_are_empty() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(100.0).unwrap();

        assert_eq!(tween.frames(0.0).count(), 0);
        assert_eq!(tween.frames(f64::NAN).count(), 0);
        assert_eq!(tween.frames(-1.0).count(), 0);
        assert_eq!(tween.current(), 0.0);
    }

    #[test]
    fn test_settled_display_is_exact_target() {
        let mut tween = Tween::new(NumberFormat::new(3));
        tween.observe(12.5).unwrap();

        let last = tween.frames(FRAME).last();
        assert!(tween.is_settled());
        assert_eq!(last.as_deref(), Some("12,500"));
        assert_eq!(tween.display(), "12,500");
    }

    #[test]
    fn test_frame_delta_first_frame() {
        assert!((frame_delta(None, 12_345.0) - FRAME).abs() < 1e-12);
    }

    #[test]
    fn test_frame_delta_normal_frame() {
        assert!((frame_delta(Some(1_000.0), 1_016.0) - 0.016).abs() < 1e-12);
    }

    #[test]
    fn test_frame_delta_backgrounded_tab_is_capped() {
        assert_eq!(frame_delta(Some(1_000.0), 1_500.0), 0.04);
    }

    #[test]
    fn test_frame_delta_backwards_timestamp() {
        let dt = frame_delta(Some(2_000.0), 1_990.0);
        assert_eq!(dt, 0.0);

        // Zero steps nothing and does not count as settling
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(100.0).unwrap();
        tween.step(dt);
        assert!(!tween.is_settled());
    }

    #[test]
    fn test_format_builder() {
        let format = NumberFormat::new(2).prefix("R$ ").suffix("/mês");
        assert_eq!(format.render(1234.5), "R$ 1.234,50/mês");
    }
}
