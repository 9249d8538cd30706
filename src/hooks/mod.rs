pub mod use_insight;
pub mod use_onboarding;
pub mod use_tween;
