pub mod alerts;
pub mod error;
pub mod onboarding;
pub mod production;
pub mod session;
pub mod tariff;
pub mod tween;
