pub mod alerts;
pub mod animated_number;
pub mod bottom_nav;
pub mod consumption;
pub mod consumption_gauge;
pub mod dashboard;
pub mod insight_card;
pub mod login;
pub mod onboarding;
pub mod production_chart;
pub mod profile;
pub mod statistics;
pub mod status;
pub mod tier_table;

pub use alerts::Alerts;
pub use animated_number::AnimatedNumber;
pub use bottom_nav::{BottomNav, Page};
pub use consumption::Consumption;
pub use dashboard::Dashboard;
pub use login::Login;
pub use onboarding::Onboarding;
pub use profile::Profile;
pub use statistics::Statistics;
