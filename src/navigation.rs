/// Kalman filter over the range to the wall ahead.
pub mod filter;
pub use filter::{average_distance, RangeBelief, RangeFilter};

/// Navigator driving a robot through the find-the-desk mission.
pub mod navigator;
pub use navigator::{Leg, NavigationError, Navigator, NavigatorProp};
