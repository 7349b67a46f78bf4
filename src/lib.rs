pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FixedPositionProvider, HttpPositionProvider, SystemNavigator};
pub use crate::core::directions::{
    build_directions_request, dispatch, open_directions, DirectionsRequest,
};
pub use crate::core::geo::haversine_miles;
pub use crate::core::locator::{select_center, ServiceLocator};
pub use domain::model::{
    Coordinates, DirectionsOutcome, PositionFix, PositionRequest, ServiceCenter, ServiceDirectory,
    GENERAL_MAINTENANCE,
};
pub use domain::ports::{NavigationHost, PositionProvider};
pub use utils::error::{LocatorError, PositionError, Result};
