pub mod directions;
pub mod geo;
pub mod locator;

pub use crate::domain::model::{
    Coordinates, DirectionsOutcome, PositionFix, PositionRequest, ServiceCenter, ServiceDirectory,
};
pub use crate::domain::ports::{NavigationHost, PositionProvider};
pub use crate::utils::error::Result;
