// Adapters layer: concrete implementations of the domain ports against real
// external systems (HTTP positioning endpoint, OS URL opener).

pub mod navigation;
pub mod position;

pub use navigation::SystemNavigator;
pub use position::{FixedPositionProvider, HttpPositionProvider};
