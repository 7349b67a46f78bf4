use crate::domain::model::{PositionFix, PositionRequest};
use crate::utils::error::{PositionError, Result};
use async_trait::async_trait;

/// Host positioning capability. One outstanding request at a time; the
/// implementation decides what the accuracy/timeout/max-age preferences mean
/// for its transport.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> std::result::Result<PositionFix, PositionError>;
}

/// Host navigation capability: open a URL in a new browsing context, replace
/// the current one, and identify the platform for deep-link scheme selection.
pub trait NavigationHost: Send + Sync {
    fn open_new_context(&self, url: &str) -> Result<()>;
    fn redirect(&self, url: &str) -> Result<()>;
    /// User-agent-equivalent string, e.g. an OS family name.
    fn platform(&self) -> String;
}
