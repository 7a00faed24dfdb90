use std::sync::Arc;

use taskflow_domain::TaskBoard;

/// Base URL advertised in the API description when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

// =============================================================================
// AppState
// =============================================================================

/// Shared handler state. Cloning is cheap; every clone points at the same
/// board.
#[derive(Debug, Clone)]
pub struct AppState {
    pub board: Arc<TaskBoard>,

    pub server_url: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(board: TaskBoard) -> Self {
        Self::from_arc(Arc::new(board))
    }

    #[must_use]
    pub fn from_arc(board: Arc<TaskBoard>) -> Self {
        Self {
            board,
            server_url: Arc::from(DEFAULT_SERVER_URL),
        }
    }

    #[must_use]
    pub fn with_server_url(mut self, server_url: impl AsRef<str>) -> Self {
        self.server_url = Arc::from(server_url.as_ref());
        self
    }
}
