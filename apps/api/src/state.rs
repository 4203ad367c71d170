use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Generation provider. `LlmClient` in production, a stub in tests.
    pub generator: Arc<dyn TextGenerator>,
}
