use std::sync::Arc;

use juniper::Context as JuniperContext;

pub type AppState = Arc<AppData>;

/// Per-request execution context. The service is stateless, so there is
/// nothing to carry beyond the context marker juniper requires.
#[derive(Clone, Default)]
pub struct AppData;

impl JuniperContext for AppData {}

impl AppData {
    pub fn new() -> Self {
        Self
    }
}
