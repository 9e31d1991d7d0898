use crate::services::analysis_gateway::AnalysisGateway;
use crate::services::record_store::RecordStore;

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub store: RecordStore,
    pub gateway: AnalysisGateway,
}

impl AppContext {
    pub const fn new(store: RecordStore, gateway: AnalysisGateway) -> Self {
        Self { store, gateway }
    }
}
