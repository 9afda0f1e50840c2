use std::sync::Arc;

use casetrack_config::CasetrackConfig;
use casetrack_core::documents::absolute_document_url;
use casetrack_core::enums::UpdatePolicy;
use casetrack_db::service::CaseService;

/// Shared handler state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CaseService>,
    pub document_base_url: Arc<str>,
    pub update_policy: UpdatePolicy,
}

impl AppState {
    #[must_use]
    pub fn new(
        service: CaseService,
        document_base_url: impl Into<Arc<str>>,
        update_policy: UpdatePolicy,
    ) -> Self {
        Self {
            service: Arc::new(service),
            document_base_url: document_base_url.into(),
            update_policy,
        }
    }

    #[must_use]
    pub fn from_config(service: CaseService, config: &CasetrackConfig) -> Self {
        Self::new(
            service,
            config.files.base_url.as_str(),
            config.general.update_policy,
        )
    }

    /// Absolute URL for a stored document path.
    #[must_use]
    pub fn document_url(&self, document: &str) -> String {
        absolute_document_url(&self.document_base_url, document)
    }
}
