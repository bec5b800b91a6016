//! Lead submission service

use std::sync::Arc;

use rhai_domain::{LeadReceipt, LeadSubmission, Result};
use tracing::{info, instrument, warn};

use super::ports::LeadRepository;

/// Validates contact form submissions and stores them
pub struct LeadService {
    repository: Arc<dyn LeadRepository>,
}

impl LeadService {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    /// Validate and persist a submission.
    ///
    /// Honeypot hits are acknowledged as [`LeadReceipt::Discarded`] without
    /// touching the store.
    ///
    /// # Errors
    /// `InvalidInput` for missing or unknown fields; store errors pass
    /// through unchanged.
    #[instrument(skip_all)]
    pub async fn submit(&self, submission: &LeadSubmission) -> Result<LeadReceipt> {
        if submission.is_honeypot_hit() {
            info!("Honeypot field filled; discarding submission");
            return Ok(LeadReceipt::Discarded);
        }

        let lead = submission.validate()?;
        let id = self.repository.insert_lead(&lead).await.map_err(|err| {
            warn!(error = %err, destination = %lead.destination, "Failed to store lead");
            err
        })?;

        info!(%id, destination = %lead.destination, "Lead stored");
        Ok(LeadReceipt::Stored { id })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rhai_domain::{DestinationId, NewLead, RhaiError};

    use super::*;

    #[derive(Default)]
    struct RecordingRepository {
        leads: Mutex<Vec<NewLead>>,
        fail: bool,
    }

    #[async_trait]
    impl LeadRepository for RecordingRepository {
        async fn insert_lead(&self, lead: &NewLead) -> Result<String> {
            if self.fail {
                return Err(RhaiError::Storage("insert failed".into()));
            }
            let mut leads = self.leads.lock().unwrap();
            leads.push(lead.clone());
            Ok(format!("lead-{}", leads.len()))
        }
    }

    fn submission() -> LeadSubmission {
        LeadSubmission {
            name: Some("Ana".into()),
            email: Some("ana@example.com".into()),
            destination: Some("europa".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stores_valid_submission() {
        let repo = Arc::new(RecordingRepository::default());
        let service = LeadService::new(repo.clone());

        let receipt = service.submit(&submission()).await.unwrap();

        assert_eq!(receipt, LeadReceipt::Stored { id: "lead-1".into() });
        let leads = repo.leads.lock().unwrap();
        assert_eq!(leads[0].destination, DestinationId::Europa);
    }

    #[tokio::test]
    async fn honeypot_is_acknowledged_but_not_stored() {
        let repo = Arc::new(RecordingRepository::default());
        let service = LeadService::new(repo.clone());
        let bot = LeadSubmission { company: Some("Spam Inc".into()), ..submission() };

        assert_eq!(service.submit(&bot).await.unwrap(), LeadReceipt::Discarded);
        assert!(repo.leads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_store() {
        let repo = Arc::new(RecordingRepository::default());
        let service = LeadService::new(repo.clone());
        let missing = LeadSubmission { email: None, ..submission() };

        let err = service.submit(&missing).await.unwrap_err();
        assert!(matches!(err, RhaiError::InvalidInput(_)));
        assert!(repo.leads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let repo = Arc::new(RecordingRepository { fail: true, ..Default::default() });
        let service = LeadService::new(repo);

        let err = service.submit(&submission()).await.unwrap_err();
        assert!(matches!(err, RhaiError::Storage(_)));
    }
}
