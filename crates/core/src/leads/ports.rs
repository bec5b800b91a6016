//! Port interfaces for lead storage

use async_trait::async_trait;
use rhai_domain::{NewLead, Result};

/// Trait for persisting validated leads
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Insert a lead and return the store generated id
    async fn insert_lead(&self, lead: &NewLead) -> Result<String>;
}
