//! Lead (appointment request) types

use serde::{Deserialize, Serialize};

use super::destination::DestinationId;
use crate::errors::{Result, RhaiError};
use crate::utils::text::non_blank;

/// Raw contact form submission as posted by a destination page.
///
/// Every field is optional on the wire; [`LeadSubmission::validate`] decides
/// what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub destination: Option<String>,
    /// Honeypot. Hidden on the form, so only bots fill it in.
    pub company: Option<String>,
}

impl LeadSubmission {
    /// True when the honeypot field carries anything but whitespace.
    pub fn is_honeypot_hit(&self) -> bool {
        non_blank(self.company.as_deref()).is_some()
    }

    /// Check required fields and produce a trimmed lead.
    ///
    /// # Errors
    /// `RhaiError::InvalidInput` when `name`, `email` or `destination` is
    /// blank, or when `destination` is not a catalog id.
    pub fn validate(&self) -> Result<NewLead> {
        let name = non_blank(self.name.as_deref());
        let email = non_blank(self.email.as_deref());
        let destination = non_blank(self.destination.as_deref());

        let (Some(name), Some(email), Some(destination)) = (name, email, destination) else {
            return Err(RhaiError::InvalidInput(
                "Faltan campos obligatorios (name, email, destination)".to_string(),
            ));
        };

        let destination = destination
            .parse::<DestinationId>()
            .map_err(|_| RhaiError::InvalidInput(format!("Destino desconocido: {destination}")))?;

        Ok(NewLead {
            name,
            email,
            phone: non_blank(self.phone.as_deref()),
            message: non_blank(self.message.as_deref()),
            destination,
        })
    }
}

/// A validated lead ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub destination: DestinationId,
}

/// Row shape written to the appointments table.
///
/// `status` is left to the store default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub message: Option<&'a str>,
    pub destination: DestinationId,
    pub preferred_date: Option<&'a str>,
}

impl<'a> From<&'a NewLead> for LeadRecord<'a> {
    fn from(lead: &'a NewLead) -> Self {
        Self {
            name: &lead.name,
            email: &lead.email,
            phone: lead.phone.as_deref(),
            message: lead.message.as_deref(),
            destination: lead.destination,
            preferred_date: None,
        }
    }
}

/// Outcome of a lead submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadReceipt {
    /// Persisted; carries the store generated id.
    Stored { id: String },
    /// Honeypot hit: acknowledged to the caller but never persisted.
    Discarded,
}
