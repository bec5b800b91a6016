//! Domain types and models

pub mod alert;
pub mod country;
pub mod destination;
pub mod lead;
pub mod payment;

pub use alert::{Delivery, SearchAlert, TypingNotice};
pub use country::{countries, Country};
pub use destination::{catalog, Destination, DestinationId, CATALOG};
pub use lead::{LeadReceipt, LeadRecord, LeadSubmission, NewLead};
pub use payment::{payment_options, Amount, ConfirmedPayment, PaymentConfirmation, PaymentOption};
