//! Lead capture - contact form submissions from destination pages

pub mod ports;
pub mod service;

pub use service::LeadService;
