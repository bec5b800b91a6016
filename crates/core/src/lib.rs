//! # RHAI Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The destination matcher behind the search box
//! - The engagement notifier (search alarm and proactive prompt)
//! - Lead submission and owner notification services
//! - Port interfaces (traits) implemented by `rhai-infra`
//!
//! ## Architecture Principles
//! - Only depends on `rhai-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod engagement;
pub mod leads;
pub mod owner;
pub mod search;

pub use engagement::ports::{AlertSink, ChatWidget, PromptPresenter};
pub use engagement::{
    BrowsingSession, EngagementNotifier, FallbackBanner, PageContext, PollState, PromptAction,
    WidgetPoller,
};
pub use leads::ports::LeadRepository;
pub use leads::LeadService;
pub use owner::ports::{OwnerMessage, OwnerMessenger};
pub use owner::OwnerAlertService;
pub use search::{first_match_route, match_destinations, result_count_label, DestinationMatcher};
