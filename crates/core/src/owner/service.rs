//! Owner notification service
//!
//! Formats search, typing and payment events into messages for the site
//! owner and hands them to the messaging channel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rhai_domain::{ConfirmedPayment, Delivery, Result, RhaiError, SearchAlert, TypingNotice};
use tracing::{error, info, instrument, warn};

use super::ports::{OwnerMessage, OwnerMessenger};

/// Reason reported when messaging credentials are absent.
pub const MESSAGING_NOT_CONFIGURED: &str = "No Telegram env set";

const EMPTY_QUERY: &str = "(vacío)";
const UNKNOWN: &str = "N/A";

/// Sends owner notifications through an [`OwnerMessenger`]
pub struct OwnerAlertService {
    messenger: Arc<dyn OwnerMessenger>,
}

impl OwnerAlertService {
    pub fn new(messenger: Arc<dyn OwnerMessenger>) -> Self {
        Self { messenger }
    }

    pub fn is_configured(&self) -> bool {
        self.messenger.is_configured()
    }

    /// Forward a search alert. Missing configuration is not an error.
    #[instrument(skip_all)]
    pub async fn notify_search(&self, alert: &SearchAlert) -> Result<Delivery> {
        let message = OwnerMessage::markdown(search_alert_text(alert, Utc::now()));
        self.deliver_optional(&message, "search alert").await
    }

    /// Forward a typing notice. Unlike the other notices this one requires
    /// messaging to be configured.
    ///
    /// # Errors
    /// `RhaiError::Config` when messaging is not configured.
    #[instrument(skip_all)]
    pub async fn notify_typing(&self, notice: &TypingNotice) -> Result<()> {
        if !self.is_configured() {
            warn!("Typing notice dropped: messaging is not configured");
            return Err(RhaiError::Config("Missing env vars".to_string()));
        }
        self.deliver(&OwnerMessage::plain(typing_text(notice)), "typing notice").await
    }

    /// Forward a completed payment. Missing configuration is not an error.
    #[instrument(skip_all, fields(destination = %payment.destination))]
    pub async fn notify_payment(&self, payment: &ConfirmedPayment) -> Result<Delivery> {
        let message = OwnerMessage::markdown(payment_text(payment));
        self.deliver_optional(&message, "payment").await
    }

    async fn deliver_optional(&self, message: &OwnerMessage, kind: &str) -> Result<Delivery> {
        if !self.is_configured() {
            warn!(kind, "Messaging is not configured; owner not notified");
            return Ok(Delivery::Skipped { reason: MESSAGING_NOT_CONFIGURED.to_string() });
        }
        self.deliver(message, kind).await?;
        Ok(Delivery::Sent)
    }

    async fn deliver(&self, message: &OwnerMessage, kind: &str) -> Result<()> {
        match self.messenger.send(message).await {
            Ok(()) => {
                info!(kind, "Owner notified");
                Ok(())
            }
            Err(err) => {
                error!(kind, error = %err, error_type = err.label(), "Failed to notify owner");
                Err(err)
            }
        }
    }
}

/// Markdown text for a search alert; `now` stands in for a missing timestamp.
pub fn search_alert_text(alert: &SearchAlert, now: DateTime<Utc>) -> String {
    let query = non_empty(&alert.q).map_or_else(|| EMPTY_QUERY.to_string(), escape_markdown);
    let url = non_empty(&alert.url).map_or_else(|| "-".to_string(), escape_markdown);
    let at = alert.ts.and_then(DateTime::<Utc>::from_timestamp_millis).unwrap_or(now);

    format!(
        "🔔 *Búsqueda en vivo*\n\n• Consulta: {query}\n• URL: {url}\n• Hora: {}",
        format_time(at)
    )
}

/// Plain text for a typing notice.
pub fn typing_text(notice: &TypingNotice) -> String {
    let query = notice.query.as_deref().and_then(non_empty).unwrap_or(EMPTY_QUERY);
    let ip = non_empty(&notice.ip).unwrap_or(UNKNOWN);
    let user_agent = non_empty(&notice.user_agent).unwrap_or(UNKNOWN);

    [
        "🟢 Nuevo usuario está buscando en RHAI".to_string(),
        format!("🔎 Término: {query}"),
        format!("🌐 IP: {ip}"),
        format!("🧭 UA: {user_agent}"),
    ]
    .join("\n")
}

/// Markdown text for a completed payment.
pub fn payment_text(payment: &ConfirmedPayment) -> String {
    let destination = payment.destination.destination();
    let service = payment.option.map_or("Monto libre", |option| option.name);

    let mut lines = vec![
        "💳 *Pago recibido*".to_string(),
        String::new(),
        format!("• Destino: {} {}", destination.emoji, destination.label),
        format!("• Servicio: {service}"),
        format!("• Monto: USD {}", payment.amount),
        format!("• Cliente: {}", escape_markdown(&payment.payer_name)),
    ];
    if let Some(capture_id) = &payment.capture_id {
        lines.push(format!("• Captura: {}", escape_markdown(capture_id)));
    }
    if let Some(status) = &payment.status {
        lines.push(format!("• Estado: {}", escape_markdown(status)));
    }
    lines.join("\n")
}

/// Escape the entity markers of Telegram's legacy Markdown so visitor text
/// can't open an unbalanced entity. Escapes only hold outside entities, so
/// escaped values are never wrapped in one.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn format_time(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M:%S UTC").to_string()
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
