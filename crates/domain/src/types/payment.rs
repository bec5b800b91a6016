//! One-time payment types
//!
//! Each landing page offers a short list of priced services plus an
//! open-amount donation. The payment itself is captured by the provider's
//! button; the server only learns about completed captures so it can tell
//! the owner.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::destination::DestinationId;
use crate::errors::{Result, RhaiError};
use crate::utils::text::non_blank;

/// Same shape the custom-amount input accepts while typing.
static AMOUNT_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\d*\.?\d{0,2}$").ok());

const DEFAULT_PAYER_NAME: &str = "Cliente";

/// Positive monetary amount with cent precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }
}

impl FromStr for Amount {
    type Err = RhaiError;

    fn from_str(raw: &str) -> Result<Self> {
        let value = raw.trim();
        let invalid = || RhaiError::InvalidInput(format!("Monto inválido: {raw}"));

        let well_formed = AMOUNT_PATTERN.as_ref().is_some_and(|re| re.is_match(value));
        if !well_formed || value.is_empty() || value == "." {
            return Err(invalid());
        }

        let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
        let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents =
            whole.checked_mul(100).and_then(|c| c.checked_add(fraction)).ok_or_else(invalid)?;
        if cents == 0 {
            return Err(RhaiError::InvalidInput("El monto debe ser mayor que cero".to_string()));
        }

        Ok(Self { cents })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// A purchasable service on a landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOption {
    pub id: &'static str,
    pub name: &'static str,
    /// Fixed price; `None` for the open-amount donation.
    pub price: Option<&'static str>,
}

const fn option(id: &'static str, name: &'static str, price: &'static str) -> PaymentOption {
    PaymentOption { id, name, price: Some(price) }
}

const FIXED_DONATION: PaymentOption = option("donacion_fija", "Donación Fija", "10.00");
const OPEN_DONATION: PaymentOption =
    PaymentOption { id: "monto_abierto", name: "Donación (Monto Abierto)", price: None };

static USA_OPTIONS: [PaymentOption; 4] = [
    option("consulta", "Consulta Migratoria (EE. UU.)", "25.00"),
    option("evaluacion_trabajo", "Pre-chequeo Ruta Trabajo (H-1B/TN)", "100.00"),
    FIXED_DONATION,
    OPEN_DONATION,
];

static CANADA_OPTIONS: [PaymentOption; 4] = [
    option("consulta", "Consulta Migratoria (Canadá)", "25.00"),
    option("express_entry", "Pre-chequeo Express Entry", "90.00"),
    FIXED_DONATION,
    OPEN_DONATION,
];

static EUROPA_OPTIONS: [PaymentOption; 4] = [
    option("consulta", "Consulta Migratoria (Europa)", "25.00"),
    option("estudio_eu", "Pre-chequeo Ruta de Estudio UE", "90.00"),
    FIXED_DONATION,
    OPEN_DONATION,
];

static OTROS_OPTIONS: [PaymentOption; 4] = [
    option("consulta", "Consulta Migratoria (Otros países)", "25.00"),
    option("evaluacion", "Pre-chequeo de perfil", "70.00"),
    FIXED_DONATION,
    OPEN_DONATION,
];

/// Services offered on a destination's landing page, in display order.
pub fn payment_options(destination: DestinationId) -> &'static [PaymentOption] {
    match destination {
        DestinationId::Usa => &USA_OPTIONS,
        DestinationId::Canada => &CANADA_OPTIONS,
        DestinationId::Europa => &EUROPA_OPTIONS,
        DestinationId::Otros => &OTROS_OPTIONS,
    }
}

/// Completed capture reported by the payment button callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfirmation {
    pub destination: Option<String>,
    pub option: Option<String>,
    pub amount: Option<String>,
    pub payer_name: Option<String>,
    pub capture_id: Option<String>,
    pub status: Option<String>,
}

/// A payment confirmation that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedPayment {
    pub destination: DestinationId,
    pub option: Option<&'static PaymentOption>,
    pub amount: Amount,
    pub payer_name: String,
    pub capture_id: Option<String>,
    pub status: Option<String>,
}

impl PaymentConfirmation {
    /// Validate destination, option and amount.
    ///
    /// # Errors
    /// `RhaiError::InvalidInput` for an unknown destination or option, a
    /// malformed or non-positive amount, or an amount that differs from a
    /// fixed-price option.
    pub fn validate(&self) -> Result<ConfirmedPayment> {
        let destination = non_blank(self.destination.as_deref())
            .ok_or_else(|| RhaiError::InvalidInput("Falta el destino".to_string()))?
            .parse::<DestinationId>()
            .map_err(RhaiError::InvalidInput)?;

        let amount: Amount = non_blank(self.amount.as_deref())
            .ok_or_else(|| RhaiError::InvalidInput("Falta el monto".to_string()))?
            .parse()?;

        let option = match non_blank(self.option.as_deref()) {
            None => None,
            Some(id) => Some(
                payment_options(destination)
                    .iter()
                    .find(|o| o.id == id)
                    .ok_or_else(|| RhaiError::InvalidInput(format!("Opción desconocida: {id}")))?,
            ),
        };

        if let Some(price) = option.and_then(|o| o.price) {
            let expected: Amount = price.parse()?;
            if expected != amount {
                return Err(RhaiError::InvalidInput(format!(
                    "El monto {amount} no coincide con el precio {expected}"
                )));
            }
        }

        Ok(ConfirmedPayment {
            destination,
            option,
            amount,
            payer_name: non_blank(self.payer_name.as_deref())
                .unwrap_or_else(|| DEFAULT_PAYER_NAME.to_string()),
            capture_id: non_blank(self.capture_id.as_deref()),
            status: non_blank(self.status.as_deref()),
        })
    }
}
