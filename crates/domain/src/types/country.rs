//! Country sub-catalog of the "Otros países" destination

use serde::Serialize;

use super::destination::DestinationId;

/// A country featured on a destination landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, lowercase.
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub pitch: &'static str,
}

const fn country(
    id: &'static str,
    name: &'static str,
    emoji: &'static str,
    pitch: &'static str,
) -> Country {
    Country { id, name, emoji, pitch }
}

static LATAM_COUNTRIES: [Country; 10] = [
    country(
        "mx",
        "México",
        "🇲🇽",
        "Estudio, trabajo, emprendimiento y residencia temporal/permanente.",
    ),
    country(
        "co",
        "Colombia",
        "🇨🇴",
        "Visa de estudiante, trabajo cualificado y opciones de residencia.",
    ),
    country("ar", "Argentina", "🇦🇷", "Estudios superiores, trabajo y residencia temporaria."),
    country("cl", "Chile", "🇨🇱", "Visas de trabajo, profesional y reunificación familiar."),
    country("pe", "Perú", "🇵🇪", "Opciones de estudio, trabajo y residencia por vínculo."),
    country("br", "Brasil", "🇧🇷", "Trabajo cualificado, emprendimiento y residencia."),
    country("cr", "Costa Rica", "🇨🇷", "Programas de nómadas digitales y opciones laborales."),
    country("pa", "Panamá", "🇵🇦", "Residencia por inversión, trabajo y categorías especiales."),
    country("do", "Rep. Dominicana", "🇩🇴", "Opciones de residencia y reunificación familiar."),
    country("uy", "Uruguay", "🇺🇾", "Residencia, trabajo calificado y estabilidad."),
];

/// Countries featured on a destination's landing page, in display order.
///
/// Only "Otros países" has a sub-catalog; the other destinations are a
/// single country or region.
pub fn countries(destination: DestinationId) -> &'static [Country] {
    match destination {
        DestinationId::Otros => &LATAM_COUNTRIES,
        DestinationId::Usa | DestinationId::Canada | DestinationId::Europa => &[],
    }
}
