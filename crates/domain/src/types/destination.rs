//! Destination catalog
//!
//! The four supported migration destinations. The catalog is fixed for the
//! life of the process and its declared order is the order every search
//! result is returned in.

use serde::{Deserialize, Serialize};

use crate::constants::DESTINATION_PATH_PREFIX;
use crate::impl_slug_conversions;

/// Identifier of a catalog destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationId {
    Usa,
    Canada,
    Europa,
    Otros,
}

impl_slug_conversions!(DestinationId {
    Usa => "usa",
    Canada => "canada",
    Europa => "europa",
    Otros => "otros",
});

impl DestinationId {
    /// All ids in catalog order.
    pub const ALL: [Self; 4] = [Self::Usa, Self::Canada, Self::Europa, Self::Otros];

    /// Catalog entry for this id.
    pub fn destination(self) -> &'static Destination {
        // CATALOG is declared in the same order as ALL
        &CATALOG[self as usize]
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub id: DestinationId,
    pub label: &'static str,
    pub emoji: &'static str,
    pub blurb: &'static str,
    /// Alternate tokens that also resolve to this entry ("eeuu" → usa).
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

impl Destination {
    /// Landing page path, e.g. `/destino/canada`.
    pub fn path(&self) -> String {
        format!("{DESTINATION_PATH_PREFIX}{}", self.id)
    }
}

/// The fixed destination catalog, in display order.
pub static CATALOG: [Destination; 4] = [
    Destination {
        id: DestinationId::Usa,
        label: "Estados Unidos",
        emoji: "🇺🇸",
        blurb: "Opciones para trabajo, estudio, familia y residencia en EE. UU.",
        aliases: &["usa", "estados unidos", "eeuu", "ee.uu", "u.s.a", "us"],
    },
    Destination {
        id: DestinationId::Canada,
        label: "Canadá",
        emoji: "🇨🇦",
        blurb: "Programas de estudio, trabajo calificado y residencia permanente.",
        aliases: &["canada", "canadá", "ca"],
    },
    Destination {
        id: DestinationId::Europa,
        label: "Europa",
        emoji: "🇪🇺",
        blurb: "Rutas para la Unión Europea: estudio, empleo y reagrupación.",
        aliases: &["europa", "europe", "ue", "union europea", "unión europea"],
    },
    Destination {
        id: DestinationId::Otros,
        label: "Otros países",
        emoji: "🌎",
        blurb: "Explora alternativas en LATAM, Asia y Oceanía.",
        aliases: &[
            "otros",
            "otros paises",
            "otros países",
            "resto",
            "latam",
            "sudamerica",
            "sudamérica",
            "otra",
        ],
    },
];

/// The fixed destination catalog.
pub fn catalog() -> &'static [Destination] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn catalog_order_matches_ids() {
        for (entry, id) in CATALOG.iter().zip(DestinationId::ALL) {
            assert_eq!(entry.id, id);
            assert_eq!(id.destination().id, id);
        }
    }

    #[test]
    fn ids_round_trip_through_slugs() {
        assert_eq!(DestinationId::from_str("Canada").unwrap(), DestinationId::Canada);
        assert_eq!(DestinationId::Europa.to_string(), "europa");
        assert!(DestinationId::from_str("mexico").is_err());
    }

    #[test]
    fn serde_uses_lowercase_slugs() {
        let json = serde_json::to_string(&DestinationId::Otros).unwrap();
        assert_eq!(json, "\"otros\"");
        let parsed: DestinationId = serde_json::from_str("\"usa\"").unwrap();
        assert_eq!(parsed, DestinationId::Usa);
    }

    #[test]
    fn landing_paths() {
        assert_eq!(DestinationId::Usa.destination().path(), "/destino/usa");
        assert_eq!(DestinationId::Otros.destination().path(), "/destino/otros");
    }

    #[test]
    fn serialized_entry_omits_aliases() {
        let json = serde_json::to_value(DestinationId::Canada.destination()).unwrap();
        assert_eq!(json["label"], "Canadá");
        assert!(json.get("aliases").is_none());
    }
}
