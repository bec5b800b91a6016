//! Macro for implementing Display and FromStr for slug-backed enums
//!
//! Destination ids travel as lowercase slugs in URLs, JSON bodies and store
//! rows. This macro keeps one mapping for both directions.
//!
//! # Example
//!
//! ```rust
//! use rhai_domain::impl_slug_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Region {
//!     North,
//!     South,
//! }
//!
//! impl_slug_conversions!(Region {
//!     North => "north",
//!     South => "south",
//! });
//!
//! assert_eq!(Region::North.to_string(), "north");
//! assert_eq!("SOUTH".parse::<Region>().unwrap(), Region::South);
//! ```

/// Implements `as_slug`, Display and FromStr for slug-backed enums
///
/// Parsing trims surrounding whitespace and ignores case.
#[macro_export]
macro_rules! impl_slug_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Lowercase slug for this variant.
            pub const fn as_slug(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_slug())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
