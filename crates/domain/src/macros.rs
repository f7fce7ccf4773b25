//! Macro for implementing Display and FromStr for wire-format enums
//!
//! Enums that cross the HTTP boundary as plain strings (event kinds, host
//! event kinds) share one mapping between variant and wire name. Parsing is
//! case-insensitive; display always emits the canonical wire name.
//!
//! # Example
//!
//! ```rust
//! use ranksync_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Grant,
//!     Revoke,
//! }
//!
//! impl_wire_enum_conversions!(Direction {
//!     Grant => "GRANT",
//!     Revoke => "REVOKE",
//! });
//!
//! assert_eq!(Direction::Grant.to_string(), "GRANT");
//! assert_eq!("revoke".parse::<Direction>(), Ok(Direction::Revoke));
//! ```

/// Implements Display and FromStr traits for wire-format enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire names
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
