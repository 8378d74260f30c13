//! Strongly-typed ID wrappers for stored entities
//!
//! Ids are small positive integers assigned by the owning repository.
//! Newtypes keep category ids and transaction ids from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u32 {
                self.0
            }

            /// The id following this one, stuck at `u32::MAX`
            pub const fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }

            /// Check if a record may carry this id: nonzero, and not the
            /// last value so a successor always exists
            pub const fn is_assignable(&self) -> bool {
                self.0 != 0 && self.0 != u32::MAX
            }

            /// Id assigned to the next record: one past the largest existing
            /// id, or 1 for an empty collection
            pub fn next_after<I>(existing: I) -> Self
            where
                I: IntoIterator<Item = Self>,
            {
                existing
                    .into_iter()
                    .max()
                    .map(|max| max.next())
                    .unwrap_or(Self(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(TransactionId);
define_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_empty() {
        assert_eq!(CategoryId::next_after(Vec::new()), CategoryId::new(1));
    }

    #[test]
    fn test_next_after_uses_max_not_last() {
        let ids = vec![
            TransactionId::new(4),
            TransactionId::new(9),
            TransactionId::new(2),
        ];
        assert_eq!(TransactionId::next_after(ids), TransactionId::new(10));
    }

    #[test]
    fn test_next_never_overflows() {
        let last = TransactionId::new(u32::MAX);
        assert_eq!(last.next(), last);
        assert!(!last.is_assignable());
        assert!(!CategoryId::new(0).is_assignable());
        assert!(CategoryId::new(7).is_assignable());
    }

    #[test]
    fn test_parse_and_display() {
        let id: CategoryId = " 12 ".parse().unwrap();
        assert_eq!(id.value(), 12);
        assert_eq!(id.to_string(), "12");
        assert!("abc".parse::<CategoryId>().is_err());
        assert!("-1".parse::<CategoryId>().is_err());
    }
}
