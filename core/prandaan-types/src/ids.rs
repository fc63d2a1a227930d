//! Identifier types for registered records.
//!
//! Identifiers are assigned sequentially starting at 1, in registration
//! order (or pair-generation order for matches).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The first identifier handed out.
            pub const FIRST: Self = Self(1);

            /// Creates an identifier from a raw value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Identifier for the record at zero-based `position`.
            #[must_use]
            pub const fn from_position(position: usize) -> Self {
                Self(position as u64 + 1)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// Returns the identifier following this one.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

sequential_id!(
    /// Identifier of a registered donor.
    DonorId
);

sequential_id!(
    /// Identifier of a registered recipient.
    RecipientId
);

sequential_id!(
    /// Identifier of a computed match. Only stable within one rebuild.
    MatchId
);
