//! Donor and recipient registry for Prandaan Connect.
//!
//! [`Registry`] is the single store of registered donors and recipients.
//! Every successful registration rebuilds the full match set, so the
//! matches returned by [`Registry::matches`] are always consistent with the
//! current lists.

mod error;
mod payload;
mod registry;

pub use error::{RegistryError, RegistryResult, ValidationError};
pub use payload::{NewDonor, NewRecipient};
pub use registry::{Registry, SharedRegistry, Stats};
