//! Postal code lookup.
//!
//! A postal code that becomes valid triggers a request to the postcode
//! details service; the first city and state it returns are used to fill the
//! form. Lookups are best-effort: every failure is logged and otherwise
//! ignored.
//!
//! - **client**: the [`PostcodeResolver`] seam and its HTTP implementation
//! - **autofill**: keyed, cancellable lookups that never apply a stale result

mod autofill;
mod client;

pub use autofill::{AutofillResult, PostalAutofill};
pub use client::{
    HttpPostcodeResolver, NamedPlace, PostcodeResolver, PostcodeResponse, DEFAULT_LOOKUP_ENDPOINT,
    DEFAULT_LOOKUP_TIMEOUT,
};

use serde::{Deserialize, Serialize};

/// City and state resolved for a postal code.
///
/// Either part may be missing when the service returned an empty list for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Locality {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.state.is_none()
    }
}
