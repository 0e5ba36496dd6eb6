//! Catalog search hit and pick snapshot models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One hit from a mutual fund catalog search.
///
/// An empty `Vec<FundMatch>` is a valid "no matches" result, distinct
/// from a search that is still running.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundMatch {
    /// Full scheme name shown in the dropdown (e.g., "SBI Gold Fund - Direct - Growth")
    pub display_name: String,

    /// Catalog scheme code used by the backend
    pub code: String,

    /// Plan the scheme belongs to (e.g., "direct", "regular")
    pub plan: String,

    /// Scheme type (e.g., "growth", "dividend")
    pub scheme_type: String,

    /// Latest reference price (NAV) for the scheme
    pub reference_price: Decimal,
}

impl FundMatch {
    /// Create a new fund match with all fields.
    pub fn new(
        display_name: impl Into<String>,
        code: impl Into<String>,
        plan: impl Into<String>,
        scheme_type: impl Into<String>,
        reference_price: Decimal,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
            plan: plan.into(),
            scheme_type: scheme_type.into(),
            reference_price,
        }
    }
}

/// Snapshot taken when the user picks a result from the dropdown.
///
/// Picking is a terminal action for the search session; only these
/// identifying fields flow into the owning form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundSelection {
    pub code: String,
    pub display_name: String,
    pub reference_price: Decimal,
}
