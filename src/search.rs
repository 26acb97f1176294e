// 🔍 Search Filters - the operator's current constraints
// One value object, one transition rule, enforced in one place.

use serde::{Deserialize, Serialize};

// ============================================================================
// FILTER STATE
// ============================================================================

/// Which filter control a change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Phone,
    Union,
    Village,
}

/// The operator's current search constraints. Empty string = no constraint.
///
/// Created all-empty at session start, owned by the view, mutated only
/// through [`SearchFilters::apply_change`]. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text phone query; compared digit-to-digit by the match engine.
    pub phone: String,

    /// Selected union, or empty for all unions.
    pub union_name: String,

    /// Selected village, or empty for all villages. Logically scoped to
    /// `union_name`: a union change always clears it.
    pub village: String,
}

impl SearchFilters {
    /// Pure transition: returns a copy with `field` replaced by `value`.
    ///
    /// Changing the union (including to empty) also clears the village -
    /// a village from a previously selected union must never survive the
    /// transition. This is the one coupling rule in the model and it lives
    /// here so no call site can forget it.
    pub fn apply_change(&self, field: FilterField, value: &str) -> SearchFilters {
        let mut next = self.clone();
        match field {
            FilterField::Phone => next.phone = value.to_string(),
            FilterField::Union => {
                next.union_name = value.to_string();
                next.village = String::new();
            }
            FilterField::Village => next.village = value.to_string(),
        }
        next
    }

    /// All-empty state, in one step. Invoked from both the clear-filters
    /// affordance and the empty-results recovery action.
    pub fn reset() -> SearchFilters {
        SearchFilters::default()
    }

    /// True when any constraint is set (drives the clear-filters affordance).
    pub fn is_active(&self) -> bool {
        !self.phone.is_empty() || !self.union_name.is_empty() || !self.village.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
