// 🗺️ Option Deriver - selector contents for the filter controls
// Distinct, sorted union and village lists derived from the roster on
// every state change. No caches to invalidate at this data size.

use crate::store::Beneficiary;

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Canonical form of a village name: trimmed, trailing punctuation
/// stripped. Source rows drift on stray dots and commas ("Charpara.",
/// "Charpara ,"), and two rows differing only by that noise must collapse
/// into a single selector option.
pub fn normalize_village(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(&['.', ',', ';', ':'][..])
        .trim_end()
        .to_string()
}

// ============================================================================
// DERIVATION
// ============================================================================

/// Every distinct union appearing in the roster, sorted by natural string
/// order for a deterministic selector. Empty roster yields an empty list.
pub fn unions(records: &[Beneficiary]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|b| b.union_name.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Every distinct village, restricted to `selected_union` when one is set
/// (exact, case-sensitive equality), across the whole roster otherwise.
///
/// Names are normalized before deduplication. A union matching no record
/// yields an empty list - a valid state, not an error.
pub fn villages(records: &[Beneficiary], selected_union: &str) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter(|b| selected_union.is_empty() || b.union_name == selected_union)
        .map(|b| normalize_village(&b.village))
        .filter(|v| !v.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

// ============================================================================
// TESTS
// ============================================================================
