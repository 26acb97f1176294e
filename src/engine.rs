// ⚙️ Match Engine - the three-predicate roster filter
// A stable linear scan: total over any well-formed input, recomputed from
// scratch on every filter change.

use crate::options::normalize_village;
use crate::search::SearchFilters;
use crate::store::Beneficiary;

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Strip everything that is not an ASCII digit. Phone search compares
/// digit strings on both sides, so "017-00-00000" matches a query of
/// "1700".
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// ============================================================================
// FILTERING
// ============================================================================

/// Records matching every active constraint, in roster order.
///
/// Predicates (an empty filter field always passes):
/// - phone: digit-normalized substring containment
/// - union: exact, case-sensitive equality
/// - village: exact equality on normalized names. The option deriver
///   publishes normalized villages, so both sides are normalized here;
///   that keeps every derived option reachable and absorbs the trailing
///   punctuation drift in village columns.
///
/// All-empty filters return the roster unchanged.
pub fn filter_records(records: &[Beneficiary], filters: &SearchFilters) -> Vec<Beneficiary> {
    let query_digits = digits(&filters.phone);
    let wanted_village = normalize_village(&filters.village);

    records
        .iter()
        .filter(|b| {
            let match_phone =
                query_digits.is_empty() || digits(&b.phone).contains(&query_digits);
            let match_union =
                filters.union_name.is_empty() || b.union_name == filters.union_name;
            let match_village =
                wanted_village.is_empty() || normalize_village(&b.village) == wanted_village;
            match_phone && match_union && match_village
        })
        .cloned()
        .collect()
}

// ============================================================================
// STATISTICS
// ============================================================================

/// Counts for the statistics row above the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Total applicants in the roster.
    pub total: usize,
    /// Records matching the current filters.
    pub matched: usize,
    /// Distinct unions currently offered by the union selector.
    pub unions: usize,
    /// Distinct villages currently offered by the village selector.
    pub villages: usize,
}

impl DirectoryStats {
    pub fn compute(
        records: &[Beneficiary],
        matched: &[Beneficiary],
        unions: &[String],
        villages: &[String],
    ) -> Self {
        DirectoryStats {
            total: records.len(),
            matched: matched.len(),
            unions: unions.len(),
            villages: villages.len(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
