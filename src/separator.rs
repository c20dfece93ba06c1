//! Punctuation between consecutive list items.

pub const NONE: &str = "";
pub const COMMA: &str = ", ";
pub const AND: &str = " and ";

/// Separator that follows the item at `index` in a list of `total` items.
///
/// Every item but the last two is followed by a comma, the second-to-last by
/// "and", the last by nothing. A list of N items therefore gets N-1
/// non-empty separators.
///
/// `index` must be below `total`; anything else is a caller bug and trips a
/// debug assertion (release builds return the empty separator).
pub fn separator_at(index: usize, total: usize) -> &'static str {
    debug_assert!(
        index < total,
        "separator index {} out of range for list of {}",
        index,
        total
    );
    if total <= 1 || index >= total {
        return NONE;
    }
    if index < total - 2 {
        COMMA
    } else if index == total - 2 {
        AND
    } else {
        NONE
    }
}
