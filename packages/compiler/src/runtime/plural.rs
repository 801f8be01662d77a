//! Plural Selection
//!
//! Fixed cardinal table keyed by the number of cases:
//!
//! | cases | index                                  |
//! |-------|----------------------------------------|
//! | 1     | 0                                      |
//! | 2     | 0 when `count == 1`, else 1            |
//! | 3     | `count` clamped to `[0, 2]` (zero/one/many) |
//! | other | 0                                      |

/// Index of the case to use for `count` among `len` cases.
pub fn select_index(len: usize, count: i64) -> usize {
    match len {
        2 => usize::from(count != 1),
        3 => count.clamp(0, 2) as usize,
        _ => 0,
    }
}

/// Pick the case for `count`. `None` only for an empty group.
pub fn select<T>(variants: &[T], count: i64) -> Option<&T> {
    variants.get(select_index(variants.len(), count))
}
