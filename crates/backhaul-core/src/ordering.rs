//! Filename ordering.
//!
//! Backhaul's notion of "newer" is lexicographic byte order over the
//! filename, nothing more. A file whose name sorts greater is assumed
//! to have been produced later. That holds only when the remote naming
//! convention is lexicographically monotonic with creation time
//! (`YYYYMMDD` prefixes and the like); it is a precondition of the
//! whole system and is not checked here.

use std::cmp::Ordering;

/// Compare two filenames in mirror order (plain byte comparison,
/// no locale normalization).
pub fn compare(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Sort a listing ascending, oldest name first.
pub fn sort(names: &mut [String]) {
    names.sort_unstable();
}

/// The greatest filename of an ascending-sorted listing, used as the
/// diff boundary. None for an empty listing.
pub fn boundary(names: &[String]) -> Option<&str> {
    names.last().map(String::as_str)
}
