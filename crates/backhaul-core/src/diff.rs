//! Incremental diff between a local and a remote listing.
//!
//! Both inputs are ascending-sorted filename listings. The incremental
//! set is every remote name strictly greater than the greatest local
//! name; with no local files at all, the entire remote listing is new
//! (first run, or a wiped target directory).

use crate::ordering;

/// Compute the remote filenames not yet mirrored locally.
///
/// Preserves the ascending order of `remote`. Inputs are trusted to be
/// sorted; the listers sort before handing their results here.
pub fn incremental(local: &[String], remote: &[String]) -> Vec<String> {
    let Some(boundary) = ordering::boundary(local) else {
        return remote.to_vec();
    };

    remote
        .iter()
        .filter(|name| name.as_str() > boundary)
        .cloned()
        .collect()
}
