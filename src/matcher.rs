//! Progressive Matcher
//!
//! Decides which scratch files are present in the archive by refining both
//! collections through an ordered list of key functions, cheapest first. At
//! every stage the scratch files whose key no archive file shares are settled
//! as unmatched and never reach the more expensive keys. Only the groups that
//! still agree recurse with the remaining keys, so content hashes are computed
//! only for files that already share a size with some archive file.

use crate::error::ReconcileResult;
use crate::tree::LazyFile;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A comparable attribute extracted from a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchKey {
    Size(u64),
    ContentHash(String),
}

/// Key function: a plain function extracting one [`MatchKey`] from a descriptor.
pub type KeyFn<T> = fn(&T) -> ReconcileResult<MatchKey>;

pub fn size_key(file: &LazyFile) -> ReconcileResult<MatchKey> {
    file.size().map(MatchKey::Size)
}

pub fn content_hash_key(file: &LazyFile) -> ReconcileResult<MatchKey> {
    file.content_hash().map(|hash| MatchKey::ContentHash(hash.to_string()))
}

/// Keys used by a normal reconciliation run: size, then full content hash.
pub const DEFAULT_KEYS: [KeyFn<LazyFile>; 2] = [size_key, content_hash_key];

/// Matching options
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Evaluate the keys of a stage across descriptors in parallel.
    pub parallel: bool,
}

/// Final classification of the scratch side.
///
/// Every scratch input appears in exactly one of the two lists.
#[derive(Debug)]
pub struct MatchOutcome<'a, T> {
    pub matched: Vec<&'a T>,
    pub unmatched: Vec<&'a T>,
}

impl<'a, T> MatchOutcome<'a, T> {
    fn empty() -> Self {
        MatchOutcome {
            matched: Vec::new(),
            unmatched: Vec::new(),
        }
    }

    fn absorb(&mut self, other: MatchOutcome<'a, T>) {
        self.matched.extend(other.matched);
        self.unmatched.extend(other.unmatched);
    }
}

/// Classify every scratch item as matched or unmatched against `archive`.
///
/// A scratch item is matched when some archive item agrees with it on every
/// key in `keys`. Which archive item agreed is not tracked, and archive items
/// are never consumed, so duplicate scratch items can all match one archive
/// item. An empty key list matches everything. The first key error aborts.
pub fn match_by<'a, T: Sync>(
    scratch: &'a [T],
    archive: &'a [T],
    keys: &[KeyFn<T>],
    options: MatchOptions,
) -> ReconcileResult<MatchOutcome<'a, T>> {
    debug!(
        scratch = scratch.len(),
        archive = archive.len(),
        keys = keys.len(),
        "matching"
    );
    refine(
        scratch.iter().collect(),
        archive.iter().collect(),
        keys,
        options,
    )
}

fn refine<'a, T: Sync>(
    scratch: Vec<&'a T>,
    archive: Vec<&'a T>,
    keys: &[KeyFn<T>],
    options: MatchOptions,
) -> ReconcileResult<MatchOutcome<'a, T>> {
    // Nothing left to classify; skip evaluating archive keys.
    if scratch.is_empty() {
        return Ok(MatchOutcome::empty());
    }
    let Some((key, rest)) = keys.split_first() else {
        return Ok(MatchOutcome {
            matched: scratch,
            unmatched: Vec::new(),
        });
    };

    let scratch_groups = group_by(scratch, *key, options)?;
    let mut archive_groups = group_by(archive, *key, options)?;
    trace!(
        depth = keys.len(),
        scratch_groups = scratch_groups.len(),
        archive_groups = archive_groups.len(),
        "partitioned"
    );

    let mut outcome = MatchOutcome::empty();
    for (value, scratch_group) in scratch_groups {
        match archive_groups.remove(&value) {
            Some(archive_group) => {
                outcome.absorb(refine(scratch_group, archive_group, rest, options)?);
            }
            None => outcome.unmatched.extend(scratch_group),
        }
    }
    Ok(outcome)
}

/// Partition `items` by the value of `key`.
///
/// Every key of the stage is computed before any grouping happens, so a
/// parallel run still partitions on complete results.
fn group_by<'a, T: Sync>(
    items: Vec<&'a T>,
    key: KeyFn<T>,
    options: MatchOptions,
) -> ReconcileResult<HashMap<MatchKey, Vec<&'a T>>> {
    let keyed: Vec<(MatchKey, &'a T)> = if options.parallel {
        items
            .into_par_iter()
            .map(|item| key(item).map(|k| (k, item)))
            .collect::<ReconcileResult<_>>()?
    } else {
        items
            .into_iter()
            .map(|item| key(item).map(|k| (k, item)))
            .collect::<ReconcileResult<_>>()?
    };

    let mut groups: HashMap<MatchKey, Vec<&'a T>> = HashMap::new();
    for (k, item) in keyed {
        groups.entry(k).or_default().push(item);
    }
    Ok(groups)
}
