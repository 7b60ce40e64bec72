//! Branch set comparison
//!
//! Computes the set of local branches with no corresponding remote branch,
//! excluding the protected branch. Pure over its inputs; all git access
//! happens elsewhere.

use std::collections::HashSet;

use crate::highlight::Pattern;
use crate::session::BranchRow;

/// Strip listing markers and whitespace from a raw branch line
///
/// `git branch` prefixes the checked-out branch with `*` and branches
/// checked out in linked worktrees with `+`; both are padded with spaces.
pub fn normalize_branch_name(raw: &str) -> &str {
    raw.trim().trim_start_matches(['*', '+']).trim_start()
}

/// Compute the deletion candidates from raw local and remote listings
///
/// A local branch is a candidate iff no remote name contains its normalized
/// name as a substring and the protect pattern does not match it. Output
/// order follows the local listing; duplicates collapse to their first
/// occurrence; IDs are assigned 1..n in that order with the delete flag
/// cleared. Empty inputs yield an empty candidate set.
pub fn compute_candidates(local: &[String], remote: &[String], protect: &Pattern) -> Vec<BranchRow> {
    let remote: Vec<&str> = remote
        .iter()
        .map(|r| normalize_branch_name(r))
        .filter(|r| !r.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let mut rows = Vec::new();

    for raw in local {
        let name = normalize_branch_name(raw);
        if name.is_empty() || protect.is_match(name) {
            continue;
        }
        if remote.iter().any(|r| r.contains(name)) {
            continue;
        }
        if !seen.insert(name.to_string()) {
            continue;
        }
        rows.push(BranchRow {
            id: rows.len() + 1,
            name: name.to_string(),
            marked: false,
        });
    }

    rows
}
