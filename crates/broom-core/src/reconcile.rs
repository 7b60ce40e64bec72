//! Reconciliation workflow
//!
//! One full pass: collect branch listings, compare, run the interactive
//! session, delete the confirmed branches, then re-collect and report what
//! is left. Selection state never survives a deletion step; everything is
//! recomputed from fresh listings.

use crate::compare::compute_candidates;
use crate::error::BroomError;
use crate::git::GitBackend;
use crate::highlight::Pattern;
use crate::interaction::InteractionAdapter;
use crate::session::{run_session, BranchRow, SessionOutcome};

/// How a reconciliation pass ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassResult {
    /// Every local branch exists on the remote; no session was started
    NoDifferences,
    /// User quit the session; nothing was deleted
    Quit,
    /// Deletions were attempted; carries what happened
    Completed {
        /// Branches deleted successfully
        deleted: Vec<String>,
        /// Branches whose deletion failed, with the failure message
        failed: Vec<(String, String)>,
        /// Local-only branches still present after re-collection
        remaining: Vec<BranchRow>,
    },
}

/// Run one reconciliation pass
///
/// Collaborator failures during collection abort the pass immediately; a
/// deletion failure for an individual branch is reported and the batch
/// continues.
pub fn run_pass<G: GitBackend, A: InteractionAdapter>(
    git: &G,
    io: &A,
    protect: &Pattern,
) -> Result<PassResult, BroomError> {
    let local = git.list_local_branches()?;
    let remote = git.list_remote_branches()?;

    let candidates = compute_candidates(&local, &remote, protect);
    if candidates.is_empty() {
        io.print_success("No differences: every local branch exists on the remote.");
        return Ok(PassResult::NoDifferences);
    }

    io.print_header("Local branches with no remote counterpart:");

    let marked = match run_session(candidates, io)? {
        SessionOutcome::Quit => {
            io.print_info("Quit: no branches deleted.");
            return Ok(PassResult::Quit);
        }
        SessionOutcome::Accepted(marked) => marked,
    };

    let mut deleted = Vec::new();
    let mut failed = Vec::new();
    for row in &marked {
        match git.delete_branch(&row.name) {
            Ok(()) => {
                io.print_success(&format!("deleted {}", row.name));
                deleted.push(row.name.clone());
            }
            Err(e) => {
                io.print_warning(&format!("could not delete {}: {}", row.name, e));
                failed.push((row.name.clone(), e.to_string()));
            }
        }
    }

    let local = git.list_local_branches()?;
    let remote = git.list_remote_branches()?;
    let remaining = compute_candidates(&local, &remote, protect);

    if remaining.is_empty() {
        io.print_success("No differences remain: every local branch exists on the remote.");
    } else {
        io.print_header("Local-only branches remaining:");
        io.show_candidates(&remaining);
    }

    Ok(PassResult::Completed {
        deleted,
        failed,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::normalize_branch_name;
    use crate::interaction::ScriptedAdapter;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// In-memory backend mirroring `git branch` output shapes
    struct MemoryGit {
        local: RefCell<Vec<String>>,
        remote: Vec<String>,
        refuse_delete: HashSet<String>,
        fail_listing: bool,
    }

    impl MemoryGit {
        fn new(local: &[&str], remote: &[&str]) -> Self {
            Self {
                local: RefCell::new(local.iter().map(|s| s.to_string()).collect()),
                remote: remote.iter().map(|s| s.to_string()).collect(),
                refuse_delete: HashSet::new(),
                fail_listing: false,
            }
        }

        fn refusing(mut self, branch: &str) -> Self {
            self.refuse_delete.insert(branch.to_string());
            self
        }

        fn broken() -> Self {
            let mut git = Self::new(&[], &[]);
            git.fail_listing = true;
            git
        }
    }

    impl GitBackend for MemoryGit {
        fn list_local_branches(&self) -> Result<Vec<String>, BroomError> {
            if self.fail_listing {
                return Err(BroomError::GitCommand {
                    reason: "fatal: not a git repository".to_string(),
                });
            }
            Ok(self.local.borrow().clone())
        }

        fn list_remote_branches(&self) -> Result<Vec<String>, BroomError> {
            if self.fail_listing {
                return Err(BroomError::GitCommand {
                    reason: "fatal: unable to read remote refs".to_string(),
                });
            }
            Ok(self.remote.clone())
        }

        fn delete_branch(&self, name: &str) -> Result<(), BroomError> {
            if self.refuse_delete.contains(name) {
                return Err(BroomError::GitCommand {
                    reason: format!("error: branch '{}' is checked out", name),
                });
            }
            self.local
                .borrow_mut()
                .retain(|raw| normalize_branch_name(raw) != name);
            Ok(())
        }
    }

    fn protect_master() -> Pattern {
        Pattern::literal("master").unwrap()
    }

    #[test]
    fn test_select_and_delete_everything() {
        // Scenario: two stale feature branches, select both, confirm.
        let git = MemoryGit::new(
            &["* master", "  feature/x", "  feature/y"],
            &["  origin/master"],
        );
        let io = ScriptedAdapter::new(&["1,2"], &[true]);

        let result = run_pass(&git, &io, &protect_master()).unwrap();
        match result {
            PassResult::Completed {
                deleted,
                failed,
                remaining,
            } => {
                assert_eq!(deleted, vec!["feature/x", "feature/y"]);
                assert!(failed.is_empty());
                assert!(remaining.is_empty());
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(git.local.borrow().len(), 1);
    }

    #[test]
    fn test_no_differences_short_circuits() {
        let git = MemoryGit::new(&["* master"], &["  origin/master"]);
        let io = ScriptedAdapter::new(&[], &[]);

        let result = run_pass(&git, &io, &protect_master()).unwrap();
        assert_eq!(result, PassResult::NoDifferences);
        // No session ran, so no table was ever rendered.
        assert!(io.tables().is_empty());
        assert!(io.infos().iter().any(|m| m.contains("No differences")));
    }

    #[test]
    fn test_quit_deletes_nothing() {
        let git = MemoryGit::new(&["* master", "  stale"], &["  origin/master"]);
        let io = ScriptedAdapter::new(&["Q"], &[]);

        let result = run_pass(&git, &io, &protect_master()).unwrap();
        assert_eq!(result, PassResult::Quit);
        assert_eq!(git.local.borrow().len(), 2);
    }

    #[test]
    fn test_listing_failure_aborts_pass() {
        let git = MemoryGit::broken();
        let io = ScriptedAdapter::new(&[], &[]);

        let err = run_pass(&git, &io, &protect_master()).unwrap_err();
        assert!(matches!(err, BroomError::GitCommand { .. }));
        assert!(io.tables().is_empty());
    }

    #[test]
    fn test_per_branch_failure_continues_batch() {
        let git = MemoryGit::new(
            &["* master", "  stuck", "  stale"],
            &["  origin/master"],
        )
        .refusing("stuck");
        let io = ScriptedAdapter::new(&["a"], &[true]);

        let result = run_pass(&git, &io, &protect_master()).unwrap();
        match result {
            PassResult::Completed {
                deleted,
                failed,
                remaining,
            } => {
                assert_eq!(deleted, vec!["stale"]);
                assert_eq!(failed.len(), 1);
                assert_eq!(failed[0].0, "stuck");
                assert_eq!(remaining.len(), 1);
                assert_eq!(remaining[0].name, "stuck");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(io.warnings().iter().any(|w| w.contains("stuck")));
    }

    #[test]
    fn test_final_report_recomputes_from_fresh_listings() {
        // Delete only one of two candidates; the survivor must reappear in
        // the final report with a fresh ID starting at 1.
        let git = MemoryGit::new(
            &["* master", "  feature/x", "  feature/y"],
            &["  origin/master"],
        );
        let io = ScriptedAdapter::new(&["1"], &[true]);

        let result = run_pass(&git, &io, &protect_master()).unwrap();
        match result {
            PassResult::Completed { remaining, .. } => {
                assert_eq!(remaining.len(), 1);
                assert_eq!(remaining[0].id, 1);
                assert_eq!(remaining[0].name, "feature/y");
                assert!(!remaining[0].marked);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
