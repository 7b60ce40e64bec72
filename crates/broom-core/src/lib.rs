//! broom-core: branch reconciliation, selection, and highlighting
//!
//! This crate holds everything the `broom` binary needs apart from the
//! terminal itself: the git collaborator, the branch set comparator, the
//! interactive selection session, the line highlighter, and the
//! reconciliation workflow that ties them together.

/// Core error types for broom operations
pub mod error;

/// Configuration handling
pub mod config;

/// Branch set comparison
pub mod compare;

/// Git CLI collaborator
pub mod git;

/// Line segmentation for terminal highlighting
pub mod highlight;

/// Interaction seam between the workflow and the terminal
pub mod interaction;

/// Reconciliation workflow
pub mod reconcile;

/// Interactive selection session
pub mod session;

// Re-exports for convenience
pub use compare::{compute_candidates, normalize_branch_name};
pub use config::{load_config, Config};
pub use error::BroomError;
pub use git::{GitBackend, GitCli};
pub use highlight::{segment_line, Pattern, Segment};
pub use interaction::{InteractionAdapter, InteractionError, InteractionResult, ScriptedAdapter};
pub use reconcile::{run_pass, PassResult};
pub use session::{parse_selection, BranchRow, SelectionCommand, SelectionSession, SessionOutcome};
