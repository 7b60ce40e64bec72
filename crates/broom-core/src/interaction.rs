//! Interaction seam between the workflow and the terminal
//!
//! The selection session and the reconciliation workflow talk to the user
//! exclusively through [`InteractionAdapter`]. The binary provides a
//! dialoguer-backed implementation; tests provide scripted ones.

use thiserror::Error;

use crate::session::BranchRow;

/// Errors surfaced by an interaction adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// User interrupted the run (Ctrl+C or closed stdin)
    #[error("cancelled by user")]
    Cancelled,

    /// Interactive prompt requested without a terminal
    #[error("interactive prompt requires a terminal")]
    NonTty,

    /// Underlying terminal IO failed
    #[error("terminal IO failed: {0}")]
    Io(String),

    /// Adapter was driven with input it cannot represent
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for adapter operations
pub type InteractionResult<T> = Result<T, InteractionError>;

/// User interaction surface consumed by the session and the workflow
///
/// `&self` receivers keep the trait object-safe and let terminal adapters
/// hold their own interior state; scripted adapters use interior mutability.
pub trait InteractionAdapter {
    /// Read one line of selection input (menu token)
    fn ask_selection(&self, prompt: &str) -> InteractionResult<String>;

    /// Ask a yes/no question
    fn ask_confirm(&self, prompt: &str, default: bool) -> InteractionResult<bool>;

    /// Render the candidate table (ID, BRANCH, DELETE columns)
    fn show_candidates(&self, rows: &[BranchRow]);

    /// Plain narrative line
    fn print_info(&self, message: &str);

    /// Recoverable problem (bad input, per-branch deletion failure)
    fn print_warning(&self, message: &str);

    /// Hard failure, written to stderr
    fn print_error(&self, message: &str);

    /// Completed operation
    fn print_success(&self, message: &str);

    /// Section header
    fn print_header(&self, message: &str);
}

/// Scripted adapter replaying canned answers
///
/// Used by the test suites to drive sessions and whole reconciliation
/// passes without a terminal. Running past the end of a script is an
/// [`InteractionError::Io`], which the session loop propagates.
#[derive(Debug, Default)]
pub struct ScriptedAdapter {
    selections: std::cell::RefCell<std::collections::VecDeque<String>>,
    confirms: std::cell::RefCell<std::collections::VecDeque<bool>>,
    infos: std::cell::RefCell<Vec<String>>,
    warnings: std::cell::RefCell<Vec<String>>,
    errors: std::cell::RefCell<Vec<String>>,
    tables: std::cell::RefCell<Vec<Vec<BranchRow>>>,
}

impl ScriptedAdapter {
    /// Build an adapter that answers selection prompts and confirmations in
    /// order from the given scripts
    pub fn new(selections: &[&str], confirms: &[bool]) -> Self {
        Self {
            selections: std::cell::RefCell::new(
                selections.iter().map(|s| s.to_string()).collect(),
            ),
            confirms: std::cell::RefCell::new(confirms.iter().copied().collect()),
            ..Self::default()
        }
    }

    /// Narrative lines printed so far (info, success, headers)
    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    /// Warnings printed so far
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    /// Errors printed so far
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    /// Every candidate table rendered so far, in order
    pub fn tables(&self) -> Vec<Vec<BranchRow>> {
        self.tables.borrow().clone()
    }
}

impl InteractionAdapter for ScriptedAdapter {
    fn ask_selection(&self, _prompt: &str) -> InteractionResult<String> {
        self.selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| InteractionError::Io("selection script exhausted".to_string()))
    }

    fn ask_confirm(&self, _prompt: &str, _default: bool) -> InteractionResult<bool> {
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| InteractionError::Io("confirmation script exhausted".to_string()))
    }

    fn show_candidates(&self, rows: &[BranchRow]) {
        self.tables.borrow_mut().push(rows.to_vec());
    }

    fn print_info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn print_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn print_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn print_success(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn print_header(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }
}
