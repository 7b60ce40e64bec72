//! Interactive selection session
//!
//! Holds the candidate rows and their delete flags and drives the
//! toggle/confirm loop until the user accepts a deletion plan or quits.
//! Input parsing and flag mutation are pure so they can be tested without a
//! terminal; the loop itself talks to an [`InteractionAdapter`].

use crate::error::BroomError;
use crate::interaction::InteractionAdapter;

/// One candidate branch in the selection table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRow {
    /// Stable row ID, assigned 1..n in first-seen order
    pub id: usize,
    /// Normalized branch name
    pub name: String,
    /// Whether the branch is currently marked for deletion
    pub marked: bool,
}

/// One parsed line of selection input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCommand {
    /// Leave the session without deleting anything
    Quit,
    /// Toggle the delete flag on every row
    SelectAll,
    /// Toggle the delete flag on the rows with these IDs
    Toggle(Vec<usize>),
    /// Input outside the menu grammar
    Invalid,
}

/// Parse one line of menu input
///
/// The quit marker wins over the select-all marker, which wins over the
/// integer-list shape. A list may contain digits, commas, and whitespace
/// only; anything else is invalid and leaves the session untouched.
pub fn parse_selection(input: &str) -> SelectionCommand {
    let token = input.trim();
    if token.is_empty() {
        return SelectionCommand::Invalid;
    }

    let upper = token.to_ascii_uppercase();
    if upper.contains('Q') {
        return SelectionCommand::Quit;
    }
    if upper.contains('A') {
        return SelectionCommand::SelectAll;
    }

    if token
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c.is_whitespace())
    {
        let ids = token
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect();
        return SelectionCommand::Toggle(ids);
    }

    SelectionCommand::Invalid
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// User confirmed the plan; carries the rows marked for deletion
    Accepted(Vec<BranchRow>),
    /// User quit; nothing is deleted
    Quit,
}

/// Mutable selection state for one reconciliation pass
#[derive(Debug)]
pub struct SelectionSession {
    rows: Vec<BranchRow>,
}

impl SelectionSession {
    /// Start a session over a candidate set (all flags cleared by the
    /// comparator)
    pub fn new(rows: Vec<BranchRow>) -> Self {
        Self { rows }
    }

    /// Current table contents
    pub fn rows(&self) -> &[BranchRow] {
        &self.rows
    }

    /// Toggle the rows whose IDs appear in `ids`; unknown IDs are ignored
    pub fn toggle_ids(&mut self, ids: &[usize]) {
        for row in &mut self.rows {
            if ids.contains(&row.id) {
                row.marked = !row.marked;
            }
        }
    }

    /// Toggle every row (a second invocation flips everything back)
    pub fn toggle_all(&mut self) {
        for row in &mut self.rows {
            row.marked = !row.marked;
        }
    }

    /// Rows currently marked for deletion
    pub fn marked(&self) -> Vec<BranchRow> {
        self.rows.iter().filter(|r| r.marked).cloned().collect()
    }
}

/// Run the select/confirm loop to completion
///
/// Loops presenting the table and reading menu input until the user either
/// quits or confirms a plan. A declined confirmation preserves the flags so
/// the selection can keep being refined. Callers must not start a session
/// on an empty candidate set; they short-circuit and report "no
/// differences" instead.
pub fn run_session<A: InteractionAdapter>(
    rows: Vec<BranchRow>,
    io: &A,
) -> Result<SessionOutcome, BroomError> {
    let mut session = SelectionSession::new(rows);

    loop {
        io.show_candidates(session.rows());

        let input = io.ask_selection("Toggle branches by ID (e.g. 1,3), A for all, Q to quit")?;
        match parse_selection(&input) {
            SelectionCommand::Quit => return Ok(SessionOutcome::Quit),
            SelectionCommand::Invalid => {
                io.print_warning(&format!(
                    "unrecognized input `{}` (expected IDs like 1,3, or A, or Q)",
                    input.trim()
                ));
                continue;
            }
            SelectionCommand::SelectAll => session.toggle_all(),
            SelectionCommand::Toggle(ids) => session.toggle_ids(&ids),
        }

        io.show_candidates(session.rows());
        if io.ask_confirm("Delete the branches marked above?", false)? {
            return Ok(SessionOutcome::Accepted(session.marked()));
        }
        // Declined: keep the flags and go back to the menu.
    }
}
