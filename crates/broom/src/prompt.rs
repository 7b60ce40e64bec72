//! Terminal adapter implementation using dialoguer for interactive prompts
//!
//! `ConsoleAdapter` implements `InteractionAdapter` for terminal-based use:
//! dialoguer prompts, the semantic color theme, and highlight-based
//! rendering of the candidate table.

use std::fmt::Write as FmtWrite;
use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use console::Style;
use dialoguer::theme::Theme;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use broom_core::highlight::{segment_line, Pattern};
use broom_core::interaction::{InteractionAdapter, InteractionError, InteractionResult};
use broom_core::session::BranchRow;

use crate::colors::COLORS;
use crate::render::render_line;

/// Global flag to track if Ctrl+C was pressed
static CANCELLED: AtomicBool = AtomicBool::new(false);

fn is_cancelled() -> bool {
    CANCELLED.load(Ordering::SeqCst)
}

/// Set up the global Ctrl+C handler
pub fn setup_ctrl_c_handler() {
    static HANDLER_SET: AtomicBool = AtomicBool::new(false);

    if HANDLER_SET.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = ctrlc::set_handler(move || {
        CANCELLED.store(true, Ordering::SeqCst);
        eprintln!();
    }) {
        eprintln!("Warning: Could not set Ctrl+C handler: {}", e);
    }
}

/// Dialoguer theme matching the semantic color palette
struct BroomTheme {
    prompt_style: Style,
    answer_style: Style,
    hint_style: Style,
}

impl BroomTheme {
    fn new() -> Self {
        Self {
            prompt_style: Style::new().cyan().bold(),
            answer_style: Style::new().cyan(),
            hint_style: Style::new().dim(),
        }
    }
}

impl Theme for BroomTheme {
    fn format_prompt(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        write!(f, "{}", self.prompt_style.apply_to(format!("? {}", prompt)))
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        default: Option<&str>,
    ) -> std::fmt::Result {
        match default {
            Some(d) => write!(
                f,
                "{} {}",
                self.prompt_style.apply_to(format!("? {}", prompt)),
                self.hint_style.apply_to(format!("({})", d))
            ),
            None => write!(f, "{}", self.prompt_style.apply_to(format!("? {}", prompt))),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        sel: &str,
    ) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.prompt_style.apply_to(format!("? {}", prompt)),
            self.answer_style.apply_to(sel)
        )
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        default: Option<bool>,
    ) -> std::fmt::Result {
        let hint = match default {
            Some(true) => "(Y/n)",
            Some(false) => "(y/N)",
            None => "(y/n)",
        };
        write!(
            f,
            "{} {}",
            self.prompt_style.apply_to(format!("? {}", prompt)),
            self.hint_style.apply_to(hint)
        )
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        selection: Option<bool>,
    ) -> std::fmt::Result {
        let answer = match selection {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "?",
        };
        write!(
            f,
            "{} {}",
            self.prompt_style.apply_to(format!("? {}", prompt)),
            self.answer_style.apply_to(answer)
        )
    }
}

/// Terminal adapter for the reconciliation workflow
pub struct ConsoleAdapter {
    is_tty: bool,
    delete_marker: Pattern,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        setup_ctrl_c_handler();
        Self {
            is_tty: std::io::stdin().is_terminal(),
            delete_marker: Pattern::literal("DELETE").expect("literal pattern compiles"),
        }
    }

    #[allow(dead_code)]
    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    fn check_cancelled(&self) -> InteractionResult<()> {
        if is_cancelled() {
            Err(InteractionError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn require_tty(&self) -> InteractionResult<()> {
        if !self.is_tty {
            Err(InteractionError::NonTty)
        } else {
            Ok(())
        }
    }

    fn convert_dialoguer_error(err: dialoguer::Error) -> InteractionError {
        if is_cancelled() {
            return InteractionError::Cancelled;
        }
        match &err {
            dialoguer::Error::IO(io_err)
                if io_err.kind() == std::io::ErrorKind::Interrupted =>
            {
                InteractionError::Cancelled
            }
            _ => InteractionError::Io(err.to_string()),
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionAdapter for ConsoleAdapter {
    fn ask_selection(&self, prompt: &str) -> InteractionResult<String> {
        self.require_tty()?;
        self.check_cancelled()?;

        let theme = BroomTheme::new();
        Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(Self::convert_dialoguer_error)
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> InteractionResult<bool> {
        self.require_tty()?;
        self.check_cancelled()?;

        let theme = BroomTheme::new();
        Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(Self::convert_dialoguer_error)
    }

    fn show_candidates(&self, rows: &[BranchRow]) {
        let name_width = rows
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(6)
            .max(6);

        println!();
        println!(
            "{:>4}  {:<name_width$}  {}",
            "ID",
            "BRANCH",
            "DELETE",
            name_width = name_width
        );

        let mut stdout = std::io::stdout().lock();
        for row in rows {
            let flag = if row.marked { "DELETE" } else { "" };
            let line = format!(
                "{:>4}  {:<name_width$}  {}",
                row.id,
                row.name,
                flag,
                name_width = name_width
            );
            // Marked rows are drawn whole-line in the highlight color.
            let segments = segment_line(&line, &self.delete_marker, true);
            let _ = render_line(&mut stdout, &segments, &COLORS.marked);
        }
        println!();
        let _ = std::io::stdout().flush();
    }

    fn print_info(&self, message: &str) {
        println!("{}", message);
        let _ = std::io::stdout().flush();
    }

    fn print_warning(&self, message: &str) {
        println!(
            "{} {}",
            "warning:".style(COLORS.warning),
            message.style(COLORS.warning)
        );
        let _ = std::io::stdout().flush();
    }

    fn print_error(&self, message: &str) {
        eprintln!(
            "{} {}",
            "error:".style(COLORS.fail),
            message.style(COLORS.fail)
        );
        let _ = std::io::stderr().flush();
    }

    fn print_success(&self, message: &str) {
        println!("{} {}", "✓".style(COLORS.success), message.style(COLORS.success));
        let _ = std::io::stdout().flush();
    }

    fn print_header(&self, message: &str) {
        println!("{}", message.style(COLORS.active));
        let _ = std::io::stdout().flush();
    }
}
