//! User interface implementations
//!
//! `RealUserInterface` renders styled output and interactive prompts on a
//! real terminal. `TestUserInterface` records output and replays scripted
//! prompt answers so commands can be tested without a terminal.

use std::sync::Mutex;

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use claude_gateway_runtime::deps::{MessageStyle, UserInterface};

/// Production implementation of `UserInterface` backed by the terminal
pub struct RealUserInterface;

impl UserInterface for RealUserInterface {
    fn print(&self, message: &str) {
        println!("{message}");
    }

    fn print_styled(&self, message: &str, msg_style: MessageStyle) {
        let styled = match msg_style {
            MessageStyle::Bold => style(message).bold(),
            MessageStyle::Cyan => style(message).cyan(),
            MessageStyle::Green | MessageStyle::Success => style(message).green(),
            MessageStyle::Red | MessageStyle::Error => style(message).red(),
            MessageStyle::Yellow | MessageStyle::Warning => style(message).yellow(),
        };
        println!("{styled}");
    }

    fn is_interactive(&self) -> bool {
        atty::is(atty::Stream::Stdin)
    }

    fn prompt_select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(selection)
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

/// Test implementation of `UserInterface` that captures all output and
/// replays scripted prompt answers.
///
/// Prompts fall back to their default answer when no scripted answer is
/// queued, so most tests only script the prompts they care about.
pub struct TestUserInterface {
    output: Mutex<Vec<String>>,
    confirm_answers: Mutex<Vec<bool>>,
    select_answers: Mutex<Vec<usize>>,
    interactive: Mutex<bool>,
}

impl TestUserInterface {
    /// Create a new test user interface
    pub fn new() -> Self {
        Self {
            output: Mutex::new(Vec::new()),
            confirm_answers: Mutex::new(Vec::new()),
            select_answers: Mutex::new(Vec::new()),
            interactive: Mutex::new(true),
        }
    }

    /// Queue an answer for the next unanswered confirmation prompt
    pub fn push_confirm_answer(&self, answer: bool) {
        self.confirm_answers.lock().unwrap().push(answer);
    }

    /// Queue an answer for the next unanswered selection prompt
    pub fn push_select_answer(&self, answer: usize) {
        self.select_answers.lock().unwrap().push(answer);
    }

    /// Control what `is_interactive` reports
    pub fn set_interactive(&self, interactive: bool) {
        *self.interactive.lock().unwrap() = interactive;
    }

    /// All messages printed so far, in order
    pub fn get_output(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }
}

impl Default for TestUserInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TestUserInterface {
    fn print(&self, message: &str) {
        self.output.lock().unwrap().push(message.to_string());
    }

    fn print_styled(&self, message: &str, _style: MessageStyle) {
        self.output.lock().unwrap().push(message.to_string());
    }

    fn is_interactive(&self) -> bool {
        *self.interactive.lock().unwrap()
    }

    fn prompt_select(&self, _prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
        let mut answers = self.select_answers.lock().unwrap();
        if answers.is_empty() {
            Ok(default)
        } else {
            Ok(answers.remove(0))
        }
    }

    fn prompt_confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        let mut answers = self.confirm_answers.lock().unwrap();
        if answers.is_empty() {
            Ok(default)
        } else {
            Ok(answers.remove(0))
        }
    }
}
