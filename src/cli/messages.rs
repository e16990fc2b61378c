//! Message formatting for the command line front-end.
//!
//! - Highlight Text (make the text ferrum red but not bold)
//! - System message formatting functions that produce the same
//! format messages.

use colored::Colorize;

use crate::cli::colors::{FERRUM_GREY, FERRUM_RED};

pub fn highlight_argument(argument: &str) -> String {
    //! Highlight a piece of text in the ferrum red color.

    format!("{}", argument.color(FERRUM_RED))
}

pub fn dim(text: &str) -> String {
    format!("{}", text.color(FERRUM_GREY))
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Format a message from `source_name` (like 'frame') according to the
    //! command line theme.

    let source_formatted = format!("{:6}", source_name.color(FERRUM_RED).bold());

    format!("[{}] {}", source_formatted, message)
}
