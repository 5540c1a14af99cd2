//! Human-readable reports for check outcomes.

use std::fmt::Write;

use super::location::{SourceLocation, char_to_location, line_text};
use super::pairs::{closer_for, opener_for};
use super::Balance;
use crate::{Config, MarkerStyle};

/// The words and positions that describe an unbalanced outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// One-line description of the problem.
    pub message: String,
    /// How to fix it.
    pub help: String,
    /// The position the message is reported at.
    pub primary: usize,
    /// Every offending position, in text order.
    pub marks: Vec<usize>,
}

impl Finding {
    /// Describe `balance`, looking up the bracket characters in `source`.
    ///
    /// Returns `None` for a balanced outcome.
    pub fn describe(source: &str, balance: Balance) -> Option<Self> {
        let char_at = |position: usize| source.chars().nth(position).unwrap_or('?');

        match balance {
            Balance::Balanced => None,
            Balance::UnmatchedCloser { position } => {
                let closer = char_at(position);
                let opener = opener_for(closer).unwrap_or('?');
                Some(Self {
                    message: format!("closer `{closer}` has no matching opener"),
                    help: format!("remove it or add `{opener}` before it"),
                    primary: position,
                    marks: vec![position],
                })
            }
            Balance::Mismatch {
                opener_position,
                closer_position,
            } => {
                let opener = char_at(opener_position);
                let closer = char_at(closer_position);
                let expected = closer_for(opener).unwrap_or('?');
                let at = char_to_location(source, opener_position);
                Some(Self {
                    message: format!(
                        "closer `{closer}` does not match opener `{opener}` at {}:{}",
                        at.line, at.column
                    ),
                    help: format!("expected `{expected}` to close `{opener}`"),
                    primary: closer_position,
                    marks: vec![opener_position, closer_position],
                })
            }
            Balance::UnmatchedOpener { position } => {
                let opener = char_at(position);
                let closer = closer_for(opener).unwrap_or('?');
                Some(Self {
                    message: format!("opener `{opener}` is never closed"),
                    help: format!("add `{closer}` after it"),
                    primary: position,
                    marks: vec![position],
                })
            }
        }
    }
}

/// Render a check outcome for display.
///
/// A balanced outcome renders as `balanced`. Otherwise the first line is
/// `line:column: message`, followed (when `config.show_source` is set) by
/// each offending line with markers under the offending characters, and a
/// help line.
#[must_use]
pub fn render(source: &str, balance: &Balance, config: &Config) -> String {
    let Some(finding) = Finding::describe(source, *balance) else {
        return "balanced".to_string();
    };

    let mut output = String::new();
    let primary = char_to_location(source, finding.primary);
    let _ = writeln!(
        output,
        "{}:{}: {}",
        primary.line, primary.column, finding.message
    );

    if config.show_source {
        write_source_lines(&mut output, source, &finding.marks, config);
    }

    let _ = write!(output, "  = help: {}", finding.help);
    output
}

/// Write the gutter, source lines and marker rows for `marks`.
fn write_source_lines(output: &mut String, source: &str, marks: &[usize], config: &Config) {
    let marks: Vec<(SourceLocation, char)> = marks
        .iter()
        .enumerate()
        .map(|(index, &position)| {
            (
                char_to_location(source, position),
                marker(config.marker_style, index),
            )
        })
        .collect();

    let width = marks
        .iter()
        .map(|(location, _)| location.line.to_string().len())
        .max()
        .unwrap_or(1)
        .max(3);

    let mut lines: Vec<usize> = marks.iter().map(|(location, _)| location.line).collect();
    lines.dedup();

    let _ = writeln!(output, "{:>width$} |", "");
    for line in lines {
        let text = line_text(source, line);
        let _ = writeln!(
            output,
            "{line:>width$} | {}",
            expand_tabs(text, config.tab_width)
        );

        let mut row = String::new();
        let mut column = 0;
        for (location, mark) in marks.iter().filter(|(location, _)| location.line == line) {
            let target = display_column(text, location.column, config.tab_width);
            while column < target {
                row.push(' ');
                column += 1;
            }
            row.push(*mark);
            column += 1;
        }
        let _ = writeln!(output, "{:>width$} | {row}", "");
    }
}

/// The marker drawn for the `index`-th offending position.
const fn marker(style: MarkerStyle, index: usize) -> char {
    match style {
        MarkerStyle::Caret => '^',
        MarkerStyle::Numbered => {
            if index == 0 {
                '1'
            } else {
                '2'
            }
        }
    }
}

fn expand_tabs(text: &str, tab_width: usize) -> String {
    text.replace('\t', &" ".repeat(tab_width))
}

/// The 0-indexed display column of the 1-indexed `column` once tabs are expanded.
fn display_column(text: &str, column: usize, tab_width: usize) -> usize {
    text.chars()
        .take(column - 1)
        .map(|c| if c == '\t' { tab_width } else { 1 })
        .sum()
}
