//! Unbalanced outcomes as errors and `miette` diagnostics.

use std::fmt::Display;

use miette::{Diagnostic, LabeledSpan, SourceCode};
use thiserror::Error;

use super::Balance;
use super::location::char_to_byte;
use super::report::Finding;

/// An unbalanced check outcome together with the text it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BracketError {
    message: String,
    help: String,
    balance: Balance,
    text: String,
    /// Byte offsets and lengths of the offending characters, in text order.
    spans: Vec<(usize, usize)>,
}

impl BracketError {
    /// Build the error for `balance`, which was produced by checking `text`.
    #[must_use]
    pub fn new(text: &str, balance: Balance) -> Self {
        let (message, help, marks) = Finding::describe(text, balance).map_or_else(
            || ("text is balanced".to_string(), String::new(), Vec::new()),
            |finding| (finding.message, finding.help, finding.marks),
        );

        let spans = marks
            .into_iter()
            .map(|position| {
                let offset = char_to_byte(text, position);
                let len = text[offset..].chars().next().map_or(0, char::len_utf8);
                (offset, len)
            })
            .collect();

        Self {
            message,
            help,
            balance,
            text: text.to_string(),
            spans,
        }
    }

    /// The outcome this error describes.
    #[must_use]
    pub const fn balance(&self) -> Balance {
        self.balance
    }

    /// Byte offsets and lengths of the offending characters, in text order.
    #[must_use]
    pub fn spans(&self) -> &[(usize, usize)] {
        &self.spans
    }

    const fn label_for(&self, index: usize) -> &'static str {
        match self.balance {
            Balance::Mismatch { .. } if index == 0 => "opened here",
            Balance::Mismatch { .. } => "does not close it",
            Balance::UnmatchedCloser { .. } => "nothing to close",
            Balance::UnmatchedOpener { .. } => "never closed",
            Balance::Balanced => "",
        }
    }
}

impl Diagnostic for BracketError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let code = match self.balance {
            Balance::Balanced => return None,
            Balance::UnmatchedCloser { .. } => "enclose::unmatched_closer",
            Balance::Mismatch { .. } => "enclose::mismatch",
            Balance::UnmatchedOpener { .. } => "enclose::unmatched_opener",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        if self.help.is_empty() {
            None
        } else {
            Some(Box::new(&self.help))
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.text)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.spans.is_empty() {
            return None;
        }
        Some(Box::new(self.spans.iter().enumerate().map(
            |(index, &(offset, len))| {
                LabeledSpan::new_with_span(Some(self.label_for(index).to_string()), (offset, len))
            },
        )))
    }
}
