//! Balanced bracket checking.
//!
//! [`check`] scans the text once, left to right, keeping a stack of the
//! openers that have not been closed yet. The first problem found ends the
//! scan. Positions are `char` indices into the text, not byte offsets.

mod error;
mod location;
mod pairs;
mod report;

pub use error::BracketError;
pub use location::{SourceLocation, char_to_byte, char_to_location};
pub use pairs::{PAIRS, closer_for, is_closer, is_opener, opener_for};
pub use report::render;

use tracing::{debug, trace};

/// The outcome of checking a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Balance {
    /// Every closer matched the most recent open opener and none are left open.
    Balanced,
    /// A closer appeared while no opener was pending.
    UnmatchedCloser {
        /// Position of the closer.
        position: usize,
    },
    /// A closer did not pair with the most recent open opener.
    Mismatch {
        /// Position of the opener that was popped.
        opener_position: usize,
        /// Position of the offending closer.
        closer_position: usize,
    },
    /// The text ended with openers still pending. Only the most recently
    /// pushed one is reported.
    UnmatchedOpener {
        /// Position of the opener.
        position: usize,
    },
}

impl Balance {
    /// Whether the text was balanced.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    /// The positions named by this outcome, in text order.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        match *self {
            Self::Balanced => Vec::new(),
            Self::UnmatchedCloser { position } | Self::UnmatchedOpener { position } => {
                vec![position]
            }
            Self::Mismatch {
                opener_position,
                closer_position,
            } => vec![opener_position, closer_position],
        }
    }

    /// Turn this outcome into a `Result`, attaching the source text to the
    /// error so it can be rendered.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] for every outcome except [`Balance::Balanced`].
    pub fn into_result(self, source: &str) -> Result<(), BracketError> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(BracketError::new(source, self))
        }
    }
}

/// Check the brackets `()`, `[]` and `{}` in `text`.
///
/// Every other character is ignored.
#[must_use]
pub fn check(text: &str) -> Balance {
    let mut openers: Vec<(char, usize)> = Vec::new();

    for (position, c) in text.chars().enumerate() {
        if is_opener(c) {
            trace!(position, opener = %c, "push");
            openers.push((c, position));
            continue;
        }

        let Some(required) = opener_for(c) else {
            continue;
        };

        let Some((opener, opener_position)) = openers.pop() else {
            debug!(position, closer = %c, "closer with no pending opener");
            return Balance::UnmatchedCloser { position };
        };
        trace!(position, closer = %c, opener = %opener, opener_position, "pop");

        if opener != required {
            debug!(opener_position, position, "closer does not match opener");
            return Balance::Mismatch {
                opener_position,
                closer_position: position,
            };
        }
    }

    if let Some(&(opener, position)) = openers.last() {
        debug!(
            position,
            opener = %opener,
            pending = openers.len(),
            "openers left at end of text"
        );
        return Balance::UnmatchedOpener { position };
    }

    Balance::Balanced
}
