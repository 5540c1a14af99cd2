//! List, queue and stack sessions driven by one-line commands.
//!
//! Each collection is wrapped in an adapter implementing [`PushPop`], so a
//! single command loop can drive all three. A command line starts with `+`
//! (push the rest of the line), `-` (pop) or `0` (leave the session).

use std::collections::VecDeque;

use thiserror::Error;
use tracing::debug;

/// A collection that items can be pushed into and popped from.
pub trait PushPop<T> {
    /// Display name of the collection, e.g. `Queue`.
    fn name(&self) -> &'static str;

    /// Number of items held.
    fn len(&self) -> usize;

    /// Whether the collection holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an item.
    fn push(&mut self, item: T);

    /// Remove an item. Ordered collections ignore `item` and remove whatever
    /// is next in line; the list removes the first item equal to `item`.
    fn pop(&mut self, item: &T) -> Option<T>;

    /// The held items in display order.
    fn items(&self) -> Vec<&T>;

    /// A line describing the current state of the collection.
    fn status(&self) -> String
    where
        T: std::fmt::Display,
    {
        let items: Vec<String> = self.items().iter().map(ToString::to_string).collect();
        format!("Current {}: {}", self.name(), items.join(", "))
    }
}

/// A growable list; `pop` removes a named item.
#[derive(Debug, Clone, Default)]
pub struct ListPushPop {
    items: Vec<String>,
}

impl ListPushPop {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items the list can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl PushPop<String> for ListPushPop {
    fn name(&self) -> &'static str {
        "List"
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: String) {
        self.items.push(item);
    }

    fn pop(&mut self, item: &String) -> Option<String> {
        let index = self.items.iter().position(|held| held == item)?;
        Some(self.items.remove(index))
    }

    fn items(&self) -> Vec<&String> {
        self.items.iter().collect()
    }

    fn status(&self) -> String {
        format!("Count: {}; Capacity: {}", self.len(), self.capacity())
    }
}

/// A first-in-first-out queue.
#[derive(Debug, Clone, Default)]
pub struct QueuePushPop {
    items: VecDeque<String>,
}

impl QueuePushPop {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl PushPop<String> for QueuePushPop {
    fn name(&self) -> &'static str {
        "Queue"
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: String) {
        self.items.push_back(item);
    }

    fn pop(&mut self, _item: &String) -> Option<String> {
        self.items.pop_front()
    }

    fn items(&self) -> Vec<&String> {
        self.items.iter().collect()
    }
}

/// A last-in-first-out stack. Items are displayed top first.
#[derive(Debug, Clone, Default)]
pub struct StackPushPop {
    items: Vec<String>,
}

impl StackPushPop {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl PushPop<String> for StackPushPop {
    fn name(&self) -> &'static str {
        "Stack"
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: String) {
        self.items.push(item);
    }

    fn pop(&mut self, _item: &String) -> Option<String> {
        self.items.pop()
    }

    fn items(&self) -> Vec<&String> {
        self.items.iter().rev().collect()
    }
}

/// A command line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was empty or only whitespace.
    #[error("Empty input, try again.")]
    Empty,
    /// The line started with an unknown character.
    #[error("Could not parse choice {0}, try again.")]
    Unknown(char),
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push the value.
    Push(String),
    /// Pop; the list uses the value to pick what to remove.
    Pop(String),
    /// Leave the session.
    Exit,
}

impl Command {
    /// Parse a command line. The first character selects the command and the
    /// rest of the line, verbatim, is its value.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is blank or starts with anything other
    /// than `+`, `-` or `0`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let mut chars = line.chars();
        let choice = chars.next().ok_or(CommandError::Empty)?;
        let value = chars.as_str().to_string();

        match choice {
            '+' => Ok(Self::Push(value)),
            '-' => Ok(Self::Pop(value)),
            '0' => Ok(Self::Exit),
            other => Err(CommandError::Unknown(other)),
        }
    }
}

/// What applying a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The collection changed or was inspected; print both lines.
    Continue {
        /// Feedback on the command.
        feedback: String,
        /// The collection's status after the command.
        status: String,
    },
    /// The session is over.
    Exit,
}

/// Apply `command` to `collection`.
pub fn apply<C>(collection: &mut C, command: Command) -> Step
where
    C: PushPop<String> + ?Sized,
{
    let name = collection.name();
    let feedback = match command {
        Command::Exit => return Step::Exit,
        Command::Push(value) => {
            let feedback = format!("Added {value} to the {name}.");
            collection.push(value);
            feedback
        }
        Command::Pop(value) => {
            if collection.is_empty() {
                format!("Cannot pop an item, the {name} is empty.")
            } else if let Some(popped) = collection.pop(&value) {
                format!("Popped {popped} from the {name}.")
            } else {
                format!("{value} is not in the {name}.")
            }
        }
    };
    debug!(collection = name, len = collection.len(), "applied command");

    Step::Continue {
        feedback,
        status: collection.status(),
    }
}
