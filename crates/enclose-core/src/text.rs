//! Text reversal through a stack.

/// Reverse `text` by pushing every character onto a stack and popping them off.
#[must_use]
pub fn reverse(text: &str) -> String {
    let mut stack: Vec<char> = text.chars().collect();
    let mut reversed = String::with_capacity(text.len());
    while let Some(c) = stack.pop() {
        reversed.push(c);
    }
    reversed
}
