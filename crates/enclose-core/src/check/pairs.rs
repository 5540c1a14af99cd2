//! The fixed bracket pairing table.

/// Every closer with the opener it requires.
pub const PAIRS: [(char, char); 3] = [(')', '('), (']', '['), ('}', '{')];

/// Look up the opener a closer requires.
#[must_use]
pub const fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Look up the closer that ends an opener.
#[must_use]
pub const fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Check if a character is an opener: `(`, `[` or `{`.
#[must_use]
pub const fn is_opener(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// Check if a character is a closer: `)`, `]` or `}`.
#[must_use]
pub const fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}
