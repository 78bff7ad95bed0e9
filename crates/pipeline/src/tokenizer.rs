//! Splits a configuration line into tokens.
//!
//! Tokens are separated by whitespace. A double-quoted run is a single token
//! with the quotes removed, and `\"` inside quotes is a literal quote, so
//! `-comment "web tier"` yields two tokens rather than three.

pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            '\\' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    // An unterminated quote keeps whatever followed it as the last token.
    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Flag tokens start with `-` followed by a letter (`-lbMethod`), which keeps
/// negative numbers and a bare `-` out.
pub fn is_flag(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}
