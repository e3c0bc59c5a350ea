use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TICKET_KEY: Regex = Regex::new(r"\s*\*?\s*((?-u:\w)+-(?-u:\d)+).*").unwrap();
}

/// Extract the first ticket key (`PROJECT-123`) from a branch line.
///
/// Accepts `git branch` output as-is, including the `*` marker on the current
/// branch. Keys are ASCII only.
pub fn ticket_key(line: &str) -> Option<&str> {
    TICKET_KEY
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|key| key.as_str())
}
