use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => f.write_str("yes"),
            Verdict::No => f.write_str("no"),
        }
    }
}

/// Read a yes/no verdict from the very start of `text`.
///
/// Only the prefix is inspected: "Therefore the answer is yes" has no
/// verdict, while "Nothing follows" reads as `No`.
pub fn extract_verdict(text: &str) -> Option<Verdict> {
    let lowered = text.to_lowercase();
    let text = lowered.trim();
    if text.starts_with("yes") {
        Some(Verdict::Yes)
    } else if text.starts_with("no") {
        Some(Verdict::No)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_only() {
        assert_eq!(extract_verdict("  Yes, because..."), Some(Verdict::Yes));
        assert_eq!(extract_verdict("NO."), Some(Verdict::No));
        assert_eq!(extract_verdict("Therefore the answer is yes"), None);
        assert_eq!(extract_verdict(""), None);
    }
}
