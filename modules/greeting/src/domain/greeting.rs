//! Phrase construction.
//!
//! Every call builds a new `String`; nothing is cached or shared between calls.

use std::fmt;

use tracing::debug;

/// Name used when none (or an empty one) is given.
pub const DEFAULT_NAME: &str = "stranger";

/// Kind of phrase to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greeting {
    Hello,
    Goodbye,
}

impl Greeting {
    #[must_use]
    pub fn salutation(self) -> &'static str {
        match self {
            Self::Hello => "Hello",
            Self::Goodbye => "Goodbye",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.salutation())
    }
}

/// `"{salutation}, {name}!"`, with `DEFAULT_NAME` when `name` is `None` or empty.
///
/// The name is used verbatim: no trimming, escaping or length limit.
#[must_use]
pub fn greet(kind: Greeting, name: Option<&str>) -> String {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => {
            debug!(%kind, "no name given, using default");
            DEFAULT_NAME
        }
    };
    format!("{kind}, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_hello_with_name() {
        assert_eq!(greet(Greeting::Hello, Some("Alice")), "Hello, Alice!");
        assert_eq!(greet(Greeting::Hello, Some("Bob")), "Hello, Bob!");
    }

    #[test]
    fn test_goodbye_with_name() {
        assert_eq!(greet(Greeting::Goodbye, Some("Alice")), "Goodbye, Alice!");
    }

    #[test]
    fn test_missing_or_empty_name_uses_default() {
        for kind in [Greeting::Hello, Greeting::Goodbye] {
            let expected = format!("{kind}, stranger!");
            assert_eq!(greet(kind, None), expected);
            assert_eq!(greet(kind, Some("")), expected);
        }
    }

    #[test]
    fn test_name_is_not_trimmed_or_escaped() {
        assert_eq!(greet(Greeting::Hello, Some(" ")), "Hello,  !");
        assert_eq!(greet(Greeting::Hello, Some("O'Brien")), "Hello, O'Brien!");
        assert_eq!(
            greet(Greeting::Goodbye, Some("<b>%s</b>")),
            "Goodbye, <b>%s</b>!"
        );
    }

    #[test]
    fn test_long_name_is_kept_whole() {
        let long_name = "x".repeat(1000);
        let result = greet(Greeting::Hello, Some(&long_name));
        assert!(result.contains(&long_name));
        assert_eq!(result.len(), "Hello, !".len() + 1000);
    }

    #[test]
    #[traced_test]
    fn test_default_substitution_is_logged() {
        let _ = greet(Greeting::Goodbye, None);
        assert!(logs_contain("no name given, using default"));
    }
}
