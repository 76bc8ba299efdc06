use regex::Regex;

/// Error produced when a pattern cannot be compiled
pub type CompileError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Turns a rule's pattern text into a [`Matcher`]
pub type Compiler = fn(&str) -> Result<Box<dyn Matcher>, CompileError>;

/// Tests whether a single changed path satisfies a compiled pattern
pub trait Matcher {
    fn is_match(&self, path: &str) -> bool;
}

/// Unanchored regular-expression matching: the pattern may match anywhere in
/// the path unless it carries its own `^`/`$` anchors
#[derive(Debug, Clone)]
pub struct RegexMatcher(Regex);

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// [`Compiler`] for regular-expression patterns
    pub fn compile(pattern: &str) -> Result<Box<dyn Matcher>, CompileError> {
        Ok(Box::new(Self::new(pattern)?))
    }
}

impl Matcher for RegexMatcher {
    fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

/// The first path the matcher accepts, if any
pub fn first_match<'a, I>(matcher: &dyn Matcher, paths: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    paths
        .into_iter()
        .map(String::as_str)
        .find(|path| matcher.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_regex_matches_anywhere_in_path() {
        let matcher = RegexMatcher::new("src").unwrap();
        assert!(matcher.is_match("crates/core/src/lib.rs"));
        assert!(!matcher.is_match("README.md"));
    }

    #[test]
    fn test_anchors_are_respected() {
        let matcher = RegexMatcher::new(r"\.go$").unwrap();
        assert!(matcher.is_match("cmd/main.go"));
        assert!(!matcher.is_match("main.go.orig"));
    }

    #[test]
    fn test_first_match_stops_at_first_hit() {
        let changed = paths(&["README.md", "a.go", "b.go"]);
        let matcher = RegexMatcher::new(r"\.go$").unwrap();
        assert_eq!(first_match(&matcher, &changed), Some("a.go"));

        let ruby = RegexMatcher::new(r"\.rb$").unwrap();
        assert_eq!(first_match(&ruby, &changed), None);
    }

    #[test]
    fn test_invalid_pattern_does_not_compile() {
        assert!(RegexMatcher::compile("(unclosed").is_err());
        assert!(RegexMatcher::compile("[a-").is_err());
    }
}
