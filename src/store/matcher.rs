use regex::{Regex, RegexBuilder};

/// Membership-or-regex matching used for restaurant and item attributes.
///
/// A list matches when it contains the term verbatim, or when any attribute matches the term
/// as a case-insensitive regular expression. Terms that are not valid regexes are matched as
/// escaped literals.
#[derive(Debug, Clone)]
pub struct AttributeMatcher {
    term: String,
    pattern: Option<Regex>,
}

impl AttributeMatcher {
    pub fn new(term: &str) -> Self {
        let pattern = Self::case_insensitive(term)
            .or_else(|_| Self::case_insensitive(&regex::escape(term)))
            .ok();

        if pattern.is_none() {
            tracing::warn!(term = %term, "Attribute term not compilable, using exact membership only");
        }

        Self {
            term: term.to_string(),
            pattern,
        }
    }

    fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern).case_insensitive(true).build()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, attributes: &[String]) -> bool {
        if attributes.iter().any(|attribute| attribute == &self.term) {
            return true;
        }

        match &self.pattern {
            Some(pattern) => attributes.iter().any(|attribute| pattern.is_match(attribute)),
            None => false,
        }
    }
}
