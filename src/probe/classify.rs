//! Outage classification by phrase matching.

use crate::probe::CheckOutcome;

/// Ordered, case-insensitive list of phrases that mean "not operational".
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    phrases: Vec<String>,
}

impl PhraseMatcher {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// First phrase, in list order, that occurs anywhere in `text`.
    ///
    /// `text` is expected to be lower-cased already (see `page::visible_text`).
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|phrase| text.contains(phrase.as_str()))
            .map(String::as_str)
    }

    pub fn classify(&self, text: &str) -> CheckOutcome {
        match self.first_match(text) {
            Some(phrase) => CheckOutcome::down(phrase),
            None => CheckOutcome::operational(),
        }
    }
}
