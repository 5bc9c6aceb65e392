use std::slice::Iter;

use crate::RandomSource;

const QUOTES: [&str; 4] = [
    "Believe in yourself and all that you are. Know that there is something inside you that is greater than any obstacle.",
    "The only bad workout is the one that didn't happen.",
    "Your body can stand almost anything. It's your mind that you have to convince.",
    "The only limit to our realization of tomorrow will be our doubts of today.",
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Quotes(Vec<String>);

impl Quotes {
    #[must_use]
    pub fn new(quotes: Vec<String>) -> Self {
        Self(quotes)
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self(QUOTES.iter().map(ToString::to_string).collect())
    }

    /// Choose a quote uniformly at random.
    ///
    /// An empty list yields an empty string.
    pub fn pick(&self, rng: &mut impl RandomSource) -> &str {
        if self.0.is_empty() {
            return "";
        }
        self.0
            .get(rng.choose_index(self.0.len()))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn contains(&self, quote: &str) -> bool {
        self.0.iter().any(|q| q == quote)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }
}
