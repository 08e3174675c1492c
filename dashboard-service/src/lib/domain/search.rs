//! Free-text record filtering.
//!
//! A query matches a record when it is a case-insensitive substring of at
//! least one of the record's searchable fields. Numbers and dates take part
//! through their text rendering only, so `"20"` matches an amount of `12.00`
//! only if the rendered text contains it. An empty query matches everything.

/// Record that exposes text fields to free-text search.
pub trait Searchable {
    /// Rendered field values the query is matched against.
    fn search_fields(&self) -> Vec<String>;
}

/// Free-text search predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = text.to_lowercase();
        Self { text, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the query occurs in `field`, ignoring case.
    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || field.to_lowercase().contains(&self.folded)
    }

    /// Whether any searchable field of `record` contains the query.
    pub fn accepts<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| self.matches(field))
    }

    /// SQL `LIKE` pattern with `%`, `_` and `\` escaped so the query text is
    /// matched literally (backslash is Postgres' default escape character).
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.text.len() + 2);
        pattern.push('%');
        for ch in self.text.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SearchQuery {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
