use serde::{Deserialize, Serialize};

/// Settings for turning CSV text into a [`Table`](super::Table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    pub delimiter: char,
    /// Drop the first logical line without using it as a header.
    pub skip_header: bool,
    /// Produce key to field mappings instead of field sequences.
    pub return_object: bool,
    /// Keys to use instead of the first line; only read when `return_object` is set.
    pub header_keys: Option<Vec<String>>,
    /// Strip surrounding whitespace from every field.
    pub trim: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: false,
            return_object: false,
            header_keys: None,
            trim: false,
        }
    }
}

impl ParseOptions {
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn skip_header(mut self, yes: bool) -> Self {
        self.skip_header = yes;
        self
    }

    pub fn return_object(mut self, yes: bool) -> Self {
        self.return_object = yes;
        self
    }

    pub fn header_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn trim(mut self, yes: bool) -> Self {
        self.trim = yes;
        self
    }
}

/// Settings for turning rows into CSV text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringifyOptions {
    pub delimiter: char,
    /// Quote every field, not only those that need it.
    pub quote_all: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote_all: false,
        }
    }
}

impl StringifyOptions {
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn quote_all(mut self, yes: bool) -> Self {
        self.quote_all = yes;
        self
    }
}
