//! Delimited-text emission.
//!
//! Fields containing the delimiter, a double quote, CR or LF are wrapped
//! in double quotes with embedded quotes doubled (RFC 4180).

use std::borrow::Cow;

/// Field delimiter.
pub const DELIMITER: char = ',';

/// Escape one field.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Line-oriented document builder.
#[derive(Debug, Default)]
pub(crate) struct CsvWriter {
    out: String,
}

impl CsvWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one row, escaping every field.
    pub(crate) fn row<S: AsRef<str>>(&mut self, fields: &[S]) {
        let line = fields
            .iter()
            .map(|f| escape_field(f.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        self.out.push_str(&line);
        self.out.push('\n');
    }

    /// Append an empty line.
    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Append a section heading preceded by an empty line.
    pub(crate) fn section(&mut self, title: &str) {
        self.blank();
        self.row(&[title]);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
