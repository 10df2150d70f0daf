//! Row driver: reads CSV rows and resolves their text and source id

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use qapairs_domain::SourceId;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// One data row of the input, keyed by header name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    position: u64,
    fields: HashMap<String, String>,
}

impl Row {
    /// Build a row from its 1-based position and named fields
    pub fn new(position: u64, fields: HashMap<String, String>) -> Self {
        Self { position, fields }
    }

    /// 1-based position among the data rows
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Value of a named field, if this row has one
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Text to scan; a missing column counts as empty text
    pub fn text<'a>(&'a self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    /// Explicit id from `id_column` when present, else the row position
    pub fn source_id(&self, id_column: &str) -> SourceId {
        match self.get(id_column) {
            Some(id) => SourceId::Text(id.to_string()),
            None => SourceId::Position(self.position),
        }
    }
}

/// Iterator over the data rows of a CSV source
///
/// The first record is the header. Rows may be shorter or longer than the
/// header: missing trailing fields are absent from the row, extra fields are
/// dropped.
pub struct RowReader<R> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    origin: PathBuf,
    position: u64,
    record: csv::StringRecord,
}

impl RowReader<File> {
    /// Open a CSV file
    pub fn open(path: impl AsRef<Path>, config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let reader = builder(config)
            .from_path(path)
            .map_err(|source| ExtractorError::InputAccess {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_reader(reader, path.to_path_buf())
    }
}

impl<R: io::Read> RowReader<R> {
    /// Read CSV from any byte source; `origin` names it in errors
    pub fn from_reader(
        reader: R,
        origin: impl Into<PathBuf>,
        config: &ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        Self::with_reader(builder(config).from_reader(reader), origin.into())
    }

    fn with_reader(mut reader: csv::Reader<R>, origin: PathBuf) -> Result<Self, ExtractorError> {
        let headers = match reader.headers() {
            Ok(headers) => headers.iter().map(str::to_string).collect(),
            Err(source) => return Err(ExtractorError::InputAccess { path: origin, source }),
        };

        Ok(Self {
            reader,
            headers,
            origin,
            position: 0,
            record: csv::StringRecord::new(),
        })
    }

    /// Whether the header names `column`
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

impl<R: io::Read> Iterator for RowReader<R> {
    type Item = Result<Row, ExtractorError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.position += 1;
                // Later duplicate headers overwrite earlier ones
                let fields = self
                    .headers
                    .iter()
                    .zip(self.record.iter())
                    .map(|(name, value)| (name.clone(), value.to_string()))
                    .collect();
                Some(Ok(Row::new(self.position, fields)))
            }
            Err(source) => Some(Err(ExtractorError::InputAccess {
                path: self.origin.clone(),
                source,
            })),
        }
    }
}

fn builder(config: &ExtractorConfig) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .delimiter(config.delimiter_byte());
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv_text: &str) -> Vec<Row> {
        RowReader::from_reader(csv_text.as_bytes(), "test.csv", &ExtractorConfig::default())
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let rows = read("input\nA? yes\nB? no\nC? yes\n");
        let positions: Vec<_> = rows.iter().map(Row::position).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert_eq!(rows[1].text("input"), "B? no");
    }

    #[test]
    fn test_source_id_prefers_id_column() {
        let rows = read("id,input\nabc,A? yes\n,B? no\n");
        assert_eq!(rows[0].source_id("id"), SourceId::from("abc"));
        // An empty explicit id is kept verbatim
        assert_eq!(rows[1].source_id("id"), SourceId::from(""));
    }

    #[test]
    fn test_source_id_falls_back_to_position() {
        let rows = read("input\nA? yes\nB? no\n");
        assert_eq!(rows[0].source_id("id"), SourceId::Position(1));
        assert_eq!(rows[1].source_id("id"), SourceId::Position(2));
    }

    #[test]
    fn test_missing_column_is_empty_text() {
        let rows = read("other\nA? yes\n");
        assert_eq!(rows[0].text("input"), "");
    }

    #[test]
    fn test_short_row_is_flexible() {
        let rows = read("id,input\n7\n8,Q? no\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text("input"), "");
        assert_eq!(rows[1].text("input"), "Q? no");
    }

    #[test]
    fn test_quoted_fields_with_commas_and_newlines() {
        let rows = read("input\n\"First, really?\nYes\"\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text("input"), "First, really?\nYes");
    }

    #[test]
    fn test_has_column() {
        let reader =
            RowReader::from_reader("id,input\n".as_bytes(), "t.csv", &ExtractorConfig::default())
                .unwrap();
        assert!(reader.has_column("id"));
        assert!(reader.has_column("input"));
        assert!(!reader.has_column("text"));
    }

    #[test]
    fn test_custom_delimiter() {
        let mut config = ExtractorConfig::default();
        config.delimiter = ';';
        let rows: Vec<Row> = RowReader::from_reader("id;input\nx;A? yes\n".as_bytes(), "t", &config)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows[0].get("id"), Some("x"));
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let bytes: &[u8] = b"input\n\xff\xfe? yes\n";
        let mut reader =
            RowReader::from_reader(bytes, "bad.csv", &ExtractorConfig::default()).unwrap();
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, ExtractorError::InputAccess { .. }));
        assert!(err.to_string().contains("bad.csv"));
    }

    #[test]
    fn test_missing_file() {
        let result = RowReader::open("/definitely/not/here.csv", &ExtractorConfig::default());
        assert!(matches!(result, Err(ExtractorError::InputAccess { .. })));
    }
}
