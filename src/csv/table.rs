use indexmap::IndexMap;
use serde::Serialize;

/// Fields of one row, in source order.
pub type Row = Vec<String>;

/// Fields of one row keyed by header, in header order.
pub type Record = IndexMap<String, String>;

/// The result of parsing: array-form rows or object-form records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Table {
    Rows(Vec<Row>),
    Records(Vec<Record>),
}

impl Table {
    pub fn len(&self) -> usize {
        match self {
            Table::Rows(rows) => rows.len(),
            Table::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Table::Rows(rows) => Some(rows),
            Table::Records(_) => None,
        }
    }

    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Table::Records(records) => Some(records),
            Table::Rows(_) => None,
        }
    }

    pub fn into_rows(self) -> Option<Vec<Row>> {
        match self {
            Table::Rows(rows) => Some(rows),
            Table::Records(_) => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            Table::Records(records) => Some(records),
            Table::Rows(_) => None,
        }
    }
}

/// Pair `fields` with `header` keys by position.
///
/// Fields past the end of the header have no key and are dropped, keys past the
/// end of the fields are left out, and empty keys never name a column. A key
/// repeated in the header takes the value of its last occurrence.
pub fn to_record(header: &[String], fields: Row) -> Record {
    header
        .iter()
        .zip(fields)
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, field)| (key.clone(), field))
        .collect()
}
