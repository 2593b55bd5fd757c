use csv::{Reader, ReaderBuilder, StringRecord, StringRecordsIntoIter};
use tracing::debug;

/// One access log record. Missing trailing columns are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRow {
    pub path: String,
    pub timestamp: String,
    pub user_agent: String,
}

impl LogRow {
    fn from_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).map(str::trim).unwrap_or_default().to_string();
        LogRow {
            path: field(0),
            timestamp: field(1),
            user_agent: field(2),
        }
    }
}

/// Forward-only iterator over the non-blank rows of a CSV document.
pub struct LogRows<'a> {
    records: StringRecordsIntoIter<&'a [u8]>,
    line: u64,
}

pub fn parse_rows(csv_text: &str) -> LogRows<'_> {
    let reader: Reader<&[u8]> = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    LogRows {
        records: reader.into_records(),
        line: 0,
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.is_empty()
}

impl Iterator for LogRows<'_> {
    type Item = LogRow;

    fn next(&mut self) -> Option<LogRow> {
        loop {
            self.line += 1;
            match self.records.next()? {
                Ok(record) if is_blank(&record) => continue,
                Ok(record) => return Some(LogRow::from_record(&record)),
                Err(e) => {
                    // Still a hit; it just has nothing usable in it.
                    debug!(action = "parse", component = "csv_row", record = self.line, error = %e, "Unreadable CSV record");
                    return Some(LogRow::default());
                }
            }
        }
    }
}
