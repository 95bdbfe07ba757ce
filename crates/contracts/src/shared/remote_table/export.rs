use chrono::NaiveDate;
use thiserror::Error;

pub const NOTHING_TO_EXPORT: &str = "No data to export for the current filters";

/// UTF-8 BOM, чтобы Excel правильно открыл файл
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Одна строка выгрузки: упорядоченные пары (заголовок, значение)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRecord {
    fields: Vec<(&'static str, String)>,
}

impl ExportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, header: &'static str, value: impl ToString) -> Self {
        self.fields.push((header, value.to_string()));
        self
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(h, _)| *h).collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|(_, v)| v.as_str()).collect()
    }
}

/// Сколько строк запросить для выгрузки одним запросом
pub fn export_limit(total_rows: u64, page_size: usize) -> u64 {
    if total_rows > 0 {
        total_rows
    } else {
        page_size.max(1) as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub rows: usize,
}

impl ExportFile {
    pub const MIME: &'static str = "text/csv;charset=utf-8";
}

pub fn export_filename(stem: &str, date: NaiveDate) -> String {
    format!("{}_export_{}.csv", stem, date.format("%Y-%m-%d"))
}

/// Собирает CSV (`;`, BOM). Пустой набор дает `None`, вызывающий показывает
/// [`NOTHING_TO_EXPORT`] и не скачивает файл.
pub fn build_csv(
    records: &[ExportRecord],
    stem: &str,
    date: NaiveDate,
) -> Result<Option<ExportFile>, ExportError> {
    let Some(first) = records.first() else {
        return Ok(None);
    };

    let mut bytes = UTF8_BOM.to_vec();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(&mut bytes);
        writer.write_record(first.headers())?;
        for record in records {
            writer.write_record(record.values())?;
        }
        writer.flush()?;
    }

    Ok(Some(ExportFile {
        filename: export_filename(stem, date),
        bytes,
        rows: records.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 7).unwrap()
    }

    #[test]
    fn limit_uses_total_or_page_size() {
        assert_eq!(export_limit(340, 50), 340);
        assert_eq!(export_limit(0, 50), 50);
        assert_eq!(export_limit(0, 0), 1);
    }

    #[test]
    fn empty_export_produces_no_file() {
        assert!(build_csv(&[], "users", date()).unwrap().is_none());
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let records: Vec<ExportRecord> = (1..=3)
            .map(|i| {
                ExportRecord::new()
                    .field("No", i)
                    .field("Name", format!("user; {}", i))
            })
            .collect();
        let file = build_csv(&records, "users", date()).unwrap().unwrap();
        assert_eq!(file.filename, "users_export_2024-05-07.csv");
        assert_eq!(file.rows, 3);
        assert!(file.bytes.starts_with(UTF8_BOM));

        let text = String::from_utf8(file.bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "No;Name");
        assert_eq!(lines[1], "1;\"user; 1\"");
    }
}
