use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arrow::array::Array;
use arrow::util::display::array_value_to_string;
use calamine::{open_workbook_auto, Data, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::{CatalogError, Result};
use super::model::{Catalog, TitleRecord, TitleType};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – first worksheet, header in row 1
/// * `.csv`     – header row with column names
/// * `.json`    – `[{ "type": "Movie", "title": "...", ... }, ...]`
/// * `.parquet` – one column per field, any scalar type
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => read_spreadsheet(path)?,
        "csv" => read_csv(path)?,
        "json" => read_json(path)?,
        "parquet" | "pq" => read_parquet(path)?,
        other => return Err(CatalogError::UnsupportedExtension(other.to_string())),
    };

    build_catalog(&table)
}

// ---------------------------------------------------------------------------
// Raw table – every format is first flattened to text cells
// ---------------------------------------------------------------------------

/// Header names plus rows of text cells, in file order.
#[derive(Debug, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Positions of the catalog fields inside a [`RawTable`] row.
#[derive(Debug)]
struct Columns {
    kind: usize,
    title: usize,
    release_year: usize,
    description: Option<usize>,
    listed_in: Option<usize>,
    rating: Option<usize>,
    duration: Option<usize>,
    country: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &'static str| find(name).ok_or(CatalogError::MissingColumn(name));

        Ok(Columns {
            kind: require("type")?,
            title: require("title")?,
            release_year: require("release_year")?,
            description: find("description"),
            listed_in: find("listed_in"),
            rating: find("rating"),
            duration: find("duration"),
            country: find("country"),
        })
    }
}

/// Turn a raw table into a [`Catalog`], validating every row.
pub fn build_catalog(table: &RawTable) -> Result<Catalog> {
    let columns = Columns::resolve(&table.headers)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        // 1-based data row number, header excluded.
        if let Some(record) = parse_row(&columns, row, i + 1)? {
            records.push(record);
        }
    }

    log::debug!(
        "built catalog: {} records from {} rows",
        records.len(),
        table.rows.len()
    );
    Ok(Catalog::new(records))
}

fn parse_row(columns: &Columns, row: &[String], row_no: usize) -> Result<Option<TitleRecord>> {
    if row.iter().all(|c| c.trim().is_empty()) {
        return Ok(None);
    }

    let raw_type = cell(row, Some(columns.kind)).unwrap_or("");
    let kind: TitleType = raw_type.parse().map_err(|_| CatalogError::UnknownType {
        row: row_no,
        value: raw_type.to_string(),
    })?;

    let title = cell(row, Some(columns.title))
        .ok_or(CatalogError::MissingTitle { row: row_no })?
        .to_string();

    let raw_year = cell(row, Some(columns.release_year)).unwrap_or("");
    let release_year = parse_year(raw_year).ok_or_else(|| CatalogError::InvalidYear {
        row: row_no,
        value: raw_year.to_string(),
    })?;

    let text = |idx: Option<usize>| cell(row, idx).map(str::to_string);

    Ok(Some(TitleRecord {
        title,
        kind,
        description: text(columns.description).unwrap_or_default(),
        listed_in: text(columns.listed_in),
        rating: text(columns.rating),
        duration: text(columns.duration),
        release_year,
        country: text(columns.country),
    }))
}

/// Trimmed, non-empty cell value. Short rows read as empty.
fn cell(row: &[String], idx: Option<usize>) -> Option<&str> {
    let value = row.get(idx?)?.trim();
    (!value.is_empty()).then_some(value)
}

/// Accepts `2019` as well as the `2019.0` spreadsheets like to produce.
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    let f = s.parse::<f64>().ok()?;
    if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet reader
// ---------------------------------------------------------------------------

fn read_spreadsheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(CatalogError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|r| r.iter().map(spreadsheet_cell_text).collect())
        .unwrap_or_default();
    let rows = rows
        .map(|r| r.iter().map(spreadsheet_cell_text).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

fn spreadsheet_cell_text(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // Numeric cells such as years come back as floats.
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "type": "Movie", "title": "Blue Planet", "release_year": 2001, ... },
///   ...
/// ]
/// ```
///
/// Columns are the union of all record keys.
fn read_json(path: &Path) -> Result<RawTable> {
    let root: JsonValue = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let records = root
        .as_array()
        .ok_or_else(|| CatalogError::Malformed("expected a top-level JSON array".into()))?;

    let mut headers: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| CatalogError::Malformed(format!("record {i} is not a JSON object")))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(RawTable { headers, rows })
}

fn json_cell_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). Every column is rendered to text and
/// validated like any other format.
fn read_parquet(path: &Path) -> Result<RawTable> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut table = RawTable::default();
    for batch_result in reader {
        let batch = batch_result?;
        if table.headers.is_empty() {
            table.headers = batch
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().clone())
                .collect();
        }

        for row in 0..batch.num_rows() {
            let mut cells = Vec::with_capacity(batch.num_columns());
            for col in batch.columns() {
                if col.is_null(row) {
                    cells.push(String::new());
                } else {
                    cells.push(array_value_to_string(col, row)?);
                }
            }
            table.rows.push(cells);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    fn temp_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn builds_records_with_optional_fields() {
        let t = table(
            &["Type", " title ", "release_year", "listed_in", "country", "rating"],
            &[
                &["Movie", "Blue Planet", "2001", "Documentaries, Dramas", "", "PG"],
                &["TV Show", "Night Shift", "2019.0", "", "France, Belgium", ""],
            ],
        );
        let catalog = build_catalog(&t).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = &catalog.records[0];
        assert_eq!(first.kind, TitleType::Movie);
        assert_eq!(first.release_year, 2001);
        assert_eq!(first.country, None);
        assert_eq!(first.rating.as_deref(), Some("PG"));
        assert_eq!(first.duration, None);
        assert_eq!(first.description, "");

        let second = &catalog.records[1];
        assert_eq!(second.kind, TitleType::TvShow);
        assert_eq!(second.release_year, 2019);
        assert_eq!(second.listed_in, None);
        assert_eq!(second.countries().collect::<Vec<_>>(), vec!["France", "Belgium"]);
    }

    #[test]
    fn skips_blank_rows() {
        let t = table(
            &["type", "title", "release_year"],
            &[&["", " ", ""], &["Movie", "A", "2000"]],
        );
        assert_eq!(build_catalog(&t).unwrap().len(), 1);
    }

    #[test]
    fn rejects_missing_required_column() {
        let t = table(&["type", "release_year"], &[&["Movie", "2000"]]);
        assert!(matches!(
            build_catalog(&t),
            Err(CatalogError::MissingColumn("title"))
        ));
    }

    #[test]
    fn rejects_unknown_type_and_bad_year() {
        let t = table(
            &["type", "title", "release_year"],
            &[&["Movie", "A", "2000"], &["Podcast", "B", "2001"]],
        );
        match build_catalog(&t) {
            Err(CatalogError::UnknownType { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "Podcast");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let t = table(&["type", "title", "release_year"], &[&["Movie", "A", "20x0"]]);
        assert!(matches!(
            build_catalog(&t),
            Err(CatalogError::InvalidYear { row: 1, .. })
        ));

        let t = table(&["type", "title", "release_year"], &[&["Movie", "", "2000"]]);
        assert!(matches!(
            build_catalog(&t),
            Err(CatalogError::MissingTitle { row: 1 })
        ));
    }

    #[test]
    fn parses_years() {
        assert_eq!(parse_year("2019"), Some(2019));
        assert_eq!(parse_year("2019.0"), Some(2019));
        assert_eq!(parse_year("2019.5"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn loads_csv_file() {
        let file = temp_file(
            ".csv",
            "show_id,type,title,description,listed_in,rating,duration,release_year,country\n\
             s1,Movie,Blue Planet,Ocean life,\"Documentaries, International Movies\",TV-G,90 min,2001,\"United Kingdom, United States\"\n\
             s2,TV Show,Night Shift,Hospital drama,TV Dramas,TV-MA,2 Seasons,2019,\n",
        );
        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records[0].genres().count(), 2);
        assert_eq!(catalog.records[0].duration.as_deref(), Some("90 min"));
        assert_eq!(catalog.records[1].country, None);
    }

    #[test]
    fn loads_xlsx_file() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in ["type", "title", "release_year", "country", "listed_in"]
            .into_iter()
            .enumerate()
        {
            sheet.write_string(0, col as u16, name).unwrap();
        }
        // Numeric title and float year, country left blank.
        sheet.write_string(1, 0, "Movie").unwrap();
        sheet.write_number(1, 1, 1922.0).unwrap();
        sheet.write_number(1, 2, 2017.0).unwrap();
        sheet.write_string(1, 4, "Horror Movies").unwrap();
        sheet.write_string(2, 0, "TV Show").unwrap();
        sheet.write_string(2, 1, "Dark").unwrap();
        sheet.write_number(2, 2, 2017.0).unwrap();
        sheet.write_string(2, 3, "Germany").unwrap();
        sheet.write_string(2, 4, "TV Dramas").unwrap();
        workbook.save(file.path()).unwrap();

        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = catalog.get(0).unwrap();
        assert_eq!(first.title, "1922");
        assert_eq!(first.kind, TitleType::Movie);
        assert_eq!(first.release_year, 2017);
        assert_eq!(first.country, None);

        let second = catalog.get(1).unwrap();
        assert_eq!(second.kind, TitleType::TvShow);
        assert_eq!(second.country.as_deref(), Some("Germany"));
        assert_eq!(second.genres().collect::<Vec<_>>(), vec!["TV Dramas"]);
    }

    #[test]
    fn loads_json_file() {
        let file = temp_file(
            ".json",
            r#"[
                {"type": "Movie", "title": "Blue Planet", "release_year": 2001, "rating": null},
                {"type": "TV Show", "title": "Night Shift", "release_year": 2019.0, "country": "France"}
            ]"#,
        );
        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records[0].rating, None);
        assert_eq!(catalog.records[1].release_year, 2019);
        assert_eq!(catalog.records[1].country.as_deref(), Some("France"));
    }

    #[test]
    fn rejects_non_array_json_and_unknown_extension() {
        let file = temp_file(".json", r#"{"type": "Movie"}"#);
        assert!(matches!(
            load_file(file.path()),
            Err(CatalogError::Malformed(_))
        ));

        let file = temp_file(".txt", "type,title,release_year\n");
        assert!(matches!(
            load_file(file.path()),
            Err(CatalogError::UnsupportedExtension(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn loads_parquet_file() {
        use std::sync::Arc;

        use arrow::array::{ArrayRef, Int64Array, StringArray};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let columns: Vec<(&str, ArrayRef)> = vec![
            ("type", Arc::new(StringArray::from(vec!["Movie", "TV Show"]))),
            ("title", Arc::new(StringArray::from(vec!["Blue Planet", "Night Shift"]))),
            ("release_year", Arc::new(Int64Array::from(vec![2001, 2019]))),
            ("country", Arc::new(StringArray::from(vec![Some("Japan"), None]))),
        ];
        let batch = RecordBatch::try_from_iter(columns).unwrap();

        let file = tempfile::Builder::new()
            .suffix(".parquet")
            .tempfile()
            .unwrap();
        let mut writer = ArrowWriter::try_new(File::create(file.path()).unwrap(), batch.schema(), None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records[0].country.as_deref(), Some("Japan"));
        assert_eq!(catalog.records[1].kind, TitleType::TvShow);
        assert_eq!(catalog.records[1].release_year, 2019);
        assert_eq!(catalog.records[1].country, None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_) | CatalogError::Io(_)));
    }
}
