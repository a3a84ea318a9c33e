use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use rulega_data::{BinaryRecord, FloatRecord, ParseError, parse};

/// Write `value` as pretty JSON to `output_path`, or to stdout when it is `None`
pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_json(BufWriter::new(file), value, &path.display().to_string())
        }
        None => write_json(io::stdout().lock(), value, "stdout"),
    }
}

fn write_json<W, T>(mut writer: W, value: &T, target: &str) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {target}"))?;
    writeln!(writer).with_context(|| format!("Failed to write newline after JSON to {target}"))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {target}"))?;
    Ok(())
}

fn read_records_file<T, P>(
    file_kind: &str,
    path: P,
    parser: fn(&str) -> Result<Vec<T>, ParseError>,
) -> anyhow::Result<Vec<T>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", file_kind, path.display()))?;
    let records = parser(&text)
        .with_context(|| format!("Failed to parse {} file: {}", file_kind, path.display()))?;
    Ok(records)
}

/// Read binary records (`<bits> <label>` per line) from a text file
pub fn read_binary_records_file<P>(path: P) -> anyhow::Result<Vec<BinaryRecord>>
where
    P: AsRef<Path>,
{
    read_records_file("binary records", path, parse::parse_binary_records)
}

/// Read float records (values followed by a label per line) from a text file
pub fn read_float_records_file<P>(path: P) -> anyhow::Result<Vec<FloatRecord>>
where
    P: AsRef<Path>,
{
    read_records_file("float records", path, parse::parse_float_records)
}

/// Name a report after the stem of its input file
pub fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "records".to_owned(), |stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_name() {
        assert_eq!(dataset_name(Path::new("data/data1.txt")), "data1");
        assert_eq!(dataset_name(Path::new("records")), "records");
        assert_eq!(dataset_name(Path::new("/")), "records");
    }

    #[test]
    fn test_write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &vec![1, 2], "buffer").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("]\n"));
        assert_eq!(serde_json::from_str::<Vec<u32>>(&text).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_binary_records_file("no/such/records.txt").unwrap_err();
        assert!(format!("{err:#}").contains("no/such/records.txt"));
    }
}
