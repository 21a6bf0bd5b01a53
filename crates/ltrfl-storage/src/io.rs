//! Atomic file writes and JSONL export/import

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Write data atomically using temp file + rename
///
/// The temp file sits next to the target so the rename never crosses a
/// filesystem boundary.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Replace `path` with one JSON document per line, atomically
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> std::io::Result<usize> {
    let mut buf = String::new();
    for record in records {
        buf.push_str(&serde_json::to_string(record)?);
        buf.push('\n');
    }
    atomic_write(path, buf.as_bytes())?;
    Ok(records.len())
}

/// Read all records from a JSONL file, skipping blank and malformed lines
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    line = lineno + 1,
                    "skipping malformed record: {e}"
                );
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Row {
        id: u32,
        pipeline: String,
    }

    #[test]
    fn test_write_jsonl_replaces_existing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("export.jsonl");
        std::fs::write(&path, "stale\n").unwrap();

        let rows = vec![
            Row {
                id: 1,
                pipeline: "flux-dev".to_string(),
            },
            Row {
                id: 2,
                pipeline: "sdxl-lightning".to_string(),
            },
        ];
        let written = write_jsonl(&path, &rows).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("stale"));

        let read_back: Vec<Row> = read_jsonl(&path).unwrap();
        assert_eq!(read_back, rows);
    }

    #[test]
    fn test_read_jsonl_skips_malformed_lines() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("mixed.jsonl");
        std::fs::write(
            &path,
            "{\"id\":1,\"pipeline\":\"a\"}\n\nnot json\n{\"id\":2,\"pipeline\":\"b\"}\n",
        )
        .unwrap();

        let rows: Vec<Row> = read_jsonl(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].pipeline, "b");
    }

    #[test]
    fn test_read_jsonl_missing_file_is_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let rows: Vec<Row> = read_jsonl(&temp.path().join("absent.jsonl")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_atomic_write_creates_parent_and_leaves_no_temp() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("slot.json");

        atomic_write(&path, b"{}").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
        assert!(!temp.path().join("nested").join("slot.json.tmp").exists());
    }
}
