use super::Session;
use ltrfl_storage::{write_jsonl, Paths};
use std::path::{Path, PathBuf};

/// Write this month's history to `out` (or the default export path)
pub fn export(paths: &Paths, out: Option<&Path>) -> anyhow::Result<(PathBuf, usize)> {
    let session = Session::open(paths)?;
    let target = match out {
        Some(p) => p.to_path_buf(),
        None => {
            let month = session.store.state().current_month_start.format("%Y-%m");
            paths.exports_dir().join(format!("generations-{month}.jsonl"))
        }
    };

    let written = write_jsonl(&target, session.store.history())?;
    tracing::info!(path = %target.display(), records = written, "history exported");
    Ok((target, written))
}

pub fn run(paths: &Paths, out: Option<&Path>) -> anyhow::Result<()> {
    let (target, written) = export(paths, out)?;
    println!("Exported {} generations to {}", written, target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltrfl_core::{GenerationInput, GenerationRecord};
    use ltrfl_storage::read_jsonl;

    #[test]
    fn test_export_default_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        crate::commands::record::record(&paths, GenerationInput::new("flux", "Flux", 10, 100))
            .unwrap();
        crate::commands::record::record(
            &paths,
            GenerationInput::new("kling", "Kling", 90, 4000).with_content_type("video"),
        )
        .unwrap();

        let (target, written) = export(&paths, None).unwrap();
        assert_eq!(written, 2);
        assert!(target.starts_with(paths.exports_dir()));

        let rows: Vec<GenerationRecord> = read_jsonl(&target).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].content_type.as_deref(), Some("video"));
    }

    #[test]
    fn test_export_empty_history_writes_empty_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        let out = temp.path().join("out.jsonl");

        let (_, written) = export(&paths, Some(&out)).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "");
    }
}
