use super::Session;
use anyhow::Context;
use ltrfl_core::GenerationRecord;
use ltrfl_storage::{read_jsonl, Paths};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct HistoryOptions {
    pub pipeline: Option<String>,
    pub limit: usize,
    pub stats: bool,
    /// Exported JSONL to read instead of the live store
    pub file: Option<PathBuf>,
}

/// Records from an export file, or the live month when no file is given
fn load_records(paths: &Paths, file: Option<&Path>) -> anyhow::Result<Vec<GenerationRecord>> {
    match file {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("export file not found: {}", path.display());
            }
            read_jsonl(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => Ok(Session::open(paths)?.store.history().to_vec()),
    }
}

fn filter_records<'a>(
    records: &'a [GenerationRecord],
    pipeline: Option<&str>,
) -> Vec<&'a GenerationRecord> {
    records
        .iter()
        .filter(|r| pipeline.is_none() || pipeline == Some(r.pipeline_id.as_str()))
        .collect()
}

fn compute_stats(records: &[&GenerationRecord]) -> String {
    if records.is_empty() {
        return "No generations to analyze.".to_string();
    }
    let total = records.len();
    let total_cost: i64 = records.iter().map(|r| r.cost_cents).sum();
    let avg_latency = records.iter().map(|r| r.latency_ms as f64).sum::<f64>() / total as f64;
    let winners = records.iter().filter(|r| r.was_winner).count();

    let mut by_content_type: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *by_content_type
            .entry(r.content_type.as_deref().unwrap_or("untagged"))
            .or_insert(0) += 1;
    }
    let breakdown = by_content_type
        .iter()
        .map(|(kind, n)| format!("{kind}={n}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Total generations: {}\n\
         Total cost: {} cents\n\
         Avg latency: {:.0} ms\n\
         Winners: {}\n\
         By content type: {}",
        total, total_cost, avg_latency, winners, breakdown
    )
}

pub fn run(paths: &Paths, options: &HistoryOptions) -> anyhow::Result<()> {
    let records = load_records(paths, options.file.as_deref())?;
    let filtered = filter_records(&records, options.pipeline.as_deref());

    if filtered.is_empty() {
        println!("No generation history");
        return Ok(());
    }

    if options.stats {
        println!("{}", compute_stats(&filtered));
        return Ok(());
    }

    let display: Vec<_> = filtered.into_iter().rev().take(options.limit).collect();
    println!("Recent Generations (last {})", display.len());
    println!("===========================");
    for r in &display {
        println!(
            "  {} | {} | {} | {}c {}ms{}{}",
            r.timestamp.format("%Y-%m-%d %H:%M"),
            r.id,
            r.pipeline_name,
            r.cost_cents,
            r.latency_ms,
            r.city_id
                .as_deref()
                .map(|c| format!(" city:{c}"))
                .unwrap_or_default(),
            if r.was_winner { " [winner]" } else { "" },
        );
    }
    Ok(())
}
