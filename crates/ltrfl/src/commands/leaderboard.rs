use super::Session;
use ltrfl_core::LeaderboardEntry;
use ltrfl_storage::Paths;

fn render_table(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No pipelines recorded".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.pipeline_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Pipeline".len());

    let mut out = format!(
        "{:>4}  {:<name_width$}  {:>6}  {:>8}  {:>10}  {:>10}\n",
        "#", "Pipeline", "Gens", "Win %", "Avg cost", "Avg ms"
    );
    for (rank, e) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>6}  {:>7.1}%  {:>9.2}c  {:>10.0}\n",
            rank + 1,
            e.pipeline_name,
            e.total_generations,
            e.win_rate,
            e.avg_cost_cents,
            e.avg_latency_ms,
        ));
    }
    out
}

pub fn run(paths: &Paths, json: bool) -> anyhow::Result<()> {
    let session = Session::open(paths)?;
    let entries = session.store.pipeline_leaderboard();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_table(&entries));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, win_rate: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            pipeline_id: id.to_string(),
            pipeline_name: name.to_string(),
            total_generations: 3,
            win_rate,
            avg_cost_cents: 200.0,
            avg_latency_ms: 950.0,
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "No pipelines recorded");
    }

    #[test]
    fn test_render_rows_in_order() {
        let table = render_table(&[
            entry("flux", "Flux Pro", 66.666),
            entry("sdxl", "SDXL Lightning", 33.333),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Pipeline"));
        assert!(lines[1].contains("Flux Pro"));
        assert!(lines[1].contains("66.7%"));
        assert!(lines[2].contains("SDXL Lightning"));
        assert!(lines[2].contains("200.00c"));
    }
}
