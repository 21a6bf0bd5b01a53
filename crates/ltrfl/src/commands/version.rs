pub fn run() -> anyhow::Result<()> {
    println!("ltrfl {}", env!("CARGO_PKG_VERSION"));
    println!("Generation budget and pipeline leaderboard for the TMH AI Content Engine");
    Ok(())
}
