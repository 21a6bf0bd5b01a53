use super::Session;
use ltrfl_storage::Paths;

pub fn status_json(paths: &Paths) -> anyhow::Result<serde_json::Value> {
    let session = Session::open(paths)?;
    let status = session.store.budget_status();
    let level = status.level(session.store.config().warning_percent);

    let mut output = serde_json::to_value(&status)?;
    output["level"] = serde_json::to_value(level)?;
    Ok(output)
}

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&status_json(paths)?)?);
    Ok(())
}
