use super::Session;
use ltrfl_core::{BudgetLevel, GenerationInput};
use ltrfl_storage::Paths;

/// Append one generation, persist, and return its id
pub fn record(paths: &Paths, input: GenerationInput) -> anyhow::Result<String> {
    let mut session = Session::open(paths)?;
    let id = session.store.record_generation(input);
    session.save()?;

    let status = session.store.budget_status();
    match status.level(session.store.config().warning_percent) {
        BudgetLevel::Exhausted => tracing::warn!(
            spent_cents = status.spent_cents,
            budget_cents = status.total_budget_cents,
            "monthly budget exhausted; further generations are over budget"
        ),
        BudgetLevel::Warning => tracing::warn!(
            percent_used = format!("{:.1}", status.percent_used),
            remaining_cents = status.remaining_cents,
            "monthly budget nearly used"
        ),
        BudgetLevel::Ok => {}
    }

    Ok(id)
}

pub fn run(paths: &Paths, input: GenerationInput) -> anyhow::Result<()> {
    println!("{}", record(paths, input)?);
    Ok(())
}
