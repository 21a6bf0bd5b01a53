use ltrfl_core::BudgetConfig;
use ltrfl_storage::Paths;

/// Write a default config.json; returns false if one already exists
pub fn init(paths: &Paths) -> anyhow::Result<bool> {
    let config_path = paths.config_file();
    if config_path.exists() {
        return Ok(false);
    }
    BudgetConfig::new().save(&config_path)?;
    std::fs::create_dir_all(paths.slots_dir())?;
    Ok(true)
}

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let config_path = paths.config_file();
    if init(paths)? {
        println!("✓ Wrote default config to {}", config_path.display());
    } else {
        println!("Config already present at {}", config_path.display());
    }
    let config = BudgetConfig::load(&config_path);
    println!("  monthly budget: {} cents", config.monthly_budget_cents);
    println!("  warning at:     {:.0}%", config.warning_percent);
    println!("  storage slot:   {}", config.storage_slot);
    Ok(())
}
