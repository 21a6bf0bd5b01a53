use super::Session;
use ltrfl_storage::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let mut session = Session::open(paths)?;
    session.store.reset_month();
    session.save()?;
    println!("Budget month reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltrfl_core::GenerationInput;

    #[test]
    fn test_reset_clears_spend() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        crate::commands::record::record(&paths, GenerationInput::new("p", "P", 300, 10)).unwrap();

        run(&paths).unwrap();

        let session = Session::open(&paths).unwrap();
        assert!(session.store.history().is_empty());
        assert_eq!(session.store.budget_status().spent_cents, 0);
        assert_eq!(session.store.pipeline_stats("p").unwrap().total_generations, 1);
    }
}
