use super::Session;
use ltrfl_storage::Paths;

pub fn run(paths: &Paths, id: &str) -> anyhow::Result<()> {
    let mut session = Session::open(paths)?;
    if session.store.record_winner(id) {
        session.save()?;
    }
    Ok(())
}
