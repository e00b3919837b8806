use anyhow::Result;
use go_sessions::atm::{run_session, Account};
use go_sessions::logging::init_tracing;
use std::io;

fn main() -> Result<()> {
    init_tracing();

    let mut account = Account::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut account, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
