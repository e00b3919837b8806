use anyhow::{Context, Result};
use go_sessions::logging::init_tracing;
use go_sessions::user::parse_user_line;
use std::io::{self, BufRead};
use std::path::Path;

fn main() -> Result<()> {
    init_tracing();

    println!("Enter: name age email phone");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading user details")?;

    let user = parse_user_line(&line)?;
    println!("{}", user.summary());

    let path = user
        .write_to(Path::new("."))
        .with_context(|| format!("writing {}", user.file_name()))?;
    println!("Saved to {}", path.display());
    Ok(())
}
