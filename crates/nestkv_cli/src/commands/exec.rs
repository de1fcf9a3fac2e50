//! Runs commands from a script file.

use crate::commands::language::{self, Command};
use nestkv_core::{Config, Database};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Runs every command in the script against a fresh database, printing
/// one outcome per line.
///
/// Blank lines and `#` comments are skipped. An unparsable command
/// aborts the run with an error naming the offending line; engine
/// errors print and the run continues, matching the shell.
pub fn run(path: &Path, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let script = fs::read_to_string(path)?;
    let mut db = Database::with_config(config);
    let mut executed = 0usize;

    for (number, line) in script.lines().enumerate() {
        match language::parse_line(line) {
            Ok(None) => {}
            Ok(Some(Command::Exit)) => break,
            Ok(Some(command)) => {
                println!("{}", language::apply(&mut db, &command));
                executed += 1;
            }
            Err(message) => return Err(format!("line {}: {message}", number + 1).into()),
        }
    }

    debug!("script {:?} finished ({} commands)", path, executed);
    Ok(())
}
