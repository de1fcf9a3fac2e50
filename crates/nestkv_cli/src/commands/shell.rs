//! Interactive shell over an in-memory database.

use crate::commands::language::{self, Command};
use nestkv_core::{Config, Database};
use std::io::{self, BufRead, Write};

/// Runs the interactive shell until `EXIT` or end of input.
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::with_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("nestkv shell (HELP for commands, EXIT to leave)");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match language::parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Command::Exit)) => {
                println!("bye");
                break;
            }
            Ok(Some(command)) => println!("{}", language::apply(&mut db, &command)),
            Err(message) => println!("error: {message}"),
        }
    }

    Ok(())
}
