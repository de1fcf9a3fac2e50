//! The command language shared by `shell` and `exec`.

use nestkv_core::Database;

/// Command reference printed by `HELP`.
const HELP: &str = "\
commands:
  PUT <key> <value>   store a value under a key
  GET <key>           print the value for a key
  DEL <key>           delete a key
  COUNT <value>       print how many keys hold a value
  BEGIN               open a transaction level
  COMMIT              commit every open level
  ROLLBACK            discard the innermost level
  CLEAR               drop all entries and open levels
  DEPTH               print the number of open levels
  HELP                show this reference
  EXIT                leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a value under a key.
    Put {
        /// Key to store under.
        key: String,
        /// Value to store.
        value: String,
    },
    /// Look up a key.
    Get {
        /// Key to look up.
        key: String,
    },
    /// Delete a key.
    Del {
        /// Key to delete.
        key: String,
    },
    /// Count keys holding a value.
    Count {
        /// Value to count.
        value: String,
    },
    /// Open a transaction level.
    Begin,
    /// Commit every open level.
    Commit,
    /// Discard the innermost level.
    Rollback,
    /// Drop all entries and open levels.
    Clear,
    /// Show the number of open levels.
    Depth,
    /// Show the command reference.
    Help,
    /// Leave the session.
    Exit,
}

/// Parses one line of input.
///
/// Blank lines and `#` comments parse to `None`. Verbs are matched
/// case-insensitively.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let verb = match parts.next() {
        Some(verb) => verb.to_ascii_uppercase(),
        None => return Ok(None),
    };
    let args: Vec<&str> = parts.collect();

    let command = match (verb.as_str(), args.as_slice()) {
        ("PUT", [key, value]) => Command::Put {
            key: (*key).to_owned(),
            value: (*value).to_owned(),
        },
        ("GET", [key]) => Command::Get {
            key: (*key).to_owned(),
        },
        ("DEL", [key]) => Command::Del {
            key: (*key).to_owned(),
        },
        ("COUNT", [value]) => Command::Count {
            value: (*value).to_owned(),
        },
        ("BEGIN", []) => Command::Begin,
        ("COMMIT", []) => Command::Commit,
        ("ROLLBACK", []) => Command::Rollback,
        ("CLEAR", []) => Command::Clear,
        ("DEPTH", []) => Command::Depth,
        ("HELP", []) => Command::Help,
        ("EXIT", []) | ("QUIT", []) => Command::Exit,
        (
            "PUT" | "GET" | "DEL" | "COUNT" | "BEGIN" | "COMMIT" | "ROLLBACK" | "CLEAR" | "DEPTH"
            | "HELP" | "EXIT" | "QUIT",
            _,
        ) => {
            return Err(format!("wrong number of arguments for {verb}"));
        }
        _ => return Err(format!("unknown command: {verb}")),
    };
    Ok(Some(command))
}

/// Applies a command to the database and renders the outcome.
///
/// Engine errors render as `error:` lines instead of propagating, so a
/// failed command leaves the session running.
pub fn apply(db: &mut Database, command: &Command) -> String {
    match command {
        Command::Put { key, value } => {
            db.put(key.clone(), value.clone());
            "ok".to_owned()
        }
        Command::Get { key } => match db.retrieve(key) {
            Ok(entry) => entry.value,
            Err(err) => format!("error: {err}"),
        },
        Command::Del { key } => match db.remove(key) {
            Ok(()) => "ok".to_owned(),
            Err(err) => format!("error: {err}"),
        },
        Command::Count { value } => db.count_entries(value).to_string(),
        Command::Begin => match db.begin() {
            Ok(()) => format!("ok (depth {})", db.open_transactions()),
            Err(err) => format!("error: {err}"),
        },
        Command::Commit => {
            db.commit();
            "ok".to_owned()
        }
        Command::Rollback => match db.rollback() {
            Ok(()) => format!("ok (depth {})", db.open_transactions()),
            Err(err) => format!("error: {err}"),
        },
        Command::Clear => {
            db.clear_all();
            "ok".to_owned()
        }
        Command::Depth => db.open_transactions().to_string(),
        Command::Help => HELP.to_owned(),
        Command::Exit => "bye".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(
            parse_line("put a 1").unwrap(),
            Some(Command::Put {
                key: "a".into(),
                value: "1".into()
            })
        );
        assert_eq!(parse_line("Begin").unwrap(), Some(Command::Begin));
        assert_eq!(parse_line("EXIT").unwrap(), Some(Command::Exit));
        assert_eq!(parse_line("quit").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# a comment").unwrap(), None);
    }

    #[test]
    fn unknown_verbs_are_reported() {
        let err = parse_line("frob a").unwrap_err();
        assert_eq!(err, "unknown command: FROB");
    }

    #[test]
    fn wrong_arity_is_reported() {
        assert!(parse_line("put a").is_err());
        assert!(parse_line("get").is_err());
        assert!(parse_line("begin now").is_err());
    }

    #[test]
    fn apply_renders_lookups() {
        let mut db = Database::new();
        assert_eq!(
            apply(
                &mut db,
                &Command::Put {
                    key: "a".into(),
                    value: "1".into()
                }
            ),
            "ok"
        );
        assert_eq!(apply(&mut db, &Command::Get { key: "a".into() }), "1");
        assert_eq!(
            apply(&mut db, &Command::Get { key: "b".into() }),
            "error: no entry found for key: b"
        );
        assert_eq!(apply(&mut db, &Command::Count { value: "1".into() }), "1");
    }

    #[test]
    fn apply_renders_transaction_outcomes() {
        let mut db = Database::new();
        assert_eq!(apply(&mut db, &Command::Begin), "ok (depth 2)");
        assert_eq!(apply(&mut db, &Command::Depth), "2");
        assert_eq!(apply(&mut db, &Command::Rollback), "ok (depth 1)");
        assert_eq!(apply(&mut db, &Command::Rollback), "ok (depth 0)");
        assert_eq!(
            apply(&mut db, &Command::Rollback),
            "error: no open transaction to roll back"
        );
    }

    #[test]
    fn session_transcript() {
        let mut db = Database::new();
        let script = [
            ("PUT a 1", "ok"),
            ("BEGIN", "ok (depth 2)"),
            ("PUT a 2", "ok"),
            ("GET a", "2"),
            ("ROLLBACK", "ok (depth 1)"),
            ("GET a", "1"),
            ("COMMIT", "ok"),
            ("DEPTH", "0"),
        ];
        for (line, expected) in script {
            let command = parse_line(line).unwrap().unwrap();
            assert_eq!(apply(&mut db, &command), expected, "line: {line}");
        }
    }
}
