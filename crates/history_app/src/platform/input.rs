use history_core::Msg;

/// One line typed at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    /// Record a new scan, standing in for the scanner screen.
    Add { text: String, format: String },
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                    redraw the history
  open N                  return row N to the scanner
  select N                start multi-select on row N
  check N | uncheck N     toggle row N while selecting
  delete-selected | done  finish multi-select
  delete N                delete row N
  export | clear          menu actions
  yes | no                answer a confirmation
  add TEXT [FORMAT]       record a scan
  quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Dispatch(Msg::NoOp));
    };
    let rest: Vec<&str> = words.collect();

    let command = match verb {
        "list" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "open" => Command::Dispatch(Msg::RowTapped {
            position: position(&rest)?,
        }),
        "select" => Command::Dispatch(Msg::RowLongPressed {
            position: position(&rest)?,
        }),
        "check" => Command::Dispatch(Msg::RowCheckChanged {
            position: position(&rest)?,
            checked: true,
        }),
        "uncheck" => Command::Dispatch(Msg::RowCheckChanged {
            position: position(&rest)?,
            checked: false,
        }),
        "delete" => Command::Dispatch(Msg::RowDeleteRequested {
            position: position(&rest)?,
        }),
        "delete-selected" => Command::Dispatch(Msg::DeleteSelectedClicked),
        "done" | "cancel" => Command::Dispatch(Msg::SelectionDismissed),
        "export" => Command::Dispatch(Msg::ExportClicked),
        "clear" => Command::Dispatch(Msg::ClearAllClicked),
        "yes" | "y" => Command::Dispatch(Msg::ConfirmationAccepted),
        "no" | "n" => Command::Dispatch(Msg::ConfirmationCancelled),
        "add" => match rest.as_slice() {
            [] => return Err("add needs the scanned text".to_string()),
            [text] => Command::Add {
                text: (*text).to_string(),
                format: "QR_CODE".to_string(),
            },
            [text, format, ..] => Command::Add {
                text: (*text).to_string(),
                format: (*format).to_string(),
            },
        },
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(command)
}

fn position(args: &[&str]) -> Result<usize, String> {
    let raw = args.first().ok_or("missing row number")?;
    raw.parse()
        .map_err(|_| format!("`{raw}` is not a row number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_commands_carry_position() {
        assert_eq!(
            parse_command("check 3").unwrap(),
            Command::Dispatch(Msg::RowCheckChanged {
                position: 3,
                checked: true
            })
        );
        assert_eq!(
            parse_command("  select 0 ").unwrap(),
            Command::Dispatch(Msg::RowLongPressed { position: 0 })
        );
    }

    #[test]
    fn blank_line_is_noop() {
        assert_eq!(parse_command("   ").unwrap(), Command::Dispatch(Msg::NoOp));
    }

    #[test]
    fn add_defaults_format() {
        assert_eq!(
            parse_command("add https://example.com").unwrap(),
            Command::Add {
                text: "https://example.com".to_string(),
                format: "QR_CODE".to_string(),
            }
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse_command("delete x").is_err());
        assert!(parse_command("delete").is_err());
        assert!(parse_command("frobnicate").is_err());
    }
}
