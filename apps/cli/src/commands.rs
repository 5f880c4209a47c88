//! Operator commands read from the interactive prompt.

use anyhow::{bail, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { flow_id: String },
    /// Node id, or 1-based row number as printed by `show`.
    Toggle { target: String },
    ToggleAll,
    Submit,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <flow-id>   look up the endpoints of a flow
  toggle <node|row>  select or deselect one endpoint
  all                select everything, or clear a full selection
  submit             send the selection for documentation
  show               print the current state
  help               print this text
  quit               leave";

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        // The flow id is forwarded verbatim, so an empty one reaches the
        // workflow and gets its field-level error.
        "search" | "s" => Command::Search {
            flow_id: rest.to_string(),
        },
        "toggle" | "t" => {
            if rest.is_empty() {
                bail!("toggle needs a node id or row number");
            }
            Command::Toggle {
                target: rest.to_string(),
            }
        }
        "all" | "a" => Command::ToggleAll,
        "submit" => Command::Submit,
        "show" | "ls" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command '{other}'; type 'help'"),
    };
    Ok(command)
}
