use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{
    collector::TokenRow,
    effects::EffectKind,
    tokens::TokenKind,
};

/// One line of input to an interactive session.
///
/// Row numbers are typed 1-based and stored 0-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(TokenRow),
    Remove(usize),
    SetKind {
        row: usize,
        kind: TokenKind,
        custom: Option<String>,
    },
    SetCustom {
        row: usize,
        name: String,
    },
    SetCount {
        row: usize,
        value: String,
    },
    Toggle(EffectKind),
    Set {
        effect: EffectKind,
        active: bool,
    },
    Reset,
    Show,
    Trace,
    Json,
    Help,
    Quit,
}

impl Command {
    pub fn help() -> String {
        let effects = EffectKind::iter()
            .map(|kind| format!("{} ({})", kind.id(), kind))
            .join(", ");

        format!(
            "Commands:
  add [type] [count] [name..]   add a row (defaults to 1 Food)
  remove <row>                  remove a row
  type <row> <type> [name..]    change a row's token type
  custom <row> <name..>         rename a custom row
  count <row> <count>           change a row's count
  toggle|on|off <effect>        switch an effect
  reset                         clear effects and rows
  show | trace | json           print the result
  help | quit
Token types: {}
Effects: {}",
            TokenKind::iter().join(", "),
            effects
        )
    }
}

fn parse_row(word: Option<&str>) -> anyhow::Result<usize> {
    let word = word.ok_or_else(|| anyhow!("Expected a row number"))?;
    let row = word
        .parse::<usize>()
        .with_context(|| format!("Parsing row number {}", word))?;
    if row == 0 {
        bail!("Rows are numbered from 1");
    }

    Ok(row - 1)
}

fn parse_add(words: &[&str]) -> anyhow::Result<TokenRow> {
    let mut words = words;
    let kind = match words.first().map(|word| TokenKind::from_str(word)) {
        Some(Ok(kind)) => {
            words = &words[1..];
            Some(kind)
        }
        _ => None,
    };

    let mut count = 1.0;
    if let Some(word) = words.first() {
        if word.parse::<f64>().is_ok() {
            count = TokenRow::parse_count(word);
            words = &words[1..];
        }
    }

    let custom = words.iter().join(" ");
    let kind = match kind {
        Some(TokenKind::Custom) | None if !custom.is_empty() => TokenKind::Custom,
        Some(kind) if !custom.is_empty() => bail!("Only custom tokens take a name, not {}", kind),
        Some(kind) => kind,
        None => TokenKind::Food,
    };

    Ok(TokenRow {
        kind,
        custom,
        count,
    })
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = line.split_whitespace().collect_vec();
        let Some((verb, args)) = words.split_first() else {
            bail!("Empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => Command::Add(parse_add(args)?),
            "remove" | "rm" => Command::Remove(parse_row(args.first().copied())?),
            "type" => {
                let row = parse_row(args.first().copied())?;
                let kind = TokenKind::parse(
                    args.get(1)
                        .ok_or_else(|| anyhow!("Expected a token type"))?,
                )?;
                let name = args.iter().skip(2).join(" ");
                if !name.is_empty() && kind != TokenKind::Custom {
                    bail!("Only custom tokens take a name, not {}", kind);
                }
                Command::SetKind {
                    row,
                    kind,
                    custom: (!name.is_empty()).then_some(name),
                }
            }
            "custom" => Command::SetCustom {
                row: parse_row(args.first().copied())?,
                name: args.iter().skip(1).join(" "),
            },
            "count" => Command::SetCount {
                row: parse_row(args.first().copied())?,
                value: args.iter().skip(1).join(" "),
            },
            "toggle" | "on" | "off" => {
                if args.is_empty() {
                    bail!("Expected an effect");
                }
                let effect = EffectKind::parse(&args.join(" "))?;
                match verb.to_ascii_lowercase().as_str() {
                    "toggle" => Command::Toggle(effect),
                    verb => Command::Set {
                        effect,
                        active: verb == "on",
                    },
                }
            }
            "reset" => Command::Reset,
            "show" => Command::Show,
            "trace" => Command::Trace,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("Unknown command {}", other),
        };

        Ok(command)
    }
}
