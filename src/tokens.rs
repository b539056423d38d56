use std::str::FromStr;

use anyhow::{anyhow, Context};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The token types the calculator offers out of the box.
///
/// Anything else is a [`TokenKind::Custom`] token whose name comes from the row it was
/// entered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(strum::EnumIter, strum::AsRefStr, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum TokenKind {
    #[default]
    #[strum(to_string = "Food", serialize = "Foods")]
    Food,
    #[strum(to_string = "Clue", serialize = "Clues")]
    Clue,
    #[strum(to_string = "Treasure", serialize = "Treasures")]
    Treasure,
    #[strum(to_string = "Squirrel", serialize = "Squirrels")]
    Squirrel,
    Custom,
}

impl TokenKind {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        Self::from_str(value.trim()).with_context(|| anyhow!("Parsing token type {}", value))
    }
}

/// Folds the common spellings of the built-in token types onto their canonical names.
///
/// Other names are trimmed and have inner whitespace collapsed. A blank name becomes
/// `Custom`. Canonical names map to themselves.
pub fn canonical_name(raw: &str) -> String {
    let trimmed = raw.trim();
    match TokenKind::from_str(trimmed) {
        Ok(TokenKind::Custom) | Err(_) => {}
        Ok(kind) => return kind.to_string(),
    }

    let collapsed = trimmed.split_whitespace().join(" ");
    if collapsed.is_empty() {
        TokenKind::Custom.to_string()
    } else {
        collapsed
    }
}

/// One line of the starting batch: `count` tokens named `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenEntry {
    pub name: String,
    pub count: usize,
}

impl TokenEntry {
    pub fn new(name: impl AsRef<str>, count: usize) -> Self {
        Self {
            name: canonical_name(name.as_ref()),
            count,
        }
    }
}

impl From<(TokenKind, usize)> for TokenEntry {
    fn from((kind, count): (TokenKind, usize)) -> Self {
        Self {
            name: kind.to_string(),
            count,
        }
    }
}
