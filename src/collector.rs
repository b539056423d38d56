use anyhow::{anyhow, bail};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    command::Command,
    effects::{EffectKind, EffectToggles},
    log::Log,
    resolver::{resolve, resolve_traced, ResolvedResult},
    tokens::{canonical_name, TokenEntry, TokenKind},
};

fn default_count() -> f64 {
    1.0
}

fn finite_or_zero(count: f64) -> f64 {
    if count.is_finite() {
        count
    } else {
        0.0
    }
}

fn serialize_count<S>(count: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(finite_or_zero(*count))
}

/// Null and non-finite counts load as zero, like an emptied number field.
fn deserialize_count<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0.0, finite_or_zero))
}

/// One row of the token table, as typed.
///
/// The count is kept as entered so that blank and fractional values can be sanitized the
/// same way every time the table is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRow {
    #[serde(rename = "type", default)]
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom: String,
    #[serde(
        default = "default_count",
        serialize_with = "serialize_count",
        deserialize_with = "deserialize_count"
    )]
    pub count: f64,
}

impl Default for TokenRow {
    fn default() -> Self {
        Self::new(TokenKind::Food, 1)
    }
}

impl TokenRow {
    pub fn new(kind: TokenKind, count: usize) -> Self {
        Self {
            kind,
            custom: String::default(),
            count: count as f64,
        }
    }

    pub fn custom(name: impl Into<String>, count: usize) -> Self {
        Self {
            kind: TokenKind::Custom,
            custom: name.into(),
            count: count as f64,
        }
    }

    /// Reads a count the way the number field does. Blank text, anything that is not a
    /// number, and infinities all read as zero, so they never create tokens.
    pub fn parse_count(value: &str) -> f64 {
        value
            .trim()
            .parse::<f64>()
            .map_or(0.0, finite_or_zero)
    }

    pub fn name(&self) -> String {
        match self.kind {
            TokenKind::Custom => canonical_name(&self.custom),
            kind => kind.to_string(),
        }
    }

    /// Whole tokens requested by this row. Negative, fractional and unparsable counts are
    /// floored toward zero.
    pub fn sanitized_count(&self) -> usize {
        // `as` saturates. Infinite counts are only reachable by setting the field directly.
        finite_or_zero(self.count).max(0.0).floor() as usize
    }

    pub fn entry(&self) -> Option<TokenEntry> {
        match self.sanitized_count() {
            0 => None,
            count => Some(TokenEntry {
                name: self.name(),
                count,
            }),
        }
    }
}

/// The calculator's inputs: the token table and the effect toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct Collector {
    rows: Vec<TokenRow>,
    toggles: EffectToggles,
}

impl Default for Collector {
    fn default() -> Self {
        Self {
            rows: vec![TokenRow::default()],
            toggles: EffectToggles::default(),
        }
    }
}

impl Collector {
    pub fn new(rows: Vec<TokenRow>, toggles: EffectToggles) -> Self {
        Self { rows, toggles }
    }

    pub fn rows(&self) -> &[TokenRow] {
        &self.rows
    }

    pub fn toggles(&self) -> EffectToggles {
        self.toggles
    }

    pub fn add_row(&mut self, row: TokenRow) {
        debug!(?row, "Adding row");
        self.rows.push(row);
    }

    pub fn remove_row(&mut self, index: usize) -> anyhow::Result<TokenRow> {
        self.row_mut(index)?;
        Ok(self.rows.remove(index))
    }

    pub fn set_kind(&mut self, index: usize, kind: TokenKind) -> anyhow::Result<()> {
        let row = self.row_mut(index)?;
        row.kind = kind;
        if kind != TokenKind::Custom {
            row.custom.clear();
        }
        Ok(())
    }

    pub fn set_custom(&mut self, index: usize, name: &str) -> anyhow::Result<()> {
        let row = self.row_mut(index)?;
        if row.kind != TokenKind::Custom {
            bail!("Row {} is {}, only custom tokens take a name", index + 1, row.kind);
        }
        row.custom = name.to_string();
        Ok(())
    }

    pub fn set_count(&mut self, index: usize, value: &str) -> anyhow::Result<()> {
        self.row_mut(index)?.count = TokenRow::parse_count(value);
        Ok(())
    }

    pub fn set_effect(&mut self, kind: EffectKind, active: bool) {
        self.toggles.set(kind, active);
    }

    pub fn toggle(&mut self, kind: EffectKind) -> bool {
        self.toggles.toggle(kind)
    }

    /// Clears every toggle and goes back to a single default row.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The sanitized starting batch, in row order. Rows that create nothing are left out.
    pub fn entries(&self) -> Vec<TokenEntry> {
        self.rows.iter().filter_map(TokenRow::entry).collect_vec()
    }

    pub fn compute(&self) -> ResolvedResult {
        resolve(self.toggles, &self.entries())
    }

    pub fn compute_traced(&self) -> (ResolvedResult, Log) {
        resolve_traced(self.toggles, &self.entries())
    }

    /// Applies a table edit. Returns false for commands that do not change the table.
    pub fn apply(&mut self, command: &Command) -> anyhow::Result<bool> {
        match command {
            Command::Add(row) => self.add_row(row.clone()),
            Command::Remove(index) => {
                self.remove_row(*index)?;
            }
            Command::SetKind {
                row,
                kind,
                custom: name,
            } => {
                if name.is_some() && *kind != TokenKind::Custom {
                    bail!("Only custom tokens take a name, not {}", kind);
                }
                self.set_kind(*row, *kind)?;
                if let Some(name) = name {
                    self.set_custom(*row, name)?;
                }
            }
            Command::SetCustom { row, name } => self.set_custom(*row, name)?,
            Command::SetCount { row, value } => self.set_count(*row, value)?,
            Command::Toggle(kind) => {
                self.toggle(*kind);
            }
            Command::Set { effect, active } => self.set_effect(*effect, *active),
            Command::Reset => self.reset(),
            Command::Show | Command::Trace | Command::Json | Command::Help | Command::Quit => {
                return Ok(false)
            }
        }

        Ok(true)
    }

    fn row_mut(&mut self, index: usize) -> anyhow::Result<&mut TokenRow> {
        let rows = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or_else(|| anyhow!("No row {} (there are {} rows)", index + 1, rows))
    }
}
