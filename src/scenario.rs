use std::path::Path;

use anyhow::{anyhow, Context};
use ariadne::{Label, Report, ReportKind, Source};
use serde::{Deserialize, Serialize};

use crate::{
    collector::{Collector, TokenRow},
    effects::{EffectKind, EffectToggles},
};

/// A saved calculator state: which effects are on and what the token table holds.
///
/// ```yaml
/// effects: [peregrin, manufactor]
/// tokens:
///   - type: Food
///     count: 3
///   - type: Custom
///     custom: Goblin
///     count: 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<EffectKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
pub enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(anyhow!(
                "Unrecognized scenario format for {} (expected .yaml, .toml, or .json)",
                path.display()
            )),
        }
    }
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Reading scenario: {}", path.display()))?;

        let scenario = Self::parse(&path.display().to_string(), &contents, format)
            .with_context(|| format!("Parsing scenario: {}", path.display()))?;
        info!(
            "Loaded {} rows and {} effects from {}",
            scenario.tokens.len(),
            scenario.effects.len(),
            path.display()
        );

        Ok(scenario)
    }

    /// Parses `contents`. YAML errors are also printed as a report pointing at the
    /// offending spot in `source_name`.
    pub fn parse(source_name: &str, contents: &str, format: Format) -> anyhow::Result<Self> {
        match format {
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| {
                if let Some(location) = e.location() {
                    let printed = Report::build(
                        ReportKind::Error,
                        source_name.to_string(),
                        location.index(),
                    )
                    .with_label(Label::new((
                        source_name.to_string(),
                        location.index()..location.index() + 1,
                    )))
                    .with_message(e.to_string())
                    .finish()
                    .eprint((source_name.to_string(), Source::from(contents)));
                    if let Err(printing) = printed {
                        warn!("Failed to print report: {}", printing);
                    }
                }

                anyhow!(e.to_string())
            }),
            Format::Toml => Ok(toml::from_str(contents)?),
            Format::Json => Ok(serde_json::from_str(contents)?),
        }
    }

    pub fn dump(&self, format: Format) -> anyhow::Result<String> {
        Ok(match format {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Toml => toml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        })
    }

    pub fn toggles(&self) -> EffectToggles {
        self.effects.iter().copied().collect()
    }
}

impl From<Scenario> for Collector {
    fn from(scenario: Scenario) -> Self {
        let toggles = scenario.toggles();
        Collector::new(scenario.tokens, toggles)
    }
}

impl From<&Collector> for Scenario {
    fn from(collector: &Collector) -> Self {
        Self {
            effects: collector.toggles().active().collect(),
            tokens: collector.rows().to_vec(),
        }
    }
}
