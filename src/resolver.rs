use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::{
    effects::{Effect, EffectBehaviors, EffectKind, EffectToggles},
    event::EventMap,
    log::Log,
    tokens::TokenEntry,
};

/// One sentence of the explanation, contributed by an effect that changed the event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    PeregrinTook,
    AcademyManufactor {
        converted: usize,
    },
    Chatterfang {
        squirrels: usize,
    },
    Doubled {
        doublers: Vec<EffectKind>,
        factor: usize,
    },
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::PeregrinTook => f.write_str("Peregrin Took adds +1 Food to the event."),
            Step::AcademyManufactor { converted } => write!(
                f,
                "Academy Manufactor converts the {converted} Food/Clue/Treasure being created into {converted} of each."
            ),
            Step::Chatterfang { squirrels } => write!(
                f,
                "Chatterfang adds {} Squirrel token{} equal to the total tokens in the event.",
                squirrels,
                if *squirrels == 1 { "" } else { "s" }
            ),
            Step::Doubled { doublers, factor } => write!(
                f,
                "{} multiplies all tokens by ×{}.",
                doublers.iter().join(" + "),
                factor
            ),
        }
    }
}

/// The tokens an event ends up creating, and how it got there.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedResult {
    /// Nonzero counts, ordered by token name.
    pub entries: Vec<(String, usize)>,
    /// One step per effect that fired, in the order they applied.
    pub steps: Vec<Step>,
}

impl ResolvedResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, name: &str) -> usize {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, count)| *count)
            .unwrap_or_default()
    }

    pub fn explanations(&self) -> Vec<String> {
        self.steps.iter().map(Step::to_string).collect_vec()
    }
}

/// Resolves a single token-creation event.
pub fn resolve(toggles: EffectToggles, entries: &[TokenEntry]) -> ResolvedResult {
    resolve_traced(toggles, entries).0
}

/// Resolves a single token-creation event, recording the event at every stage boundary.
#[instrument(level = Level::DEBUG, skip(entries))]
pub fn resolve_traced(toggles: EffectToggles, entries: &[TokenEntry]) -> (ResolvedResult, Log) {
    let mut log = Log::default();

    let mut event = EventMap::from_entries(entries);
    log.initialized(&event);

    let mut steps = vec![];
    for effect in Effect::pipeline(&toggles) {
        let before = event.total();
        match effect.apply(&mut event) {
            Some(step) => {
                log.applied(effect.name(), before, event.total());
                steps.push(step);
            }
            None => log.skipped(effect.name()),
        }
    }

    let result = ResolvedResult {
        entries: event.into_sorted(),
        steps,
    };
    debug!(?result);

    (result, log)
}
