pub(crate) mod academy_manufactor;
pub(crate) mod chatterfang;
pub(crate) mod multiply_tokens;
pub(crate) mod peregrin_took;

use std::str::FromStr;

use anyhow::{anyhow, Context};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    effects::{
        academy_manufactor::AcademyManufactor, chatterfang::Chatterfang,
        multiply_tokens::MultiplyTokens, peregrin_took::PeregrinTook,
    },
    event::EventMap,
    resolver::Step,
};

/// The cards whose effects can be switched on for an event.
///
/// Parses from the short toggle ids (`peregrin`, `parallel`, ...) or the full card name,
/// and displays as the card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(strum::EnumIter, strum::AsRefStr, strum::EnumString, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum EffectKind {
    #[strum(to_string = "Chatterfang", serialize = "Chatterfang, Squirrel General")]
    Chatterfang,
    #[strum(to_string = "Academy Manufactor", serialize = "manufactor")]
    Manufactor,
    #[strum(to_string = "Peregrin Took", serialize = "peregrin")]
    Peregrin,
    #[strum(to_string = "Parallel Lives", serialize = "parallel")]
    Parallel,
    #[strum(to_string = "Doubling Season", serialize = "doubling")]
    Doubling,
}

impl EffectKind {
    pub fn id(self) -> &'static str {
        match self {
            EffectKind::Chatterfang => "chatterfang",
            EffectKind::Manufactor => "manufactor",
            EffectKind::Peregrin => "peregrin",
            EffectKind::Parallel => "parallel",
            EffectKind::Doubling => "doubling",
        }
    }

    pub fn parse(value: &str) -> anyhow::Result<Self> {
        Self::from_str(value.trim()).with_context(|| anyhow!("Parsing effect {}", value))
    }
}

/// Which effects are on for a single calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectToggles {
    pub chatterfang: bool,
    pub manufactor: bool,
    pub peregrin: bool,
    pub parallel: bool,
    pub doubling: bool,
}

impl EffectToggles {
    pub fn is_active(&self, kind: EffectKind) -> bool {
        match kind {
            EffectKind::Chatterfang => self.chatterfang,
            EffectKind::Manufactor => self.manufactor,
            EffectKind::Peregrin => self.peregrin,
            EffectKind::Parallel => self.parallel,
            EffectKind::Doubling => self.doubling,
        }
    }

    pub fn set(&mut self, kind: EffectKind, active: bool) {
        let flag = match kind {
            EffectKind::Chatterfang => &mut self.chatterfang,
            EffectKind::Manufactor => &mut self.manufactor,
            EffectKind::Peregrin => &mut self.peregrin,
            EffectKind::Parallel => &mut self.parallel,
            EffectKind::Doubling => &mut self.doubling,
        };
        *flag = active;
    }

    /// Flips `kind`, returning whether it is now active.
    pub fn toggle(&mut self, kind: EffectKind) -> bool {
        let active = !self.is_active(kind);
        self.set(kind, active);
        active
    }

    pub fn active(&self) -> impl Iterator<Item = EffectKind> + '_ {
        EffectKind::iter().filter(|kind| self.is_active(*kind))
    }
}

impl FromIterator<EffectKind> for EffectToggles {
    fn from_iter<T: IntoIterator<Item = EffectKind>>(iter: T) -> Self {
        let mut toggles = Self::default();
        for kind in iter {
            toggles.set(kind, true);
        }
        toggles
    }
}

#[enum_dispatch]
pub(crate) trait EffectBehaviors: std::fmt::Debug {
    /// Applies this effect to the event, returning the explanation if it changed anything.
    #[must_use]
    fn apply(&self, event: &mut EventMap) -> Option<Step>;
}

#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
#[enum_dispatch(EffectBehaviors)]
pub(crate) enum Effect {
    PeregrinTook(PeregrinTook),
    AcademyManufactor(AcademyManufactor),
    Chatterfang(Chatterfang),
    MultiplyTokens(MultiplyTokens),
}

impl Effect {
    /// The active effects, in the order they apply to an event.
    ///
    /// The order is fixed: Peregrin's Food feeds Manufactor, Manufactor's output is counted by
    /// Chatterfang, and the doublers see everything.
    pub(crate) fn pipeline(toggles: &EffectToggles) -> Vec<Effect> {
        let mut pipeline: Vec<Effect> = vec![];
        if toggles.peregrin {
            pipeline.push(PeregrinTook.into());
        }
        if toggles.manufactor {
            pipeline.push(AcademyManufactor.into());
        }
        if toggles.chatterfang {
            pipeline.push(Chatterfang.into());
        }
        if let Some(multiply) = MultiplyTokens::from_toggles(toggles) {
            pipeline.push(multiply.into());
        }

        pipeline
    }

    pub(crate) fn name(&self) -> &'static str {
        self.into()
    }
}
