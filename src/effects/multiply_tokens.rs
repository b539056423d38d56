use itertools::Itertools;
use tracing::Level;

use crate::{
    effects::{EffectBehaviors, EffectKind, EffectToggles},
    event::EventMap,
    resolver::Step,
};

const DOUBLERS: [EffectKind; 2] = [EffectKind::Parallel, EffectKind::Doubling];

/// Parallel Lives and Doubling Season, applied together as one combined multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MultiplyTokens {
    doublers: Vec<EffectKind>,
}

impl MultiplyTokens {
    pub(crate) fn from_toggles(toggles: &EffectToggles) -> Option<Self> {
        let doublers = DOUBLERS
            .into_iter()
            .filter(|kind| toggles.is_active(*kind))
            .collect_vec();

        if doublers.is_empty() {
            None
        } else {
            Some(Self { doublers })
        }
    }

    pub(crate) fn multiplier(&self) -> usize {
        2usize.saturating_pow(self.doublers.len() as u32)
    }
}

impl EffectBehaviors for MultiplyTokens {
    #[instrument(level = Level::DEBUG, skip(event))]
    fn apply(&self, event: &mut EventMap) -> Option<Step> {
        let factor = self.multiplier();
        event.multiply(factor);

        Some(Step::Doubled {
            doublers: self.doublers.clone(),
            factor,
        })
    }
}
