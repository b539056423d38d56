use tracing::Level;

use crate::{effects::EffectBehaviors, event::EventMap, resolver::Step, tokens::TokenKind};

const CONVERTED: [TokenKind; 3] = [TokenKind::Food, TokenKind::Clue, TokenKind::Treasure];

/// Replaces the Food, Clue and Treasure tokens being created with that many of each.
///
/// The three counts are overwritten, not added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AcademyManufactor;

impl EffectBehaviors for AcademyManufactor {
    #[instrument(level = Level::DEBUG, skip(event))]
    fn apply(&self, event: &mut EventMap) -> Option<Step> {
        let converted = CONVERTED
            .iter()
            .fold(0usize, |total, kind| total.saturating_add(event.get(kind.as_ref())));
        if converted == 0 {
            debug!("No Food, Clue, or Treasure to convert");
            return None;
        }

        for kind in CONVERTED {
            event.set(kind.as_ref(), converted);
        }

        Some(Step::AcademyManufactor { converted })
    }
}
