use tracing::Level;

use crate::{effects::EffectBehaviors, event::EventMap, resolver::Step, tokens::TokenKind};

/// Adds one extra Food to any event that is already creating tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PeregrinTook;

impl EffectBehaviors for PeregrinTook {
    #[instrument(level = Level::DEBUG, skip(event))]
    fn apply(&self, event: &mut EventMap) -> Option<Step> {
        if event.total() == 0 {
            debug!("Nothing is being created");
            return None;
        }

        event.add(TokenKind::Food.as_ref(), 1);
        Some(Step::PeregrinTook)
    }
}
