use tracing::Level;

use crate::{effects::EffectBehaviors, event::EventMap, resolver::Step, tokens::TokenKind};

/// Adds a Squirrel for every token in the event, Squirrels included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chatterfang;

impl EffectBehaviors for Chatterfang {
    #[instrument(level = Level::DEBUG, skip(event))]
    fn apply(&self, event: &mut EventMap) -> Option<Step> {
        let squirrels = event.total();
        if squirrels == 0 {
            debug!("Nothing is being created");
            return None;
        }

        event.add(TokenKind::Squirrel.as_ref(), squirrels);
        Some(Step::Chatterfang { squirrels })
    }
}
