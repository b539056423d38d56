#[macro_use]
extern crate tracing;

#[cfg(test)]
mod _tests;

pub mod collector;
pub mod command;
pub mod effects;
pub mod event;
pub mod log;
pub mod present;
pub mod resolver;
pub mod scenario;
pub mod tokens;

pub use collector::{Collector, TokenRow};
pub use effects::{EffectKind, EffectToggles};
pub use event::EventMap;
pub use resolver::{resolve, resolve_traced, ResolvedResult, Step};
pub use tokens::{canonical_name, TokenEntry, TokenKind};
