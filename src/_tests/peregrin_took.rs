use pretty_assertions::assert_eq;

use crate::{resolve, EffectToggles, Step, TokenEntry};

fn peregrin() -> EffectToggles {
    EffectToggles {
        peregrin: true,
        ..Default::default()
    }
}

#[test]
fn adds_food() {
    let result = resolve(peregrin(), &[TokenEntry::new("Food", 1)]);

    assert_eq!(result.entries, [("Food".to_string(), 2)]);
    assert_eq!(result.steps, [Step::PeregrinTook]);
}

#[test]
fn adds_food_to_other_tokens() {
    let result = resolve(peregrin(), &[TokenEntry::new("Squirrel", 3)]);

    assert_eq!(
        result.entries,
        [("Food".to_string(), 1), ("Squirrel".to_string(), 3)]
    );
}

#[test]
fn nothing_from_nothing() {
    let result = resolve(peregrin(), &[]);
    assert!(result.is_empty());
    assert!(result.steps.is_empty());

    let result = resolve(
        peregrin(),
        &[TokenEntry::new("Food", 0), TokenEntry::new("Clue", 0)],
    );
    assert!(result.is_empty());
    assert!(result.steps.is_empty());
}
