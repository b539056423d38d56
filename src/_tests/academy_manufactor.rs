use pretty_assertions::assert_eq;

use crate::{resolve, EffectToggles, Step, TokenEntry};

fn manufactor() -> EffectToggles {
    EffectToggles {
        manufactor: true,
        ..Default::default()
    }
}

#[test]
fn converts_food_and_clues() {
    let result = resolve(
        manufactor(),
        &[TokenEntry::new("Food", 3), TokenEntry::new("Clue", 2)],
    );

    assert_eq!(
        result.entries,
        [
            ("Clue".to_string(), 5),
            ("Food".to_string(), 5),
            ("Treasure".to_string(), 5),
        ]
    );
    assert_eq!(result.steps, [Step::AcademyManufactor { converted: 5 }]);
}

#[test]
fn overwrites_rather_than_adds() {
    let result = resolve(
        manufactor(),
        &[
            TokenEntry::new("Treasure", 4),
            TokenEntry::new("Clue", 1),
            TokenEntry::new("Blood", 2),
        ],
    );

    assert_eq!(result.count("Food"), 5);
    assert_eq!(result.count("Clue"), 5);
    assert_eq!(result.count("Treasure"), 5);
    assert_eq!(result.count("Blood"), 2);
}

#[test]
fn leaves_other_tokens_alone() {
    let result = resolve(manufactor(), &[TokenEntry::new("Squirrel", 2)]);

    assert_eq!(result.entries, [("Squirrel".to_string(), 2)]);
    assert!(result.steps.is_empty());
}

#[test]
fn counts_peregrins_food() {
    let toggles = EffectToggles {
        peregrin: true,
        ..manufactor()
    };
    let result = resolve(toggles, &[TokenEntry::new("Squirrel", 2)]);

    assert_eq!(
        result.entries,
        [
            ("Clue".to_string(), 1),
            ("Food".to_string(), 1),
            ("Squirrel".to_string(), 2),
            ("Treasure".to_string(), 1),
        ]
    );
    assert_eq!(
        result.steps,
        [Step::PeregrinTook, Step::AcademyManufactor { converted: 1 }]
    );
}
