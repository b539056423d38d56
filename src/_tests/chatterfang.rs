use pretty_assertions::assert_eq;

use crate::{resolve, EffectToggles, Step, TokenEntry};

fn chatterfang() -> EffectToggles {
    EffectToggles {
        chatterfang: true,
        ..Default::default()
    }
}

#[test]
fn doubles_squirrels() {
    let result = resolve(chatterfang(), &[TokenEntry::new("Squirrel", 4)]);

    assert_eq!(result.entries, [("Squirrel".to_string(), 8)]);
    assert_eq!(result.steps, [Step::Chatterfang { squirrels: 4 }]);
}

#[test]
fn single_squirrel_wording() {
    let result = resolve(chatterfang(), &[TokenEntry::new("Treasure", 1)]);

    assert_eq!(
        result.entries,
        [("Squirrel".to_string(), 1), ("Treasure".to_string(), 1)]
    );
    assert_eq!(
        result.explanations(),
        ["Chatterfang adds 1 Squirrel token equal to the total tokens in the event."]
    );
}

#[test]
fn counts_after_manufactor() {
    let toggles = EffectToggles {
        manufactor: true,
        peregrin: true,
        ..chatterfang()
    };
    let result = resolve(toggles, &[TokenEntry::new("Clue", 2)]);

    // Peregrin: 2 Clue + 1 Food. Manufactor: 3 of each. Chatterfang sees 9.
    assert_eq!(
        result.entries,
        [
            ("Clue".to_string(), 3),
            ("Food".to_string(), 3),
            ("Squirrel".to_string(), 9),
            ("Treasure".to_string(), 3),
        ]
    );
    assert_eq!(result.steps.last(), Some(&Step::Chatterfang { squirrels: 9 }));
}

#[test]
fn nothing_to_copy() {
    let result = resolve(chatterfang(), &[]);

    assert!(result.is_empty());
    assert!(result.steps.is_empty());
}
