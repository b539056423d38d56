use pretty_assertions::assert_eq;

use crate::{resolve, EffectKind, EffectToggles, Step, TokenEntry};

#[test]
fn parallel_lives() {
    let toggles = EffectToggles {
        parallel: true,
        ..Default::default()
    };
    let result = resolve(
        toggles,
        &[TokenEntry::new("Food", 1), TokenEntry::new("Goblin", 3)],
    );

    assert_eq!(
        result.entries,
        [("Food".to_string(), 2), ("Goblin".to_string(), 6)]
    );
    assert_eq!(
        result.explanations(),
        ["Parallel Lives multiplies all tokens by ×2."]
    );
}

#[test]
fn doubling_season() {
    let toggles = EffectToggles {
        doubling: true,
        ..Default::default()
    };
    let result = resolve(toggles, &[TokenEntry::new("Clue", 5)]);

    assert_eq!(result.entries, [("Clue".to_string(), 10)]);
    assert_eq!(
        result.explanations(),
        ["Doubling Season multiplies all tokens by ×2."]
    );
}

#[test]
fn both_doublers_quadruple() {
    let toggles = EffectToggles {
        parallel: true,
        doubling: true,
        ..Default::default()
    };
    let result = resolve(toggles, &[TokenEntry::new("Food", 1)]);

    assert_eq!(result.entries, [("Food".to_string(), 4)]);
    assert_eq!(
        result.steps,
        [Step::Doubled {
            doublers: vec![EffectKind::Parallel, EffectKind::Doubling],
            factor: 4,
        }]
    );
    assert_eq!(
        result.explanations(),
        ["Parallel Lives + Doubling Season multiplies all tokens by ×4."]
    );
}

#[test]
fn one_pass_matches_two() {
    let entries = [TokenEntry::new("Treasure", 3), TokenEntry::new("Squirrel", 7)];
    let both = resolve(
        EffectToggles {
            parallel: true,
            doubling: true,
            ..Default::default()
        },
        &entries,
    );

    let once = resolve(
        EffectToggles {
            parallel: true,
            ..Default::default()
        },
        &entries,
    );
    let twice = resolve(
        EffectToggles {
            doubling: true,
            ..Default::default()
        },
        &once
            .entries
            .iter()
            .map(|(name, count)| TokenEntry::new(name, *count))
            .collect::<Vec<_>>(),
    );

    assert_eq!(both.entries, twice.entries);
}
