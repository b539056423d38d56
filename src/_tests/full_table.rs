use itertools::Itertools;
use pretty_assertions::assert_eq;

use crate::{
    present::{render, EMPTY_STATE},
    resolve, Collector, EffectKind, EffectToggles, Step, TokenEntry, TokenRow,
};

fn everything() -> EffectToggles {
    EffectToggles {
        chatterfang: true,
        manufactor: true,
        peregrin: true,
        parallel: true,
        doubling: true,
    }
}

#[test]
fn no_effects_is_the_starting_batch() {
    let result = resolve(
        EffectToggles::default(),
        &[
            TokenEntry::new("Treasure", 2),
            TokenEntry::new("Blood", 1),
            TokenEntry::new("treasures", 3),
        ],
    );

    assert_eq!(
        result.entries,
        [("Blood".to_string(), 1), ("Treasure".to_string(), 5)]
    );
    assert!(result.steps.is_empty());
}

#[test]
fn single_food() {
    let result = resolve(EffectToggles::default(), &[TokenEntry::new("Food", 1)]);

    assert_eq!(result.entries, [("Food".to_string(), 1)]);
    assert!(result.steps.is_empty());
}

#[test]
fn empty_table() {
    let result = resolve(EffectToggles::default(), &[]);

    assert!(result.is_empty());
    assert!(result.steps.is_empty());
    assert_eq!(render(&result), EMPTY_STATE);
}

#[test]
fn every_effect_in_order() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .pretty()
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let result = resolve(everything(), &[TokenEntry::new("Food", 1)]);

    // 1 Food -> Peregrin 2 Food -> Manufactor 2 of each -> Chatterfang +6 Squirrels -> x4
    assert_eq!(
        result.entries,
        [
            ("Clue".to_string(), 8),
            ("Food".to_string(), 8),
            ("Squirrel".to_string(), 24),
            ("Treasure".to_string(), 8),
        ]
    );
    assert_eq!(
        result.steps,
        [
            Step::PeregrinTook,
            Step::AcademyManufactor { converted: 2 },
            Step::Chatterfang { squirrels: 6 },
            Step::Doubled {
                doublers: vec![EffectKind::Parallel, EffectKind::Doubling],
                factor: 4,
            },
        ]
    );

    Ok(())
}

#[test]
fn results_are_sorted_and_nonzero() {
    let result = resolve(
        everything(),
        &[
            TokenEntry::new("Zombie", 1),
            TokenEntry::new("Angel", 0),
            TokenEntry::new("Map", 2),
        ],
    );

    let names = result.entries.iter().map(|(name, _)| name.as_str()).collect_vec();
    assert_eq!(names, names.iter().copied().sorted().collect_vec());
    assert!(result.entries.iter().all(|(_, count)| *count > 0));
    assert_eq!(result.count("Angel"), 0);
}

#[test]
fn collector_to_readout() -> anyhow::Result<()> {
    let mut collector = Collector::default();
    collector.add_row(TokenRow::custom("Blood", 1));
    collector.set_count(0, "2")?;
    collector.set_effect(EffectKind::Doubling, true);

    let result = collector.compute();
    assert_eq!(
        render(&result),
        [
            "+-------+",
            "| Blood |",
            "|     2 |",
            "+-------+",
            "+------+",
            "| Food |",
            "|    4 |",
            "+------+",
            "",
            "How we got here: Doubling Season multiplies all tokens by ×2.",
        ]
        .join("\n")
    );

    Ok(())
}
