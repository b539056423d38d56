#[macro_use]
extern crate tracing;

use std::io::{stdin, stdout, BufRead, Write};

use itertools::Itertools;

use token_event::{
    command::Command,
    log::init_file_logging,
    present::{render, Report},
    scenario::Scenario,
    Collector,
};

fn print_table(collector: &Collector) {
    if collector.rows().is_empty() {
        println!("(no rows)");
    }
    for (index, row) in collector.rows().iter().enumerate() {
        println!("{:>3}. {} x{}", index + 1, row.name(), row.sanitized_count());
    }

    let active = collector.toggles().active().join(", ");
    if active.is_empty() {
        println!("Effects: none");
    } else {
        println!("Effects: {}", active);
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = init_file_logging("logs.log")?;

    let mut collector: Collector = match std::env::args().nth(1) {
        Some(path) => Scenario::load(path)?.into(),
        None => Collector::default(),
    };

    println!("{}", Command::help());
    println!();
    print_table(&collector);
    println!("{}", render(&collector.compute()));

    let mut lines = stdin().lock().lines();
    loop {
        print!("> ");
        stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{:#}", e);
                continue;
            }
        };

        match &command {
            Command::Quit => break,
            Command::Help => println!("{}", Command::help()),
            Command::Trace => {
                let (_, log) = collector.compute_traced();
                for entry in log.entries() {
                    println!("{}", entry);
                }
            }
            Command::Json => println!(
                "{}",
                serde_json::to_string_pretty(&Report::from(&collector.compute()))?
            ),
            Command::Show => {
                print_table(&collector);
                println!("{}", render(&collector.compute()));
            }
            command => match collector.apply(command) {
                Ok(_) => {
                    print_table(&collector);
                    println!("{}", render(&collector.compute()));
                }
                Err(e) => {
                    warn!("{:#}", e);
                    println!("{:#}", e);
                }
            },
        }
    }

    Ok(())
}
