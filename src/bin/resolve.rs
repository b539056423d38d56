use anyhow::anyhow;
use token_event::{
    log::init_file_logging,
    present::{render, Report},
    scenario::Scenario,
    Collector,
};

fn main() -> anyhow::Result<()> {
    let _guard = init_file_logging("logs.log")?;

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => path = Some(arg),
        }
    }
    let path = path.ok_or_else(|| anyhow!("Usage: resolve [--json] <scenario.yaml|toml|json>"))?;

    let collector: Collector = Scenario::load(path)?.into();
    let result = collector.compute();

    if json {
        println!("{}", serde_json::to_string_pretty(&Report::from(&result))?);
    } else {
        println!("{}", render(&result));
    }

    Ok(())
}
