use map_demos::{DemoConfig, Result, init_logging, run_on_console, value_search};

fn main() -> Result<()> {
    init_logging()?;
    let config = DemoConfig::from_env();

    run_on_console(&config, value_search)
}
