use map_demos::{DemoConfig, Result, book_catalogs, init_logging, run_on_console, stock_chart};

fn main() -> Result<()> {
    init_logging()?;
    let config = DemoConfig::from_env();

    run_on_console(&config, |out| {
        stock_chart(out)?;
        book_catalogs(out)
    })
}
