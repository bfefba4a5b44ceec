// src/bin/cli.rs
use bowl_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = cli::run() {
        let code = cli::exit_code(&e);
        eprintln!("{:?}", color_eyre::Report::new(e));
        std::process::exit(code);
    }
    Ok(())
}
