use clap::Parser;
use cmdopts::args::Args;
use cmdopts::commands::{self, Outcome};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match commands::run(&args) {
        Ok(Outcome::Parsed(rendered)) => println!("{}", rendered),
        Ok(Outcome::Help(help)) => print!("{}", help),
        Ok(Outcome::Quiet) => {}
        Err(e) => {
            if let Some(help) = e.help() {
                eprint!("{}", help);
            }
            return Err(e.into());
        }
    }

    Ok(())
}
