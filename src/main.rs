use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use termlife::config::Args;

fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if args.log_file.is_some() {
            "info"
        } else {
            "warn"
        },
    ));
    builder.format_timestamp_micros();
    if let Some(path) = &args.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("could not open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            // usage goes to stdout, status is non-zero
            print!("{}", e.render());
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    init_logging(&args)?;
    termlife::app::run(args)
}
