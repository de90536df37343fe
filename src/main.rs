use clap::Parser;

use termglyph::app;
use termglyph::cli::Args;

/// Install the logger. `RUST_LOG` overrides the level picked from `-v`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn,termglyph=info",
        1 => "warn,termglyph=debug",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = app::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
