use clap::Parser;
use xbrlld_cli::cli::Cli;
use xbrlld_cli::error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet   → always "off"
    //   --verbose → RUST_LOG if set, otherwise "info"
    //   default   → "warn"; conversion warnings are printed by the
    //               command itself, so their log lines are dropped
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn,xbrlld_mapping::warning=off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Errors go to stderr; piping stdout should not strip their color.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = xbrlld_cli::run(cli) {
        exit_with_error(e);
    }
}
