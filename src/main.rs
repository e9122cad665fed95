use clap::Parser;
use gdm::cli::{Cli, Commands};
use gdm::core::Config;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let config = Config::load(cli.global.config.as_deref())?;
    init_tracing(cli.global.verbose, &config.log_level);
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Validate(args) => gdm::cli::commands::validate::run(args, &config),
        Commands::Show(args) => gdm::cli::commands::show::run(args, &cli.global, &config),
        Commands::Status(args) => gdm::cli::commands::status::run(args, &cli.global, &config),
        Commands::Schema(args) => gdm::cli::commands::schema::run(args),
        Commands::Completions(args) => gdm::cli::commands::completions::run(args),
    }
}

/// Log to stderr; RUST_LOG wins, then -v, then the configured level
fn init_tracing(verbose: u8, configured: &str) {
    let fallback = match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
