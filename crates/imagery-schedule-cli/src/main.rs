use clap::Parser;
use imagery_schedule_cli::cli::{self, Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();

    // Before the runtime spawns any thread.
    cli::output::apply_flags(args.quiet, args.json);

    let default_level = if args.verbose {
        "imagery_schedule=debug,imagery_schedule_cli=debug"
    } else if args.quiet || args.json {
        "imagery_schedule=warn,imagery_schedule_cli=warn"
    } else {
        "imagery_schedule=info,imagery_schedule_cli=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    let config = args.config();
    let result = runtime.block_on(async {
        match &args.command {
            Command::Countries => cli::countries_cmd::run(&config).await,
            Command::Fetch { countries } => cli::fetch_cmd::run(&config, countries).await,
            Command::Extract { file } => cli::extract_cmd::run(file),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
