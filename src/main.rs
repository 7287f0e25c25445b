use clap::Parser;
use folio::cli::{Cli, Commands};
use miette::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logs go to stderr so piped output stays clean
fn init_tracing(verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "folio=debug".into()
        } else {
            "folio=warn".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior so piping to `head` exits quietly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
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
    let global = cli.global;
    init_tracing(global.verbose);

    match cli.command {
        Commands::List(args) => folio::cli::commands::list::run(args, &global),
        Commands::Featured(args) => folio::cli::commands::featured::run(args, &global),
        Commands::Show(args) => folio::cli::commands::show::run(args, &global),
        Commands::Related(args) => folio::cli::commands::related::run(args, &global),
        Commands::Categories(args) => folio::cli::commands::categories::run(args, &global),
        Commands::Techs(args) => folio::cli::commands::techs::run(args, &global),
        Commands::Browse(args) => folio::cli::commands::browse::run(args, &global),
        Commands::Export(args) => folio::cli::commands::export::run(args, &global),
        Commands::Config(cmd) => folio::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => folio::cli::commands::completions::run(args),
    }
}
