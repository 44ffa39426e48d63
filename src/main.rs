use clap::Parser;
use miette::Result;

use cct::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
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
    let global = cli.global;

    match cli.command {
        Commands::Cost(args) => cct::cli::commands::cost::run(args, &global),
        Commands::Sweep(args) => cct::cli::commands::sweep::run(args, &global),
        Commands::Sensitivity(args) => cct::cli::commands::sensitivity::run(args, &global),
        Commands::Simulate(args) => cct::cli::commands::simulate::run(args, &global),
        Commands::Validate(args) => cct::cli::commands::validate::run(args, &global),
    }
}
