use clap::Parser;
use prompt_hook::{EventLog, FlagRegistry, HookConfig, HookInput, WorkflowProbe, base_flags, pipeline};
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prompt-hook")]
#[command(about = "UserPromptSubmit hook: strips trailing prompt flags and injects context")]
#[command(version)]
struct Cli {
    /// Increase diagnostic verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };

    // Diagnostics go to stderr; stdout carries only the injected context.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[Prompt Hook Error: {e}]");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let input: HookInput = serde_json::from_str(&raw)?;

    let config = HookConfig::from_env();
    let registry = FlagRegistry::new(WorkflowProbe::from_current_dir(), base_flags::load());

    let outcome = pipeline::run(&input, &config, &registry);
    if let Some(output) = &outcome.output {
        println!("{output}");
    }
    EventLog::new(&config).append(&outcome.record);
    Ok(())
}
