//! filekv Binary
//!
//! Starts the interactive REPL over stdin/stdout.

use std::io;

use clap::{Parser, ValueEnum};
use filekv::{Config, Dispatcher, FlushPolicy, Repl};
use tracing_subscriber::{fmt, EnvFilter};

/// filekv REPL
#[derive(Parser, Debug)]
#[command(name = "filekv")]
#[command(about = "Interactive file-backed key-value store")]
#[command(version)]
struct Args {
    /// Snapshot file holding the store contents
    #[arg(short, long, default_value = "./filekv.json")]
    data_file: std::path::PathBuf,

    /// When to write the snapshot to disk
    #[arg(long, value_enum, default_value_t = FlushArg::EveryMutation)]
    flush: FlushArg,

    /// Suppress the interactive prompt (for piped input)
    #[arg(long)]
    no_prompt: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FlushArg {
    /// Save after every successful PUT/DELETE
    EveryMutation,
    /// Save only on EXIT / end-of-input
    OnExit,
}

impl From<FlushArg> for FlushPolicy {
    fn from(arg: FlushArg) -> Self {
        match arg {
            FlushArg::EveryMutation => FlushPolicy::EveryMutation,
            FlushArg::OnExit => FlushPolicy::OnExit,
        }
    }
}

fn main() {
    // Logs go to stderr so they never interleave with replies on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_path(&args.data_file)
        .flush_policy(args.flush.into())
        .build();

    // A corrupt snapshot refuses to start rather than silently losing data
    let mut dispatcher = match Dispatcher::open(config) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("failed to open store: {}", e);
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock()).prompt(!args.no_prompt);

    if let Err(e) = repl.run(&mut dispatcher) {
        tracing::error!("REPL terminated abnormally: {}", e);
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
