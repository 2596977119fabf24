//! weft CLI — headless cloth simulation, export, and debugging.

use clap::{Parser, Subcommand};

mod commands;
mod script;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "weft — interactive 2D Verlet cloth simulation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario headlessly and print summary stats.
    Simulate {
        /// Which scenario to run (hanging_cloth, corner_sheet).
        #[arg(short, long, default_value = "hanging_cloth")]
        scenario: String,

        /// Simulated duration in seconds.
        #[arg(short, long, default_value_t = 5.0)]
        duration: f32,

        /// Optional path for the final scene snapshot (binary).
        #[arg(short = 'o', long)]
        snapshot: Option<String>,
    },

    /// Run a scenario and export a JSON animation for a viewer.
    Export {
        /// Which scenario to run (hanging_cloth, corner_sheet).
        #[arg(short, long, default_value = "hanging_cloth")]
        scenario: String,

        /// Simulated duration in seconds.
        #[arg(short, long, default_value_t = 5.0)]
        duration: f32,

        /// Output JSON file path.
        #[arg(short, long, default_value = "cloth.json")]
        output: String,
    },

    /// Inspect a saved scene snapshot.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Replay a JSON gesture script (tears, pins, resets) headlessly.
    Script {
        /// Path to the gesture script.
        path: String,

        /// Which scenario to run it against.
        #[arg(short, long, default_value = "hanging_cloth")]
        scenario: String,

        /// Optional path for the final scene snapshot (binary).
        #[arg(short = 'o', long)]
        snapshot: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            scenario,
            duration,
            snapshot,
        } => commands::simulate(&scenario, duration, snapshot.as_deref()),
        Commands::Export {
            scenario,
            duration,
            output,
        } => commands::export(&scenario, duration, &output),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Script {
            path,
            scenario,
            snapshot,
        } => commands::run_script(&path, &scenario, snapshot.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
