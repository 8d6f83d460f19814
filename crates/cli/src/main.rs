use anyhow::Result;
use clap::{Parser, Subcommand};
use sketchkit::ease::Easing;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "sketchkit")]
#[command(about = "Trim polygon outlines and sample easing curves")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Trim a polygon (.csv with x,y columns or .json) to a perimeter window
    Trim {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long, default_value_t = 1.0)]
        end: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Sample an easing curve into a .csv or .parquet table with x,y columns
    Ease {
        #[arg(long, default_value = "in-out-cubic")]
        name: Easing,
        #[arg(long, default_value_t = 100)]
        samples: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run one grow-then-shrink trim cycle and record the drawn length per frame
    Sweep {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 120)]
        frames: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// List the named easing curves
    Easings,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let label = cmd.label.as_deref();
    match cmd.action {
        Action::Trim {
            input,
            start,
            end,
            out,
        } => commands::trim(&input, start, end, &out, label).map(|_| ()),
        Action::Ease { name, samples, out } => {
            commands::ease(name, samples, &out, label).map(|_| ())
        }
        Action::Sweep { input, frames, out } => {
            commands::sweep(&input, frames, &out, label).map(|_| ())
        }
        Action::Easings => {
            for e in Easing::all() {
                println!("{e}");
            }
            Ok(())
        }
        Action::Report => {
            let obj = provenance::report(label);
            println!("{}", serde_json::to_string_pretty(&obj)?);
            Ok(())
        }
    }
}
