use burnlog_core::Activity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "burnlog")]
#[command(version)]
#[command(about = "Fitness activity dashboard with calorie estimation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive dashboard
    Dashboard {
        /// Seed for reproducible model training
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a one-shot calorie estimate as JSON
    Estimate {
        /// Activity (running, cycling, swimming, walking, gym-workout)
        #[arg(short, long)]
        activity: Activity,

        /// Duration in minutes
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(5..=180))]
        duration: u32,

        /// Body weight in kg
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(30..=150))]
        weight: u32,

        /// Seed for reproducible model training
        #[arg(long)]
        seed: Option<u64>,

        /// Use a previously exported model instead of training fresh
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Train a model and export it as JSON
    Train {
        /// Output path for the model artifact
        #[arg(short, long)]
        out: PathBuf,

        /// Seed for reproducible model training
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print version information
    Version,
}
