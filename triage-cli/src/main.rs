use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use triage_core::{find_task_mut, load_tasks, save_tasks};
use triage_model::PriorityPredictor;

#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Predict to-do priorities with a trained classifier")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict the priority of one task and write it back to the log
    Predict {
        /// Task id to look up (integer)
        #[arg(long)]
        id: u64,

        /// Task log, one JSON record per line
        #[arg(long, default_value = "tasks.txt")]
        log: PathBuf,

        /// Trained classifier artifact
        #[arg(long, default_value = "priority_model.bin")]
        model: PathBuf,

        /// Trained label-encoder artifact
        #[arg(long, default_value = "label_encoders.bin")]
        encoders: PathBuf,
    },

    /// Print the task log
    List {
        /// Task log, one JSON record per line
        #[arg(long, default_value = "tasks.txt")]
        log: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Predict { id, log, model, encoders } => predict(id, &log, &model, &encoders),
        Command::List { log } => list(&log),
    }
}

fn predict(id: u64, log: &Path, model: &Path, encoders: &Path) -> Result<()> {
    // Artifacts first: if these fail there is nothing to predict with.
    let predictor = PriorityPredictor::load(model, encoders)
        .context("loading trained artifacts")?;

    let mut tasks = load_tasks(log)?;
    if tasks.is_empty() {
        bail!("no tasks loaded from {}", log.display());
    }

    let Some(task) = find_task_mut(&mut tasks, id) else {
        bail!("task {} not found in {}", id, log.display());
    };

    let label = predictor
        .predict_for(task)
        .with_context(|| format!("predicting priority for task {id}"))?;
    task.priority_level = Some(label.clone());

    save_tasks(&tasks, log)?;

    println!("Predicted priority for task {id}: {label}");
    println!("Priority updated in {}", log.display());
    Ok(())
}

fn list(log: &Path) -> Result<()> {
    let tasks = load_tasks(log)?;
    if tasks.is_empty() {
        println!("(no tasks in {})", log.display());
        return Ok(());
    }

    for t in &tasks {
        println!(
            "#{} [{}] due {} | importance={} | priority={}",
            t.id,
            t.task_type,
            t.deadline_time,
            t.task_importance,
            t.priority_level.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
