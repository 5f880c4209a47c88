use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{BroadcastNotifier, FlowWorkflow, HttpCollaborators};
use shared::domain::NodeId;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
    task::JoinHandle,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{parse_command, Command, HELP};
use config::{load_settings, parse_endpoint_url};

#[derive(Parser, Debug)]
#[command(name = "flowdoc", about = "Select flow endpoints and send them for documentation")]
struct Args {
    /// TOML config file (defaults to ./flowdoc.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    lookup_url: Option<String>,
    #[arg(long)]
    submission_url: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Drive the workflow from a prompt.
    Interactive,
    /// Search once, optionally select and submit, then exit.
    Run {
        #[arg(long)]
        flow_id: String,
        /// Node ids to submit.
        #[arg(long, value_delimiter = ',', conflicts_with = "all")]
        select: Vec<String>,
        /// Submit every endpoint found.
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(v) = args.lookup_url {
        settings.lookup_url = v;
    }
    if let Some(v) = args.submission_url {
        settings.submission_url = v;
    }
    let lookup_url = parse_endpoint_url("lookup_url", &settings.lookup_url)?;
    let submission_url = parse_endpoint_url("submission_url", &settings.submission_url)?;
    info!(%lookup_url, %submission_url, "flowdoc configured");

    let notifier = Arc::new(BroadcastNotifier::new(32));
    let printer = spawn_notification_printer(&notifier);
    let workflow = FlowWorkflow::over_http(
        HttpCollaborators::new(lookup_url, submission_url),
        notifier,
    )
    .with_notification_duration(settings.notification_duration());

    let outcome = match args.mode.unwrap_or(Mode::Interactive) {
        Mode::Interactive => run_interactive(&workflow).await,
        Mode::Run {
            flow_id,
            select,
            all,
        } => run_once(&workflow, &flow_id, &select, all).await,
    };

    // Closes the notification channel so the printer drains and exits.
    drop(workflow);
    let _ = printer.await;
    outcome
}

fn spawn_notification_printer(notifier: &BroadcastNotifier) -> JoinHandle<()> {
    let mut events = notifier.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(notification) => eprintln!("{}", render::format_notification(&notification)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "notification printer fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

async fn run_interactive(workflow: &FlowWorkflow) -> Result<()> {
    println!("{HELP}");
    print!("{}", render::format_state(&workflow.snapshot().await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match command {
            Command::Search { flow_id } => {
                // Failures are already surfaced as notifications.
                let _ = workflow.search(&flow_id).await;
            }
            Command::Toggle { target } => {
                let node_id = render::resolve_toggle_target(&workflow.snapshot().await, &target);
                workflow.toggle(&node_id).await;
            }
            Command::ToggleAll => workflow.toggle_all().await,
            Command::Submit => {
                if let Err(err) = workflow.submit().await {
                    if !err.is_transport() {
                        eprintln!("{err}");
                    }
                }
            }
            Command::Show => {}
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }
        print!("{}", render::format_state(&workflow.snapshot().await));
    }
    Ok(())
}

async fn run_once(
    workflow: &FlowWorkflow,
    flow_id: &str,
    select: &[String],
    all: bool,
) -> Result<()> {
    let results = workflow.search(flow_id).await?;

    if all {
        workflow.toggle_all().await;
    } else {
        for node_id in select {
            let node_id = NodeId::new(node_id.as_str());
            if !results.iter().any(|item| item.node_id == node_id) {
                anyhow::bail!("node '{node_id}' is not part of flow '{flow_id}'");
            }
            if !workflow.snapshot().await.is_selected(&node_id) {
                workflow.toggle(&node_id).await;
            }
        }
    }

    print!("{}", render::format_state(&workflow.snapshot().await));
    if !all && select.is_empty() {
        return Ok(());
    }

    let receipt = workflow.submit().await?;
    println!("submitted {} endpoint(s)", receipt.submitted);
    Ok(())
}
