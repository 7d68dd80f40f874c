use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use shortforge_core::{Brief, Upstream, format_plan_readable, generate_plan};

#[derive(Parser)]
#[command(name = "shortforge")]
#[command(about = "Turn a creative brief into a ready-to-shoot short-form video blueprint")]
struct Cli {
    /// Topic or idea for the short
    topic: String,

    /// Who the short is for
    #[arg(short, long, default_value = "Solo content creators and editors")]
    audience: String,

    /// Delivery tone
    #[arg(short, long, default_value = "Energetic hype")]
    tone: String,

    /// What the short should achieve
    #[arg(short, long, default_value = "Drive channel subscriptions")]
    goal: String,

    /// Target runtime
    #[arg(short, long, default_value = "45 seconds")]
    duration: String,

    /// Platform to optimize for
    #[arg(short, long, default_value = "YouTube Shorts")]
    platform: String,

    /// Skip kinetic caption callouts
    #[arg(long)]
    no_captions: bool,

    /// Skip b-roll suggestions
    #[arg(long)]
    no_broll: bool,

    /// Print the raw plan JSON instead of the readable blueprint
    #[arg(long)]
    json: bool,

    /// Override the chat completions endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Override the model identifier
    #[arg(long)]
    model: Option<String>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate API key early
    let api_key = match Upstream::api_key_from_env() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let mut upstream = Upstream::default();
    if let Some(api_url) = cli.api_url {
        upstream.api_url = api_url;
    }
    if let Some(model) = cli.model {
        upstream.model = model;
    }

    let brief = Brief {
        api_key,
        topic: cli.topic,
        audience: cli.audience,
        tone: cli.tone,
        goal: cli.goal,
        duration: cli.duration,
        platform_focus: cli.platform,
        include_captions: !cli.no_captions,
        include_broll: !cli.no_broll,
    };

    println!(
        "\n{}  {}\n",
        style("shortforge").cyan().bold(),
        style("Shorts Director").dim()
    );

    let spinner = create_spinner("Designing blueprint...");
    let plan = match generate_plan(&upstream, &brief).await {
        Ok(plan) => {
            spinner.finish_with_message(format!(
                "{} Blueprint ready: {}",
                style("✓").green().bold(),
                style(&plan.title).dim()
            ));
            plan
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", format_plan_readable(&plan));
    }

    Ok(())
}
