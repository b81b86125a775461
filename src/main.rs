use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use bulletin::api::DraftPost;
use bulletin::config::Config;
use bulletin::posts::{Post, ReactionKind};
use bulletin::telemetry::init_tracing;
use bulletin::PostStore;

#[derive(Debug, Parser)]
#[command(name = "bulletin", version, about = "Fetch and post to a bulletin board")]
struct Cli {
    /// Config file (default: <config dir>/bulletin/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override api.base_url from the config file
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch posts and print them, newest first
    Posts {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Fetch posts, save a new one, and print it as JSON
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("validating --base-url")?;
    }

    let store = PostStore::from_config(&config)?;
    store.fetch_all().await?;

    match cli.command {
        Command::Posts { limit } => {
            for post in store.all_posts().iter().take(limit) {
                print_post(post);
            }
        }
        Command::Add {
            title,
            content,
            user_id,
        } => {
            let post = store
                .add_remote(DraftPost::new(title, content, user_id))
                .await?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
    }

    store.close().await;
    Ok(())
}

fn print_post(post: &Post) {
    let reactions: Vec<String> = ReactionKind::ALL
        .into_iter()
        .map(|kind| format!("{} {}", kind.emoji(), post.reactions.get(kind)))
        .collect();
    println!(
        "#{:<4} {}  (user {}, {})",
        post.id,
        post.title,
        post.user_id,
        post.date.to_rfc3339()
    );
    println!("      {}", reactions.join("  "));
}
