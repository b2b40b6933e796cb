//! hive-feed - Replay a UniHive session and print the derived views

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use libunihive::logging::{LogFormat, LoggingConfig};
use libunihive::service::categories::{
    distinct_categories, filter_by_category, filter_by_type, stories_of_type, CategoryFilter,
};
use libunihive::service::feed::{liked_posts, render_feed, FeedItem, InteractionState};
use libunihive::service::sources::{SequentialIds, SystemClock};
use libunihive::service::validation::Draft;
use libunihive::service::HiveService;
use libunihive::{CompetitionCategory, Config, Post, PostType, Story, UnihiveError};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "hive-feed")]
#[command(version, about = "Replay a UniHive session and print the derived views")]
#[command(long_about = r#"Replay a scripted UniHive session against an in-memory content store
and print one of the derived views.

The script holds one JSON command per line. Blank lines and lines starting
with '#' are skipped.

    {"op": "submit", "type": "competition", "category": "Photography", "caption": "sunset over campus"}
    {"op": "like", "post": "post-1"}
    {"op": "comment", "post": "post-1", "text": "great light"}

EXAMPLES:
    # Home feed from a script file, with predictable ids
    hive-feed session.jsonl --sequential-ids

    # Photography leaderboard as JSON
    hive-feed session.jsonl --view leaderboard --category Photography --format json

    # Read the script from stdin
    cat session.jsonl | hive-feed --view competition --category all

EXIT CODES:
    0 - Success (rejected submissions are reported and skipped)
    1 - Configuration or I/O error
    3 - Invalid input (malformed script line, unknown category)
"#)]
struct Cli {
    /// Session script (reads from stdin if not provided or '-')
    script: Option<PathBuf>,

    /// View to print after the session has been replayed
    #[arg(long, value_enum, default_value_t = View::Feed)]
    view: View,

    /// Category label for the competition and leaderboard views ("all" for every category)
    #[arg(short, long)]
    category: Option<String>,

    /// Only show stories promoted from this post type
    #[arg(long = "type")]
    story_type: Option<PostType>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Config file (defaults to $UNIHIVE_CONFIG or the XDG config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Assign ids post-1, post-2, ... instead of UUIDs
    #[arg(long)]
    sequential_ids: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Feed,
    Business,
    Competition,
    Leaderboard,
    Liked,
    Stories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One line of a session script
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum Command {
    Submit(Draft),
    Like { post: String },
    Comment { post: String, text: String },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingConfig::new(LogFormat::Text, "debug".to_string(), true).init();
    } else {
        libunihive::logging::init_default();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<UnihiveError>()
            .map(UnihiveError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let mut service = if cli.sequential_ids {
        HiveService::with_sources(
            config,
            Box::new(SequentialIds::new("post")),
            Box::new(SystemClock),
        )
    } else {
        HiveService::new(config)
    };

    let script = read_script(cli.script.as_ref())?;
    let interaction = replay(&mut service, &script)?;

    print_view(&cli, &service, &interaction)
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read script from stdin")?;
            Ok(buffer)
        }
    }
}

fn replay(service: &mut HiveService, script: &str) -> Result<InteractionState> {
    let mut interaction = InteractionState::new();

    for (index, line) in script.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command: Command = serde_json::from_str(line).map_err(|e| {
            UnihiveError::InvalidInput(format!("line {}: {}", line_no, e))
        })?;

        match command {
            Command::Submit(draft) => match service.submit(&draft) {
                Ok(post) => tracing::debug!(line = line_no, post_id = %post.id, "submitted"),
                Err(UnihiveError::Validation(err)) => {
                    tracing::warn!(line = line_no, error = %err, "submission rejected");
                    eprintln!("line {}: rejected: {}", line_no, err);
                }
                Err(err) => return Err(err.into()),
            },
            Command::Like { post } => {
                interaction = service.toggle_like(&interaction, &post).0;
            }
            Command::Comment { post, text } => match service.comment(&interaction, &post, &text) {
                Ok(next) => interaction = next,
                Err(UnihiveError::Validation(err)) => {
                    eprintln!("line {}: rejected: {}", line_no, err);
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    Ok(interaction)
}

fn print_view(cli: &Cli, service: &HiveService, interaction: &InteractionState) -> Result<()> {
    let posts = &service.state().posts;

    match cli.view {
        View::Feed => print_feed(cli.format, &render_feed(service.feed(), interaction)),
        View::Liked => print_posts(cli.format, &liked_posts(service.feed(), interaction), false),
        View::Business => print_posts(cli.format, &filter_by_type(posts, PostType::Business), false),
        View::Competition => {
            let filter = match cli.category.as_deref() {
                Some(label) => label.parse::<CategoryFilter>().map_err(UnihiveError::from)?,
                None => CategoryFilter::All,
            };
            if cli.format == OutputFormat::Text {
                let chips: Vec<String> = distinct_categories(posts)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("Categories: {}", chips.join(", "));
            }
            print_posts(
                cli.format,
                &filter_by_category(posts, PostType::Competition, filter),
                false,
            )
        }
        View::Leaderboard => {
            let label = cli.category.as_deref().ok_or_else(|| {
                UnihiveError::InvalidInput("--category is required for the leaderboard view".to_string())
            })?;
            let category = label
                .parse::<CompetitionCategory>()
                .map_err(UnihiveError::InvalidInput)?;
            print_posts(cli.format, &service.leaderboard(category), true)
        }
        View::Stories => {
            let stories = &service.state().stories;
            let shown: Vec<&Story> = match cli.story_type {
                Some(post_type) => stories_of_type(stories, post_type),
                None => stories.iter().collect(),
            };
            print_stories(cli.format, &shown)
        }
    }
}

fn describe(post: &Post) -> String {
    let kind = match post.category {
        Some(category) => format!("{}/{}", post.post_type, category),
        None => post.post_type.to_string(),
    };
    format!(
        "{}  [{}]  {} likes  {} comments  {}",
        post.id, kind, post.likes, post.comments, post.caption
    )
}

fn print_feed(format: OutputFormat, items: &[FeedItem<'_>]) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Text => {
            for item in items {
                let marker = if item.liked { "♥" } else { " " };
                println!("{} {}", marker, describe(item.post));
                for comment in item.comments {
                    println!("      {}: {}", comment.author, comment.text);
                }
            }
        }
    }
    Ok(())
}

fn print_posts(format: OutputFormat, posts: &[&Post], ranked: bool) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(posts)?),
        OutputFormat::Text => {
            if posts.is_empty() {
                println!("No posts yet.");
            }
            for (index, post) in posts.iter().enumerate() {
                if ranked {
                    println!("{:>2}. {}", index + 1, describe(post));
                } else {
                    println!("{}", describe(post));
                }
            }
        }
    }
    Ok(())
}

fn print_stories(format: OutputFormat, stories: &[&Story]) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stories)?),
        OutputFormat::Text => {
            for story in stories {
                println!("{}  [{}]", story.post_id, story.post_type);
            }
        }
    }
    Ok(())
}
