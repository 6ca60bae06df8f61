//! Netshield CLI — alert and trending reports over CSV exports.
//!
//! Usage:
//!   netshield alerts <file> [--json]
//!   netshield trending <file> [--json]
//!   netshield summary <file> [--json]
//!   netshield watch <files>... [--interval secs]

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use netshield::ingest::{self, RotatingSource, RowSource};
use netshield::rank::{betweenness_intensity, closeness_intensity, eccentricity_risk};
use netshield::{compute_alerts, compute_trending, rank_and_group, IntelEngine, SchemaVariant};

#[derive(Parser)]
#[command(
    name = "netshield",
    version,
    about = "OSINT intelligence engine: centrality alerts and hashtag trending"
)]
struct Cli {
    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive intelligence alerts from a network-analysis export
    Alerts {
        /// Path to the CSV export
        file: PathBuf,
    },
    /// Rank trending hashtags from an engagement export
    Trending {
        /// Path to the CSV export
        file: PathBuf,
    },
    /// Show rankings and community overview for a network-analysis export
    Summary {
        /// Path to the CSV export
        file: PathBuf,
    },
    /// Poll a rotating set of exports, refreshing snapshots each tick
    Watch {
        /// CSV files to cycle through, one per tick
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Seconds between ticks
        #[arg(long, default_value_t = 30)]
        interval: u64,
    },
}

fn cmd_alerts(file: &PathBuf, json: bool) -> i32 {
    let records = match ingest::read_account_records(file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let alerts = compute_alerts(&records);

    if json {
        match serde_json::to_string_pretty(&alerts) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        return 0;
    }

    if alerts.is_empty() {
        println!(
            "No alerts generated. All {} accounts appear to be within normal parameters.",
            records.len()
        );
        return 0;
    }
    println!(
        "{} accounts analyzed, {} alerts generated",
        records.len(),
        alerts.len()
    );
    for alert in &alerts {
        println!(
            "[{}] {} {}",
            alert.severity.as_str().to_uppercase(),
            alert.kind.icon(),
            alert.message
        );
    }
    0
}

fn cmd_trending(file: &PathBuf, json: bool) -> i32 {
    let posts = match ingest::read_posts(file) {
        Ok(posts) => posts,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let trending = compute_trending(&posts);

    if json {
        match serde_json::to_string_pretty(&trending) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        return 0;
    }

    if trending.is_empty() {
        println!("No trending hashtags found");
        return 0;
    }
    for (rank, mention) in trending.iter().enumerate() {
        println!(
            "#{:<2} {:<24} {} shares, {} likes ({} @{})",
            rank + 1,
            mention.hashtag,
            mention.shares,
            mention.likes,
            mention.platform,
            mention.username
        );
    }
    0
}

fn cmd_summary(file: &PathBuf, json: bool) -> i32 {
    let records = match ingest::read_account_records(file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let view = rank_and_group(&records);

    if json {
        match serde_json::to_string_pretty(&view) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        return 0;
    }

    println!("Top hub accounts (closeness centrality):");
    for (rank, account) in view.top_hub.iter().enumerate() {
        println!(
            "  #{} {:<24} {:.3} [{}]",
            rank + 1,
            account.label,
            account.closeness,
            closeness_intensity(account.closeness).as_str()
        );
    }

    println!("Top bridge accounts (betweenness centrality):");
    for (rank, account) in view.top_bridge.iter().enumerate() {
        println!(
            "  #{} {:<24} {:.3} [{}]",
            rank + 1,
            account.label,
            account.betweenness,
            betweenness_intensity(account.betweenness).as_str()
        );
    }

    println!("Peripheral accounts (eccentricity):");
    for (rank, account) in view.top_peripheral.iter().enumerate() {
        println!(
            "  #{} {:<24} {} [{} risk]",
            rank + 1,
            account.label,
            account.eccentricity,
            eccentricity_risk(account.eccentricity).as_str()
        );
    }

    println!("Communities ({} detected):", view.communities.len());
    for (community, members) in &view.communities {
        let preview: Vec<&str> = members.iter().take(3).map(|m| m.label.as_str()).collect();
        let suffix = if members.len() > 3 {
            format!(" +{} more", members.len() - 3)
        } else {
            String::new()
        };
        println!(
            "  community {:<4} {} accounts: {}{}",
            community,
            members.len(),
            preview.join(", "),
            suffix
        );
    }
    0
}

fn cmd_watch(files: Vec<PathBuf>, interval: u64) -> i32 {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    runtime.block_on(async move {
        let source = RotatingSource::new(files);
        let engine = IntelEngine::new();
        let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));

        loop {
            ticker.tick().await;
            let batch = match source.fetch().await {
                Ok(batch) => batch,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            };
            match batch.schema {
                SchemaVariant::Account => {
                    let records = ingest::account_records(&batch);
                    let snapshot = engine.refresh_network("watch", &records);
                    println!(
                        "[{}] network: {} accounts, {} communities, {} alerts",
                        snapshot.generated_at.format("%H:%M:%S"),
                        snapshot.account_count,
                        snapshot.rankings.communities.len(),
                        snapshot.alerts.len()
                    );
                }
                SchemaVariant::GenericMetrics => {
                    let posts = ingest::posts(&batch);
                    let snapshot = engine.refresh_trending("watch", &posts);
                    println!(
                        "[{}] trending: {} posts, top tag {}",
                        snapshot.generated_at.format("%H:%M:%S"),
                        snapshot.post_count,
                        snapshot
                            .trending
                            .first()
                            .map(|m| m.hashtag.as_str())
                            .unwrap_or("(none)")
                    );
                }
            }
        }
    })
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Alerts { file } => cmd_alerts(&file, cli.json),
        Commands::Trending { file } => cmd_trending(&file, cli.json),
        Commands::Summary { file } => cmd_summary(&file, cli.json),
        Commands::Watch { files, interval } => cmd_watch(files, interval),
    };
    std::process::exit(code);
}
