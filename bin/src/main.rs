//! Atalaya CLI binary.
//!
//! Provides command-line access to the Atalaya report pipeline.

use anyhow::Result;
use atalaya_fmp::FmpClient;
use atalaya_news::NewsClient;
use atalaya_ollama::OllamaClient;
use atalaya_report::{Report, ReportBuilder};
use atalaya_scores::registry;
use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "atalaya")]
#[command(about = "Financial report assembly and scoring pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full report for a ticker
    Report {
        /// Ticker symbol
        ticker: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Restrict news to the named sources
        #[arg(short, long, value_delimiter = ',')]
        sources: Vec<String>,
    },

    /// Generate a short company bio for a ticker
    Bio {
        /// Ticker symbol
        ticker: String,
    },

    /// List available scorers
    Scorers {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            ticker,
            format,
            sources,
        } => {
            build_report(&ticker, &format, &sources).await?;
        }
        Commands::Bio { ticker } => {
            print_bio(&ticker).await?;
        }
        Commands::Scorers { verbose } => {
            list_scorers(verbose);
        }
    }

    Ok(())
}

fn pipeline() -> Result<ReportBuilder> {
    Ok(ReportBuilder::new(
        Arc::new(FmpClient::from_env()?),
        Arc::new(OllamaClient::from_env()),
        Arc::new(NewsClient::from_env()?),
        registry::default_scorers(),
    ))
}

async fn build_report(ticker: &str, format: &str, sources: &[String]) -> Result<()> {
    let builder = pipeline()?.with_news_sources(sources.to_vec());
    let report = builder.build(ticker).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_report(&report),
    }

    Ok(())
}

async fn print_bio(ticker: &str) -> Result<()> {
    let bio = pipeline()?.company_bio(ticker).await?;
    if bio.is_empty() {
        println!("No bio available (narrative service unreachable).");
    } else {
        println!("{bio}");
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!(
        "\n{} ({}) as of {}",
        report.company.name, report.ticker, report.as_of
    );
    println!("{}", "=".repeat(60));
    println!(
        "{} | {} | {}",
        report.company.exchange, report.company.sector, report.company.industry
    );

    println!("\nScores:");
    println!("  Piotroski F-Score: {}/9", report.scores.piotroski_f);
    println!("  Value investor:    {}", report.scores.value_investor);
    println!("  Growth investor:   {}", report.scores.growth_investor);

    let ttm = &report.fundamentals.ttm;
    println!(
        "\nFundamentals ({}, {}):",
        report.fundamentals.period, report.fundamentals.currency
    );
    println!("  Revenue:        {:>16.0}", ttm.revenue);
    println!("  Net income:     {:>16.0}", ttm.net_income);
    println!("  Operating CF:   {:>16.0}", ttm.operating_cash_flow);
    println!("  Free cash flow: {:>16.0}", ttm.free_cash_flow);
    println!("  Total assets:   {:>16.0}", ttm.total_assets);

    let ratios = &report.fundamentals.ratios;
    println!("\nRatios:");
    println!("  P/E {:.2} | P/B {:.2} | FCF yield {:.2}%", ratios.pe, ratios.pb, ratios.fcf_yield);
    println!(
        "  ROA {:.2} | ROE {:.2} | Gross margin {:.2} | Operating margin {:.2}",
        ratios.roa, ratios.roe, ratios.gross_margin, ratios.operating_margin
    );

    if !report.explain.piotroski.is_empty() {
        println!("\nPiotroski breakdown:\n{}", report.explain.piotroski);
    }
    if !report.explain.cash_cow.is_empty() {
        println!("\nCash-flow summary:\n{}", report.explain.cash_cow);
    }

    if !report.news.is_empty() {
        println!("\nRecent news:");
        for item in &report.news {
            println!("  [{}] {} ({})", item.source, item.title, item.published_at);
        }
    }
    println!();
}

fn list_scorers(verbose: bool) {
    println!("\nAvailable scorers:");
    println!("{}", "-".repeat(60));

    for info in registry::available_scorers() {
        if verbose {
            let status = if info.implemented {
                "implemented"
            } else {
                "stub"
            };
            println!(
                "  {:20} - {} (min periods: {}, {})",
                info.name, info.description, info.min_periods, status
            );
        } else {
            println!("  {}", info.name);
        }
    }

    if !verbose {
        println!("\nUse --verbose for detailed scorer descriptions.");
    }
    println!();
}
