use std::path::PathBuf;

use clap::{Parser, Subcommand};
use review::model::Category;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown category `{0}` (expected nfpc or nftc)")]
    InvalidCategory(String),
    #[error("unknown result filter `{0}` (expected all, changed or unchanged)")]
    InvalidResultFilter(String),
    #[error("server returned HTTP {status} for {path}")]
    ServerError { status: u16, path: String },
}

#[derive(Parser, Debug)]
#[command(name = "codewatch-cli", about = "Codewatch standards viewer CLI")]
struct Cli {
    #[arg(long, env = "CODEWATCH_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// List standards of one category, optionally filtered by a query.
    Standards {
        #[arg(long, default_value = "nfpc")]
        category: String,

        #[arg(long, default_value = "")]
        query: String,
    },
    /// List review records, optionally filtered by result.
    Logs {
        #[arg(long, default_value = "all")]
        result: String,
    },
    /// Show one standard with its snapshot.
    Detail { category: String, code: String },
    /// Download the change log artifact.
    Export {
        #[arg(long, short, help = "Output file path; prints to stdout when absent")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();

    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Standards { category, query } => run_standards(&base_url, &category, &query).await,
        Command::Logs { result } => run_logs(&base_url, &result).await,
        Command::Detail { category, code } => run_detail(&base_url, &category, &code).await,
        Command::Export { output } => run_export(&base_url, output).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = reqwest::Client::new().get(format!("{base_url}/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), path: "/healthz".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_standards(base_url: &str, category: &str, query: &str) -> Result<(), CliError> {
    let category = parse_category(category)?;
    let json = api_get(base_url, "/api/standards", &[("category", category.as_str()), ("q", query)]).await?;
    print_json(&json)
}

async fn run_logs(base_url: &str, result: &str) -> Result<(), CliError> {
    let result = parse_result_filter(result)?;
    let json = api_get(base_url, "/api/logs", &[("result", result)]).await?;
    print_json(&json)
}

async fn run_detail(base_url: &str, category: &str, code: &str) -> Result<(), CliError> {
    let category = parse_category(category)?;
    let path = format!("/api/detail/{}/{}", category.as_str(), code);
    let json = api_get(base_url, &path, &[]).await?;
    print_json(&json)
}

async fn run_export(base_url: &str, output: Option<PathBuf>) -> Result<(), CliError> {
    let path = "/api/export";
    let response = reqwest::Client::new().get(format!("{base_url}{path}")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), path: path.to_owned() });
    }

    let body = response.text().await?;
    match output {
        Some(file) => {
            std::fs::write(&file, body)?;
            eprintln!("wrote {}", file.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn parse_category(raw: &str) -> Result<Category, CliError> {
    Category::from_str(raw).ok_or_else(|| CliError::InvalidCategory(raw.to_owned()))
}

fn parse_result_filter(raw: &str) -> Result<&str, CliError> {
    match raw {
        "all" | "changed" | "unchanged" => Ok(raw),
        _ => Err(CliError::InvalidResultFilter(raw.to_owned())),
    }
}

async fn api_get(base_url: &str, path: &str, params: &[(&str, &str)]) -> Result<Value, CliError> {
    let response = reqwest::Client::new()
        .get(format!("{base_url}{path}"))
        .query(params)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), path: path.to_owned() });
    }

    Ok(response.json::<Value>().await?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
