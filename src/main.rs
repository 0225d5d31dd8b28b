use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use yt_downloader_client::api::BackendClient;
use yt_downloader_client::core::controller::{FormController, UiState};
use yt_downloader_client::core::labels;
use yt_downloader_client::core::AppConfig;
use yt_downloader_client::views::{BatchView, ConsoleView};

const USAGE: &str = "usage: ytdl-client [--batch <url> [format-id]]";

#[tokio::main]
async fn main() -> Result<()> {
    yt_downloader_client::init()?;

    let config = AppConfig::load_or_default();
    let client = BackendClient::new(&config.api.base_url, &config.api.user_agent)?;
    info!("using backend at {}", config.api.base_url);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        [] => run_interactive(client, &config).await,
        ["--batch", url] => run_batch(client, &config, url, None).await,
        ["--batch", url, format_id] => run_batch(client, &config, url, Some(*format_id)).await,
        _ => bail!(USAGE),
    }
}

/// Interactive console session: one form, driven by line commands
async fn run_interactive(client: BackendClient, config: &AppConfig) -> Result<()> {
    println!("yt-downloader-client v{}", yt_downloader_client::VERSION);
    print_help();

    let view = ConsoleView::new(PathBuf::from(&config.output.directory));
    let mut controller = FormController::new(client, view);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        controller.tick(Instant::now());
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "url" => {
                controller.set_url(rest);
                controller.request_info().await;
            }
            "fetch" => controller.request_info().await,
            "formats" => print_formats(controller.state()),
            "pick" => match resolve_format_id(controller.state(), rest) {
                Some(id) => {
                    controller.select_format(Some(id.clone()));
                    if controller.state().selected_format.as_deref() == Some(id.as_str()) {
                        println!("selected {}", id);
                    }
                }
                None => println!("unknown format: {}", rest),
            },
            "download" => controller.request_download().await,
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {}", other),
        }
    }

    Ok(())
}

/// One-shot batch run: list formats, or download one when an id is given
async fn run_batch(
    client: BackendClient,
    config: &AppConfig,
    url: &str,
    format_id: Option<&str>,
) -> Result<()> {
    let view = BatchView::new(PathBuf::from(&config.output.directory));
    let mut controller = FormController::new(client, view);

    controller.set_url(url);
    controller.request_info().await;
    if let Some(error) = &controller.state().error {
        bail!("{}", error);
    }

    let Some(format_id) = format_id else {
        // Listing run only; the view already printed id and label per line
        return Ok(());
    };

    controller.select_format(Some(format_id.to_string()));
    if controller.state().selected_format.is_none() {
        bail!("unknown format id: {}", format_id);
    }

    controller.request_download().await;
    if let Some(error) = &controller.state().error {
        bail!("{}", error);
    }

    Ok(())
}

fn print_help() {
    println!("commands: url <video-url> | formats | pick <number|format-id> | download | help | quit");
}

fn print_formats(state: &UiState) {
    let Some(video) = &state.video else {
        println!("no video loaded");
        return;
    };
    for (index, format) in video.formats.iter().enumerate() {
        println!("  [{}] {} ({})", index + 1, labels::format_label(format), format.id);
    }
}

/// Resolve a `pick` argument: 1-based list number first, then a raw format
/// id. Numeric ids beyond the list length still resolve through the id path.
fn resolve_format_id(state: &UiState, token: &str) -> Option<String> {
    let video = state.video.as_ref()?;
    if token.is_empty() {
        return None;
    }

    if let Ok(index) = token.parse::<usize>() {
        if index >= 1 {
            if let Some(format) = video.formats.get(index - 1) {
                return Some(format.id.clone());
            }
        }
    }

    video
        .formats
        .iter()
        .find(|format| format.id == token)
        .map(|format| format.id.clone())
}
