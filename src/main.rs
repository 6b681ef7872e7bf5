use std::fs::File;
use std::io::{stderr, stdout, Write};
use std::process::exit;
use std::str::FromStr;

use clap::ArgMatches;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use albumsync::album_client::{AlbumClient, DeleteOutcome};
use albumsync::album_sync::AlbumListSync;
use albumsync::cli::{build_cli, build_config, CliCommand, CreateCmd, DeleteCmd, ListCmd};
use albumsync::config::Config;
use albumsync::shell::run_shell;
use albumsync::utils::alert;
use albumsync::view::Page;
use albumsync::GenError;

static DEFAULT_LOG_FILTER: &str = "albumsync=info";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();

    let matches = build_cli();
    let (name, sub_matches) = matches.subcommand();
    let sub_matches = sub_matches.unwrap_or_else(|| {
        eprintln!("No command was provided, run `albumsync help` to learn more");
        exit(1);
    });

    let config = build_config(sub_matches, Config::from_env());
    let client = AlbumClient::new(&config).unwrap_or_else(|err| {
        eprintln!("Failed to create album client due to error = {}", err);
        exit(1);
    });
    let sync = AlbumListSync::new(client, Page::new());

    let result = match CliCommand::from_str(name) {
        Ok(CliCommand::Create) => create(sync, sub_matches).await,
        Ok(CliCommand::List) => list(sync, ListCmd::build(sub_matches)).await,
        Ok(CliCommand::Delete) => delete(sync, DeleteCmd::build(sub_matches)).await,
        Ok(CliCommand::Shell) => shell(sync).await,
        Err(invalid_cmd) => Err(GenError::from(invalid_cmd)),
    };

    match result {
        Ok(_) => exit(0),
        Err(err) => {
            eprintln!("❌  Failed due to error='{}'", err);
            exit(1);
        }
    }
}

async fn create(mut sync: AlbumListSync<Page>, matches: &ArgMatches<'_>) -> Result<(), GenError> {
    let cmd = CreateCmd::build(matches)?;
    sync.view_mut().fill_form(cmd.form);

    sync.submit_create().await?;
    print_page(sync.view(), None)
}

async fn list(mut sync: AlbumListSync<Page>, cmd: ListCmd) -> Result<(), GenError> {
    sync.refresh().await?;
    print_page(sync.view(), cmd.out.as_deref())
}

/// Renders the table first so the given ids have checkboxes to tick.
async fn delete(mut sync: AlbumListSync<Page>, cmd: DeleteCmd) -> Result<(), GenError> {
    sync.refresh().await?;
    for id in &cmd.ids {
        if !sync.view_mut().check(id) {
            warn!(%id, "no album with this id in the list, skipping");
        }
    }

    let outcome = sync.delete_selected().await;
    for msg in sync.view_mut().take_alerts() {
        alert(stderr(), &msg)?;
    }

    match outcome? {
        DeleteOutcome::Deleted => print_page(sync.view(), None),
        DeleteOutcome::NotFound => Err(GenError::from("one or more albums were not found")),
        DeleteOutcome::Failed(status) => Err(GenError::from(format!(
            "album server refused the delete with status {}",
            status
        ))),
    }
}

async fn shell(mut sync: AlbumListSync<Page>) -> Result<(), GenError> {
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    run_shell(&mut sync, input, stdout()).await
}

fn print_page(page: &Page, out: Option<&str>) -> Result<(), GenError> {
    let html = page.to_html();
    match out {
        Some(path) => File::create(path).and_then(|mut f| f.write_all(html.as_bytes()))?,
        None => stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

