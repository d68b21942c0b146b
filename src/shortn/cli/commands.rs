use super::render::{print_config, print_entries, print_messages, print_services, print_short_url};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use shortn::api::{CmdResult, ConfigAction, ShortnApi};
use shortn::browser::open_in_browser;
use shortn::clipboard::copy_to_clipboard;
use shortn::config::ShortnConfig;
use shortn::error::{Result, ShortnError};
use shortn::store::fs::FileStore;
use shortn::transport::UreqTransport;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: ShortnApi<FileStore, UreqTransport>,
}

/// Commands that report their own failures through messages return a
/// failing `ExitCode` instead of an error, so nothing is printed twice.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    let result = match cli.command {
        Commands::Shorten { url, copy } => return handle_shorten(&mut ctx, &url, copy),
        Commands::Remove { selectors } => return handle_remove(&mut ctx, &selectors),
        Commands::History => handle_history(&ctx),
        Commands::Clear => handle_clear(&mut ctx),
        Commands::Copy { selector } => handle_copy(&ctx, &selector),
        Commands::Open { selector } => handle_open(&ctx, &selector),
        Commands::Services => handle_services(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    };
    result.map(|()| ExitCode::SUCCESS)
}

fn exit_code(result: &CmdResult) -> ExitCode {
    if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "shortn=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "shortn", "shortn")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShortnError::Config("Could not determine data dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;

    let config = match ShortnConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Commands::Config { .. }) => return Err(e),
        Err(e) => {
            warn!(error = %e, "using default configuration");
            ShortnConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone());
    let transport = UreqTransport::new(config.timeout());
    let api = ShortnApi::new(&config, data_dir, store, transport);

    Ok(AppContext { api })
}

fn handle_shorten(ctx: &mut AppContext, url: &str, copy: bool) -> Result<ExitCode> {
    let result = ctx.api.shorten(url);
    print_messages(&result.messages);

    let Some(short_url) = &result.short_url else {
        return Ok(ExitCode::FAILURE);
    };
    print_short_url(short_url);

    if copy {
        match copy_to_clipboard(short_url) {
            Ok(()) => println!("Copied to clipboard."),
            Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
        }
    }
    Ok(exit_code(&result))
}

fn handle_history(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_history();
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    if !ctx.api.history_enabled() {
        println!("History recording is disabled (config enable-history).");
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, selectors: &[String]) -> Result<ExitCode> {
    let result = ctx.api.remove_entries(selectors)?;
    print_messages(&result.messages);
    Ok(exit_code(&result))
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_history()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.get_entry(selector)?;
    for de in &result.listed_entries {
        copy_to_clipboard(&de.entry.short_url)?;
        println!("Copied {} to clipboard.", de.entry.short_url);
    }
    Ok(())
}

fn handle_open(ctx: &AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.get_entry(selector)?;
    for de in &result.listed_entries {
        open_in_browser(&de.entry.short_url)?;
    }
    Ok(())
}

fn handle_services(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.services();
    print_services(&result.services);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_config(&result.config_entries);
    print_messages(&result.messages);
    Ok(())
}
