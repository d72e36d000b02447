//! `photoset` command line.
//!
//! Each invocation opens one advisory session, performs one action and
//! exits. Favorites persist between invocations through the store.

use crate::catalog;
use crate::display::{self, ResultCard, Theme};
use crate::export::{self, ExportError, Sheet};
use crate::favorites::FavoriteStore;
use crate::llm::{LlmError, Provider, ProviderId, Requestor};
use crate::session::{AdvisorySession, SessionError};
use crate::settings::{self, Settings, SettingsError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "photoset")]
#[command(about = "Camera settings for your body, lens and scenario", long_about = None)]
pub struct Cli {
    /// Presentation theme
    #[arg(long, global = true, value_enum, env = "PHOTOSET_THEME", default_value = "light")]
    pub theme: Theme,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List camera bodies
    Cameras,

    /// List lenses
    Lenses,

    /// List shooting scenarios
    Scenarios,

    /// Show the technical glossary, or one term
    Glossary { term: Option<String> },

    /// Suggest lenses for a scenario
    Suggest { scenario: String },

    /// Generate settings for a camera + lens + scenario
    Recommend {
        #[arg(short, long)]
        camera: String,

        #[arg(short, long)]
        lens: String,

        #[arg(short, long)]
        scenario: String,

        /// Save the result to favorites
        #[arg(long)]
        favorite: bool,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,

        /// Write a printable sheet (.json for JSON, text otherwise)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Copy the printable sheet to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Inspect and test generation providers
    Provider {
        #[command(subcommand)]
        action: ProviderAction,
    },

    /// Manage provider API keys
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List saved favorites
    List,
    /// Show one favorite in full
    Show { id: String },
    /// Remove a favorite
    Remove { id: String },
    /// Export a favorite's sheet to a file
    Export { id: String, path: PathBuf },
}

#[derive(Subcommand)]
pub enum ProviderAction {
    /// List known providers and whether they are configured
    List,
    /// Send a minimal request to a provider (default: the active one)
    Test { provider: Option<ProviderId> },
}

#[derive(Subcommand)]
pub enum KeyAction {
    /// Store an API key in the OS keychain
    Set { provider: ProviderId, key: String },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("provider test failed: {0}")]
    Provider(#[from] LlmError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

fn open_session(settings: &Settings) -> AdvisorySession<Provider> {
    let requestor = Requestor::with_options(settings.build_provider(), settings.request_options());
    AdvisorySession::open(requestor, FavoriteStore::in_dir(&settings.data_dir))
}

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<(), CliError> {
    let theme = cli.theme;
    match cli.command {
        Commands::Cameras => {
            for c in catalog::cameras() {
                println!(
                    "{:<4} {:<28} {}",
                    theme.accent(&c.id),
                    c.display_name(),
                    theme.muted(&format!("max ISO {}", c.max_iso))
                );
            }
        }
        Commands::Lenses => {
            for l in catalog::lenses() {
                let kind = if l.is_zoom { "zoom" } else { "prime" };
                println!(
                    "{:<4} {:<42} {}",
                    theme.accent(&l.id),
                    l.name,
                    theme.muted(&format!("{} · {}", l.max_aperture_label(), kind))
                );
            }
        }
        Commands::Scenarios => {
            for s in catalog::scenarios() {
                println!(
                    "{:<4} {} {:<20} {}",
                    theme.accent(&s.id),
                    s.icon,
                    s.name,
                    theme.muted(&s.description)
                );
            }
        }
        Commands::Glossary { term } => match term {
            Some(term) => {
                let entry = catalog::find_term(&term)
                    .ok_or_else(|| CliError::NotFound(format!("glossary term '{}'", term)))?;
                println!("{}\n  {}", theme.accent(&entry.term), entry.description);
            }
            None => {
                for entry in catalog::glossary() {
                    println!("{}\n  {}\n", theme.accent(&entry.term), entry.description);
                }
            }
        },
        Commands::Suggest { scenario } => {
            let scenario = catalog::find_scenario(&scenario)
                .ok_or(SessionError::UnknownScenario(scenario))?;
            let lenses = catalog::suggested_lenses(&scenario);
            print!("{}", display::render_suggestions(theme, &scenario, &lenses));
        }
        Commands::Recommend {
            camera,
            lens,
            scenario,
            favorite,
            json,
            export,
            copy,
        } => {
            let settings = Settings::from_env();
            let mut session = open_session(&settings);
            session.select_camera(&camera)?;
            session.select_lens(&lens)?;
            session.select_scenario(&scenario)?;

            eprintln!("{}", theme.muted("Processing..."));
            let produced = session.request_recommendation().await?;

            if favorite && !session.is_current_favorite() {
                session.toggle_favorite()?;
            }

            let selection = session.selection();
            let (camera, lens, scenario) = selection
                .complete()
                .ok_or(SessionError::IncompleteSelection)?;
            let rec = &produced.recommendation;

            if json {
                println!("{}", serde_json::to_string_pretty(rec)?);
            } else {
                let card = ResultCard {
                    camera,
                    lens,
                    scenario,
                    recommendation: rec,
                    source: Some(produced.source),
                    adjustments: &produced.adjustments,
                    is_favorite: session.is_current_favorite(),
                };
                print!("{}", display::render_result(theme, &card));
            }

            let sheet = Sheet::new(camera, lens, scenario, rec);
            if let Some(path) = export {
                export::write_export(&path, &sheet)?;
                eprintln!("Saved sheet to {}", path.display());
            }
            if copy {
                export::copy_to_clipboard(&sheet)?;
                eprintln!("Copied sheet to clipboard");
            }
        }
        Commands::Favorites { action } => {
            let settings = Settings::from_env();
            let mut session = open_session(&settings);
            match action {
                FavoritesAction::List => {
                    if session.favorites().is_empty() {
                        println!("{}", theme.muted("No saved settings yet."));
                    }
                    for fav in session.favorites() {
                        println!("{}", display::render_favorite_line(theme, fav));
                    }
                }
                FavoritesAction::Show { id } => {
                    session.open_favorite(&id)?;
                    let fav = session
                        .find_favorite(&id)
                        .ok_or_else(|| SessionError::UnknownFavorite(id.clone()))?;
                    let card = ResultCard {
                        camera: &fav.camera,
                        lens: &fav.lens,
                        scenario: &fav.scenario,
                        recommendation: &fav.recommendation,
                        source: None,
                        adjustments: &[],
                        is_favorite: true,
                    };
                    print!("{}", display::render_result(theme, &card));
                }
                FavoritesAction::Remove { id } => {
                    if !session.remove_favorite(&id) {
                        return Err(SessionError::UnknownFavorite(id).into());
                    }
                    println!("Removed {}", id);
                }
                FavoritesAction::Export { id, path } => {
                    let fav = session
                        .find_favorite(&id)
                        .ok_or_else(|| SessionError::UnknownFavorite(id.clone()))?;
                    export::write_export(&path, &Sheet::from_favorite(fav))?;
                    println!("Saved sheet to {}", path.display());
                }
            }
        }
        Commands::Provider { action } => match action {
            ProviderAction::List => {
                let active = settings::resolve_provider();
                for info in crate::llm::provider::all_providers() {
                    let marker = if info.id == active { "*" } else { " " };
                    let status = if settings::is_provider_configured(info.id) {
                        "configured"
                    } else {
                        "no key"
                    };
                    let key_var = info.env_key.as_deref().unwrap_or("-");
                    println!(
                        "{} {:<10} {:<40} {}",
                        marker,
                        theme.accent(info.id.as_str()),
                        info.name,
                        theme.muted(&format!(
                            "{} · key {} · schema via {}",
                            status, key_var, info.schema_mode
                        ))
                    );
                }
            }
            ProviderAction::Test { provider } => {
                let settings = Settings::from_env();
                let id = provider.unwrap_or(settings.provider);
                let client = settings.build(id);
                settings::test_provider(&client).await?;
                println!("{} is reachable", id);
            }
        },
        Commands::Key {
            action: KeyAction::Set { provider, key },
        } => {
            settings::save_api_key(provider, &key)?;
            println!("Saved {} key to the OS keychain", provider);
        }
    }
    Ok(())
}
