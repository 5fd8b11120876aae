// src/config.rs
use crate::api::PaginationMode;
use crate::error::AppError;
use crate::types::{ApiKey, HatenaCredentials, PageId, PublishMode};
use clap::Parser;
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion page URL or 32-character page ID
    #[arg(value_name = "NOTION_PAGE_ID_OR_URL")]
    pub notion_input: String,

    /// Publish the entry instead of saving it as a draft
    #[arg(long, default_value_t = false)]
    pub publish: bool,

    /// Read only the first page of every children listing
    #[arg(long, default_value_t = false)]
    pub first_page_only: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved pipeline configuration: validated and ready to drive a run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub page_id: PageId,
    pub notion_api_key: ApiKey,
    pub hatena: HatenaCredentials,
    pub publish_mode: PublishMode,
    pub pagination: PaginationMode,
}

impl PipelineConfig {
    /// Resolves the configuration from CLI input and the process environment,
    /// after loading any `.env` file.
    ///
    /// The page ID is checked before the environment is read.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let page_id = PageId::parse(&cli.notion_input)?;
        load_dotenv();
        Self::resolve_with(cli, page_id, |name| std::env::var(name).ok())
    }

    /// Resolves secrets through `lookup` instead of the process environment.
    pub fn resolve_with<F>(cli: CommandLineInput, page_id: PageId, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).filter(|value| !value.is_empty()).ok_or_else(|| {
                AppError::MissingConfiguration(format!("{} environment variable not set", name))
            })
        };

        let notion_api_key = ApiKey::new(require("NOTION_API_KEY")?)?;
        let hatena = HatenaCredentials::new(
            require("HATENA_USER_ID")?,
            require("HATENA_BLOG_ID")?,
            require("HATENA_API_KEY")?,
        )?;

        Ok(PipelineConfig {
            page_id,
            notion_api_key,
            hatena,
            publish_mode: PublishMode::from_publish_flag(cli.publish),
            pagination: if cli.first_page_only {
                PaginationMode::FirstPageOnly
            } else {
                PaginationMode::FollowCursor
            },
        })
    }
}

/// Loads `.env` next to the executable, then `.env` in the working directory.
///
/// Variables already set are never overridden, so the first source wins.
fn load_dotenv() {
    let beside_exe: Option<PathBuf> = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(".env")));

    if let Some(path) = beside_exe {
        match dotenvy::from_path(&path) {
            Ok(()) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
        }
    }

    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Ignoring .env: {}", e),
    }
}
