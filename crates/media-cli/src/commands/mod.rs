//! CLI command definitions and dispatch.

pub mod folder;
pub mod image;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::output::OutputFormat;
use media_core::config::AppConfig;
use media_core::error::AppError;
use media_entity::folder::FolderRecord;
use media_entity::image::{ImageRecord, sort_images_by_id};
use media_service::TreeService;

/// Media manager: inspect folder trees built from backend snapshots
#[derive(Debug, Parser)]
#[command(name = "media-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// JSON array of folders as returned by `GET /folders`
    #[arg(long, global = true)]
    pub folders: Option<PathBuf>,

    /// JSON array of images as returned by `GET /images`
    #[arg(long, global = true)]
    pub images: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder tree, paths, and ids
    Folder(folder::FolderArgs),
    /// Folder contents and capacity
    Image(image::ImageArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let snapshot = Snapshot::load(self.folders.as_deref(), self.images.as_deref())?;
        let service = TreeService::from_config(&config.media);

        match &self.command {
            Commands::Folder(args) => folder::execute(args, &service, &snapshot, self.format),
            Commands::Image(args) => image::execute(args, &service, &snapshot, self.format),
        }
    }
}

/// Folder and image lists read from disk.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Flat folder list.
    pub folders: Vec<FolderRecord>,
    /// Flat image list, sorted by id.
    pub images: Vec<ImageRecord>,
}

impl Snapshot {
    /// Read both lists; a missing argument yields an empty list.
    pub fn load(folders: Option<&Path>, images: Option<&Path>) -> Result<Self, AppError> {
        let folders = read_json_list(folders)?;
        let mut images = read_json_list(images)?;
        sort_images_by_id(&mut images);
        tracing::debug!(
            folders = folders.len(),
            images = images.len(),
            "Snapshot loaded"
        );
        Ok(Self { folders, images })
    }
}

fn read_json_list<T: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<T>, AppError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            media_core::error::ErrorKind::Io,
            format!("Failed to read '{}'", path.display()),
            e,
        )
    })?;
    Ok(serde_json::from_str(&raw)?)
}
