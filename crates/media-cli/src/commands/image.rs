//! Folder contents and capacity CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use media_core::error::AppError;
use media_entity::folder::MediaPath;
use media_service::TreeService;

use super::Snapshot;

/// Arguments for image commands
#[derive(Debug, Args)]
pub struct ImageArgs {
    /// Image subcommand
    #[command(subcommand)]
    pub command: ImageCommand,
}

/// Image subcommands
#[derive(Debug, Subcommand)]
pub enum ImageCommand {
    /// List images stored directly in a folder
    Ls {
        /// Folder path, e.g. `root/Movies/Posters`
        #[arg(default_value = "root")]
        path: String,
    },
    /// Show occupancy of every folder
    Capacity,
    /// Check whether images can be uploaded or moved into a folder
    Check {
        /// Target folder path
        path: String,
        /// Number of new images to upload
        #[arg(short, long, conflicts_with = "ids")]
        count: Option<usize>,
        /// Ids of existing images to move
        #[arg(long, value_delimiter = ',')]
        ids: Vec<i64>,
    },
}

/// Image display row
#[derive(Debug, Serialize, Tabled)]
struct ImageRow {
    /// Image ID
    id: i64,
    /// Name
    name: String,
    /// Content type
    content_type: String,
    /// Size in bytes
    size: i64,
    /// URL
    url: String,
}

/// Capacity display row
#[derive(Debug, Serialize, Tabled)]
struct CapacityRow {
    /// Folder path
    path: String,
    /// Images in folder
    images: usize,
    /// Limit
    limit: String,
    /// Status
    status: String,
}

/// Execute image commands
pub fn execute(
    args: &ImageArgs,
    service: &TreeService,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tree = service.build(&snapshot.images, &snapshot.folders);

    match &args.command {
        ImageCommand::Ls { path } => {
            let node = service.locate(&tree, &MediaPath::parse(path));
            let rows: Vec<ImageRow> = node
                .items
                .iter()
                .map(|img| ImageRow {
                    id: img.id,
                    name: img.name.clone(),
                    content_type: img.content_type.clone(),
                    size: img.size,
                    url: img.url.clone(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        ImageCommand::Capacity => {
            let summary = service.capacity_summary(&tree);
            match format {
                OutputFormat::Json => output::print_json(&summary),
                OutputFormat::Table => {
                    let rows: Vec<CapacityRow> = summary
                        .iter()
                        .map(|c| CapacityRow {
                            path: c.path.to_string(),
                            images: c.occupancy,
                            limit: c.limit.map_or_else(|| "-".to_string(), |l| l.to_string()),
                            status: if c.full { "Full" } else { "" }.to_string(),
                        })
                        .collect();
                    output::print_list(&rows, format);
                }
            }
        }
        ImageCommand::Check { path, count, ids } => {
            let target = MediaPath::parse(path);
            if ids.is_empty() {
                service.validate_target(&tree, &target, count.unwrap_or(1))?;
            } else {
                service.validate_move(&tree, &target, ids)?;
            }
            output::print_success(&format!("'{target}' can accept the images"));
        }
    }

    Ok(())
}
