//! Folder tree CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use media_core::error::AppError;
use media_entity::folder::{MediaPath, TreeNode};
use media_service::TreeService;
use media_service::folder::locate::try_locate;

use super::Snapshot;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Show the folder tree
    Tree {
        /// Start at this path instead of the root
        #[arg(short, long, default_value = "root")]
        path: String,
        /// Max depth below the start
        #[arg(short, long)]
        depth: Option<usize>,
    },
    /// Show the breadcrumb path of a folder
    Path {
        /// Folder name
        name: String,
    },
    /// List folder names with their backend ids
    Ids,
    /// Show inconsistencies found while building the tree
    Report,
}

/// Folder id display row
#[derive(Debug, Serialize, Tabled)]
struct FolderIdRow {
    /// Name
    name: String,
    /// Backend id
    id: i64,
    /// Full path
    path: String,
}

/// Execute folder commands
pub fn execute(
    args: &FolderArgs,
    service: &TreeService,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::Tree { path, depth } => {
            let tree = service.build(&snapshot.images, &snapshot.folders);
            let start = MediaPath::parse(path);
            let node = try_locate(&tree, &start)
                .ok_or_else(|| AppError::not_found(format!("Folder '{start}' does not exist")))?;

            match format {
                OutputFormat::Json => output::print_json(node),
                OutputFormat::Table => {
                    println!("{}", label(service, &tree, &start, node));
                    print_children(service, &tree, &start, node, "", *depth);
                }
            }
        }
        FolderCommand::Path { name } => {
            let crumbs = service.breadcrumbs(&snapshot.folders, name);
            match format {
                OutputFormat::Json => output::print_json(&crumbs),
                OutputFormat::Table => {
                    let names: Vec<&str> = crumbs.iter().map(MediaPath::last).collect();
                    println!("{}", names.join(" › "));
                }
            }
        }
        FolderCommand::Ids => {
            let ids = service.folder_ids(&snapshot.folders);
            let mut rows: Vec<FolderIdRow> = ids
                .into_iter()
                .map(|(name, id)| FolderIdRow {
                    path: service.resolve_path(&snapshot.folders, &name).to_string(),
                    name,
                    id,
                })
                .collect();
            rows.sort_by(|a, b| a.path.cmp(&b.path));
            output::print_list(&rows, format);
        }
        FolderCommand::Report => {
            let build = service.build_with_report(&snapshot.images, &snapshot.folders);
            let report = &build.report;
            match format {
                OutputFormat::Json => output::print_json(report),
                OutputFormat::Table => {
                    if report.is_clean() {
                        output::print_success("Snapshot is consistent");
                        return Ok(());
                    }
                    output::print_warning(&format!("{} issue(s) found", report.issue_count()));
                    output::print_kv("Dangling parents", &report.dangling_parents.join(", "));
                    output::print_kv("Broken cycles", &report.broken_cycles.join(", "));
                    let orphans: Vec<String> =
                        report.orphaned_images.iter().map(i64::to_string).collect();
                    output::print_kv("Orphaned images", &orphans.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn label(service: &TreeService, tree: &TreeNode, path: &MediaPath, node: &TreeNode) -> String {
    let mut text = format!("{}/ ({})", path.last(), node.item_count());
    if service.is_full(tree, path) {
        text.push_str(" [Full]");
    }
    text
}

fn print_children(
    service: &TreeService,
    tree: &TreeNode,
    path: &MediaPath,
    node: &TreeNode,
    prefix: &str,
    depth: Option<usize>,
) {
    if depth == Some(0) {
        return;
    }
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        let child_path = path.join(name.as_str());
        let branch = if last { "└── " } else { "├── " };
        println!("{prefix}{branch}{}", label(service, tree, &child_path, child));

        let next_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        print_children(
            service,
            tree,
            &child_path,
            child,
            &next_prefix,
            depth.map(|d| d - 1),
        );
    }
}
