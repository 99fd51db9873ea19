//! Palette management commands backed by the shared palette store.
//!
//! These commands edit the same persisted palette the interactive editor
//! uses, so colors and groups added here show up in the next session.

use crate::cli::common::{parse_color_arg, CliError, CliResult};
use crate::config::Config;
use crate::models::{Palette, BASE_COLORS};
use crate::services::PaletteService;
use crate::store::FileStore;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage the shared bead palette
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette subcommand
    #[command(subcommand)]
    pub command: PaletteCommand,
}

/// Palette subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PaletteCommand {
    /// List base colors and color groups
    List(ListArgs),
    /// Add a custom color to the active group
    AddColor(AddColorArgs),
    /// Remove a custom color from the active group
    RemoveColor(RemoveColorArgs),
    /// Create a new color group
    CreateGroup(CreateGroupArgs),
    /// Rename a color group
    RenameGroup(RenameGroupArgs),
    /// Delete a color group
    DeleteGroup(DeleteGroupArgs),
    /// Make a color group the active one
    SelectGroup(SelectGroupArgs),
}

/// List base colors and color groups
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a custom color to the active group
#[derive(Debug, Clone, Args)]
pub struct AddColorArgs {
    /// Color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub color: String,
}

/// Remove a custom color from the active group
#[derive(Debug, Clone, Args)]
pub struct RemoveColorArgs {
    /// Color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub color: String,
}

/// Create a new color group
#[derive(Debug, Clone, Args)]
pub struct CreateGroupArgs {
    /// Group name
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

/// Rename a color group
#[derive(Debug, Clone, Args)]
pub struct RenameGroupArgs {
    /// Group id
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// New group name
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

/// Delete a color group
#[derive(Debug, Clone, Args)]
pub struct DeleteGroupArgs {
    /// Group id
    #[arg(long, value_name = "ID")]
    pub id: String,
}

/// Make a color group the active one
#[derive(Debug, Clone, Args)]
pub struct SelectGroupArgs {
    /// Group id
    #[arg(long, value_name = "ID")]
    pub id: String,
}

/// A color group for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    /// Stable group identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Custom colors in the group
    pub colors: Vec<String>,
    /// Whether this group is active
    pub active: bool,
}

/// Palette list response
#[derive(Debug, Clone, Serialize)]
pub struct PaletteListResponse {
    /// The fixed base colors
    pub base_colors: Vec<String>,
    /// All color groups in creation order
    pub groups: Vec<GroupInfo>,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PaletteCommand::List(args) => args.execute(),
            PaletteCommand::AddColor(args) => args.execute(),
            PaletteCommand::RemoveColor(args) => args.execute(),
            PaletteCommand::CreateGroup(args) => args.execute(),
            PaletteCommand::RenameGroup(args) => args.execute(),
            PaletteCommand::DeleteGroup(args) => args.execute(),
            PaletteCommand::SelectGroup(args) => args.execute(),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store()?;
        let palette = load_palette(&store)?;

        let active_id = palette.active_group().id.clone();
        let response = PaletteListResponse {
            base_colors: BASE_COLORS.iter().map(|c| c.to_hex()).collect(),
            groups: palette
                .groups()
                .iter()
                .map(|group| GroupInfo {
                    id: group.id.clone(),
                    name: group.name.clone(),
                    colors: group.colors.iter().map(|c| c.to_hex()).collect(),
                    active: group.id == active_id,
                })
                .collect(),
        };

        // Output
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Base colors ({}):", response.base_colors.len());
            println!("  {}", response.base_colors.join(" "));

            println!("\nColor groups ({}):", response.groups.len());
            for group in &response.groups {
                let marker = if group.active { "*" } else { " " };
                println!("{} {} ({})", marker, group.name, group.id);
                if group.colors.is_empty() {
                    println!("    (no custom colors)");
                } else {
                    println!("    {}", group.colors.join(" "));
                }
            }
        }

        Ok(())
    }
}

impl AddColorArgs {
    /// Execute the add-color command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color_arg(&self.color)?;

        let mut store = open_store()?;
        let mut palette = load_palette(&store)?;
        palette
            .add_custom(color)
            .map_err(|e| CliError::validation(e.to_string()))?;
        save_palette(&mut store, &palette)?;

        println!(
            "✓ Added {} to group '{}'",
            color.to_hex(),
            palette.active_group().name
        );
        Ok(())
    }
}

impl RemoveColorArgs {
    /// Execute the remove-color command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color_arg(&self.color)?;

        let mut store = open_store()?;
        let mut palette = load_palette(&store)?;
        palette
            .remove_custom(color)
            .map_err(|e| CliError::validation(e.to_string()))?;
        save_palette(&mut store, &palette)?;

        println!(
            "✓ Removed {} from group '{}'",
            color.to_hex(),
            palette.active_group().name
        );
        Ok(())
    }
}

impl CreateGroupArgs {
    /// Execute the create-group command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_store()?;
        let mut palette = load_palette(&store)?;
        let id = palette
            .create_group(&self.name)
            .map_err(|e| CliError::validation(e.to_string()))?;
        save_palette(&mut store, &palette)?;

        println!("✓ Created group '{}'", self.name);
        println!("  Id: {id}");
        Ok(())
    }
}

impl RenameGroupArgs {
    /// Execute the rename-group command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_store()?;
        let mut palette = load_palette(&store)?;
        palette
            .rename_group(&self.id, &self.name)
            .map_err(|e| CliError::validation(e.to_string()))?;
        save_palette(&mut store, &palette)?;

        println!("✓ Renamed group {} to '{}'", self.id, self.name);
        Ok(())
    }
}

impl DeleteGroupArgs {
    /// Execute the delete-group command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_store()?;
        let mut palette = load_palette(&store)?;
        palette
            .delete_group(&self.id)
            .map_err(|e| CliError::validation(e.to_string()))?;
        save_palette(&mut store, &palette)?;

        println!("✓ Deleted group {}", self.id);
        println!("  Active group: {}", palette.active_group().name);
        Ok(())
    }
}

impl SelectGroupArgs {
    /// Execute the select-group command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_store()?;
        let mut palette = load_palette(&store)?;
        palette
            .select_group(&self.id)
            .map_err(|e| CliError::validation(e.to_string()))?;
        save_palette(&mut store, &palette)?;

        println!("✓ Active group is now '{}'", palette.active_group().name);
        Ok(())
    }
}

/// Open the shared palette store
fn open_store() -> CliResult<FileStore> {
    let path = Config::store_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate palette store: {e}")))?;
    FileStore::open(path).map_err(|e| CliError::io(format!("Failed to open palette store: {e}")))
}

/// Load the palette from the store
fn load_palette(store: &FileStore) -> CliResult<Palette> {
    PaletteService::load(store).map_err(|e| CliError::io(format!("Failed to load palette: {e}")))
}

/// Persist the palette back to the store
fn save_palette(store: &mut FileStore, palette: &Palette) -> CliResult<()> {
    PaletteService::save(store, palette)
        .map_err(|e| CliError::io(format!("Failed to save palette: {e}")))
}
