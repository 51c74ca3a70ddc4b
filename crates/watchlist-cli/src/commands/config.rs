use crate::context::AppContext;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use comfy_table::{Cell, Table};
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use watchlist_config::{Config, IdStrategy};

pub fn run_config(ctx: &AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx, output),
        ConfigCommands::Path => {
            let path = ctx.paths.config_file();
            match output.format() {
                OutputFormat::Human => println!("{}", path.display()),
                OutputFormat::Json | OutputFormat::JsonPretty => output.json(&json!({
                    "type": "config_path",
                    "path": path.display().to_string(),
                    "exists": path.exists(),
                })),
            }
            Ok(())
        }
        ConfigCommands::Init { force } => init_config(ctx, force, output),
    }
}

fn id_strategy_label(strategy: IdStrategy) -> &'static str {
    match strategy {
        IdStrategy::Uuid => "uuid (UUIDv7)",
        IdStrategy::Timestamp => "timestamp (milliseconds)",
    }
}

fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    let config = &ctx.config;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            println!("\n{}", "Configuration".bright_cyan().bold());
            if !config_file.exists() {
                println!("{}", "No config file found, showing defaults. Create one with 'watchlist config init'.".dimmed());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config file"), Cell::new(config_file.display().to_string())]);
            table.add_row(vec![
                Cell::new("Storage directory"),
                Cell::new(ctx.paths.storage_dir().display().to_string()),
            ]);
            table.add_row(vec![Cell::new("Id strategy"), Cell::new(id_strategy_label(config.ids.strategy))]);
            table.add_row(vec![
                Cell::new("Stars"),
                Cell::new(format!("{}{}", config.display.filled_star, config.display.empty_star)),
            ]);
            table.add_row(vec![
                Cell::new("Log file"),
                Cell::new(
                    config
                        .logging
                        .file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "stderr".to_string()),
                ),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "type": "config",
                "config_file": config_file.display().to_string(),
                "storage_dir": ctx.paths.storage_dir().display().to_string(),
                "config": config,
            }));
        }
    }

    Ok(())
}

fn init_config(ctx: &AppContext, force: bool, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();

    if config_file.exists() && !force {
        output.warn(format!(
            "Config file already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default config to {}", config_file.display()));
    Ok(())
}
