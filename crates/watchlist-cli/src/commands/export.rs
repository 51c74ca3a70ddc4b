use crate::context::AppContext;
use crate::output::Output;
use color_eyre::Result;
use std::path::PathBuf;
use watchlist_core::PersistenceBridge;

pub fn run_export(ctx: &AppContext, file: Option<PathBuf>, output: &Output) -> Result<()> {
    let bridge = PersistenceBridge::new(ctx.storage());
    let raw = bridge
        .stored_json()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read stored watchlist: {}", e))?
        .unwrap_or_else(|| "[]".to_string());

    match file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &raw)
                .map_err(|e| color_eyre::eyre::eyre!("Failed to write {}: {}", path.display(), e))?;
            output.success(format!("Exported watchlist to {}", path.display()));
        }
        None => {
            // Already JSON; printed as stored regardless of --output
            println!("{}", raw);
        }
    }

    Ok(())
}
