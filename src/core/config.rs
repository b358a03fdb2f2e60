use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (defaults filled in) as YAML.
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        let source = if path.exists() {
            path.display().to_string()
        } else {
            format!("{} (not found, defaults)", path.display())
        };
        println!("📄 Current configuration: {source}\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open the configuration in an editor, writing the defaults first when
    /// the file does not exist yet. Falls back to the platform editor.
    pub fn edit(cfg: &Config, path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            cfg.save(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!("Configuration file edited using '{editor_to_use}'"));
            return Ok(());
        }

        warning(format!(
            "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
        ));
        if run_editor(&default_editor, path) {
            success(format!("Configuration file edited using fallback '{default_editor}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit {} with '{default_editor}'",
                path.display()
            )))
        }
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
