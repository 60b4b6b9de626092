//! Configuration CLI commands

use clap::Subcommand;

use crate::audit::Subject;
use crate::config::paths::ReadlogPaths;
use crate::config::settings::Settings;
use crate::error::ReadlogResult;
use crate::storage::Storage;

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,
    /// Change one setting
    Set {
        /// Setting name (e.g. default_topic, recent_window_days, native_language)
        key: String,
        /// New value
        value: String,
    },
    /// Restore default settings
    Reset,
}

/// Handle a configuration command
pub fn handle_config_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ConfigCommands,
) -> ReadlogResult<()> {
    let paths = storage.paths();

    match cmd {
        ConfigCommands::Show => print_config(paths, settings),

        ConfigCommands::Set { key, value } => {
            let mut updated = settings.clone();
            updated.set(&key, &value)?;
            save_settings(storage, settings, &updated)?;
            println!("Set {} = {}", key.trim(), value.trim());
        }

        ConfigCommands::Reset => {
            save_settings(storage, settings, &Settings::default())?;
            println!("Settings reset to defaults");
        }
    }

    Ok(())
}

fn save_settings(storage: &Storage, before: &Settings, after: &Settings) -> ReadlogResult<()> {
    after.save(storage.paths())?;
    if before != after {
        storage.log_update(Subject::Settings, "settings", None, before, after)?;
    }
    Ok(())
}

fn print_config(paths: &ReadlogPaths, settings: &Settings) {
    println!("readlog Configuration");
    println!("=====================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  default_topic:      {}", settings.default_topic);
    println!("  default_minutes:    {}", settings.default_minutes);
    println!("  default_difficulty: {}", settings.default_difficulty);
    println!("  recent_window_days: {}", settings.recent_window_days);
    println!("  source_language:    {}", settings.source_language);
    println!("  native_language:    {}", settings.native_language);
}
