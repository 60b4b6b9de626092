//! Prompt CLI command

use crate::clipboard::{copy_text, SystemClipboard};
use crate::config::settings::Settings;
use crate::error::ReadlogResult;
use crate::prompt::PromptBuilder;
use crate::services::EntryService;
use crate::storage::Storage;

/// Print (or copy) the assistant prompt for an entry
pub fn handle_prompt_command(
    storage: &Storage,
    settings: &Settings,
    id: &str,
    copy: bool,
) -> ReadlogResult<()> {
    let entry = EntryService::new(storage).require(id)?;
    let prompt = PromptBuilder::from_settings(settings).build_prompt(&entry);

    if copy && copy_text(&mut SystemClipboard::new(), &prompt) {
        println!("Prompt for '{}' copied to the clipboard", entry.display_title());
        return Ok(());
    }

    println!("{}", prompt);
    Ok(())
}
