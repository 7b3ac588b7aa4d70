// ============================================================================
// src/menu.rs – Top-level install / uninstall menu
// ============================================================================

use anyhow::Result;
use console::Style;

use crate::error::DockyardError;
use crate::prompt::{parse_choice, Prompter};
use crate::ui::UX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Install,
    Uninstall,
}

const ENTRIES: [(MenuChoice, &str); 2] = [
    (MenuChoice::Install, "Install Docker"),
    (MenuChoice::Uninstall, "Uninstall Docker"),
];

/// Ask once. `Ok(None)` for an answer that is not a menu number; the caller
/// reports it and leaves without doing anything.
pub fn show_main_menu(ui: &UX, prompter: &mut dyn Prompter) -> Result<Option<MenuChoice>> {
    ui.say("");
    ui.say(
        &Style::new()
            .bold()
            .apply_to("What would you like to do?")
            .to_string(),
    );
    for (idx, (_, label)) in ENTRIES.iter().enumerate() {
        ui.say(&format!("{}. {}", idx + 1, label));
    }

    let Some(answer) = prompter.ask("Enter your choice (1 or 2)")? else {
        return Err(DockyardError::InputClosed.into());
    };
    let choice = parse_choice(&answer)
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| ENTRIES.get(idx as usize))
        .map(|(choice, _)| *choice);
    Ok(choice)
}
