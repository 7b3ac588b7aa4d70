// ============================================================================
// src/ui.rs – Console reporter ([INFO] / [WARNING] / [ERROR] lines)
// ============================================================================

use console::Style;
#[cfg(test)]
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "[INFO]",
            Level::Warning => "[WARNING]",
            Level::Error => "[ERROR]",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Info => Style::new().cyan().bold(),
            Level::Warning => Style::new().yellow().bold(),
            Level::Error => Style::new().red().bold(),
        }
    }
}

enum Sink {
    Terminal,
    #[cfg(test)]
    Capture(RefCell<Vec<String>>),
}

/// Everything the user reads goes through here.
pub struct UX {
    pub quiet: bool,
    sink: Sink,
}

impl UX {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            sink: Sink::Terminal,
        }
    }

    /// Collects plain (unstyled) lines instead of printing them.
    #[cfg(test)]
    pub fn capture() -> Self {
        Self {
            quiet: false,
            sink: Sink::Capture(RefCell::new(Vec::new())),
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Capture(lines) => lines.borrow().clone(),
            Sink::Terminal => Vec::new(),
        }
    }

    pub fn banner(&self) {
        if self.quiet {
            return;
        }
        let frame = Style::new().color256(39).bold();
        self.emit_raw(
            &frame
                .apply_to("═══ DOCKYARD // Docker engine installer ═══")
                .to_string(),
            "═══ DOCKYARD // Docker engine installer ═══",
        );
    }

    pub fn info(&self, msg: &str) {
        if !self.quiet {
            self.emit(Level::Info, msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        self.emit(Level::Warning, msg);
    }

    pub fn error(&self, msg: &str) {
        self.emit(Level::Error, msg);
    }

    /// Indented follow-up line with no tag (commands the user should type).
    pub fn hint(&self, msg: &str) {
        if self.quiet {
            return;
        }
        let line = format!("    {msg}");
        self.emit_raw(&Style::new().bold().apply_to(&line).to_string(), &line);
    }

    /// Untagged line, always shown; menus use it.
    pub fn say(&self, msg: &str) {
        self.emit_raw(msg, msg);
    }

    pub fn dry_run(&self, command: &str) {
        let plain = format!("[DRY-RUN] {command}");
        let styled = format!(
            "{} {}",
            Style::new().magenta().bold().apply_to("[DRY-RUN]"),
            command
        );
        self.emit_raw(&styled, &plain);
    }

    fn emit(&self, level: Level, msg: &str) {
        let plain = format!("{} {}", level.tag(), msg);
        let styled = format!("{} {}", level.style().apply_to(level.tag()), msg);
        self.emit_raw(&styled, &plain);
    }

    #[cfg_attr(not(test), allow(unused_variables))]
    fn emit_raw(&self, styled: &str, plain: &str) {
        match &self.sink {
            Sink::Terminal => println!("{styled}"),
            #[cfg(test)]
            Sink::Capture(lines) => lines.borrow_mut().push(plain.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_severity_tags() {
        let ui = UX::capture();
        ui.info("Updating package list...");
        ui.warn("Kernel is old.");
        ui.error("Command failed: x");
        assert_eq!(
            ui.lines(),
            vec![
                "[INFO] Updating package list...",
                "[WARNING] Kernel is old.",
                "[ERROR] Command failed: x",
            ]
        );
    }

    #[test]
    fn quiet_mutes_info_but_not_errors() {
        let mut ui = UX::capture();
        ui.quiet = true;
        ui.info("hidden");
        ui.hint("docker run hello-world");
        ui.error("shown");
        assert_eq!(ui.lines(), vec!["[ERROR] shown"]);
    }
}
