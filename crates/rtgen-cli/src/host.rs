//! Terminal implementation of the generator host.

use async_trait::async_trait;
use indicatif::ProgressBar;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use rtgen_core::{Host, Notification, NotificationLevel};

/// Prints notifications and asks overwrite questions on the terminal.
pub struct TerminalHost {
    /// Overwrite existing test files without asking.
    force: bool,
    /// Suppress informational messages (errors are still printed).
    quiet: bool,
    progress: Option<ProgressBar>,
}

impl TerminalHost {
    pub fn new(force: bool, quiet: bool) -> Self {
        Self {
            force,
            quiet,
            progress: None,
        }
    }

    /// Route output through a progress bar so it is not drawn over.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    fn print(&self, line: String, to_stderr: bool) {
        match &self.progress {
            Some(pb) => pb.println(line),
            None if to_stderr => eprintln!("{}", line),
            None => println!("{}", line),
        }
    }
}

#[async_trait]
impl Host for TerminalHost {
    async fn confirm_overwrite(&self, path: &Path) -> bool {
        if self.force {
            return true;
        }
        if !io::stdin().is_terminal() {
            return false;
        }

        let question = format!("Test file already exists: {}. Overwrite? [y/N] ", path.display());
        let progress = self.progress.clone();

        tokio::task::spawn_blocking(move || {
            let ask = || {
                eprint!("{}", question);
                let _ = io::stderr().flush();
                let mut answer = String::new();
                match io::stdin().read_line(&mut answer) {
                    Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
                    Err(_) => false,
                }
            };
            match progress {
                Some(pb) => pb.suspend(ask),
                None => ask(),
            }
        })
        .await
        .unwrap_or(false)
    }

    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info if self.quiet => {}
            NotificationLevel::Info => self.print(notification.message, false),
            NotificationLevel::Warning => {
                self.print(format!("warning: {}", notification.message), true)
            }
            NotificationLevel::Error => {
                self.print(format!("error: {}", notification.message), true)
            }
        }
    }
}
