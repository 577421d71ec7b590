// Guess prompt input
//
// Readline editing and persistent history when attached to a terminal,
// plain buffered stdin when input is piped.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

pub enum InputHandler {
    Interactive {
        editor: DefaultEditor,
        history_path: PathBuf,
    },
    Piped,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        if !std::io::stdin().is_terminal() {
            return Ok(Self::Piped);
        }

        let mut editor = DefaultEditor::new().context("Failed to initialize line editor")?;

        // History lives next to the config: ~/.mastermind/history.txt
        let history_path = dirs::home_dir()
            .context("Could not determine home directory")?
            .join(".mastermind")
            .join("history.txt");

        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self::Interactive {
            editor,
            history_path,
        })
    }

    /// Read one line, trimmed of surrounding whitespace.
    ///
    /// `Ok(None)` means end of input: Ctrl+C, Ctrl+D, or EOF on a pipe.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self {
            Self::Interactive { editor, .. } => match editor.readline(prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        let _ = editor.add_history_entry(&line);
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
                Err(err) => Err(err).context("Failed to read input"),
            },
            Self::Piped => {
                print!("{prompt}");
                std::io::stdout().flush()?;

                let mut line = String::new();
                let bytes = std::io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .context("Failed to read from stdin")?;
                if bytes == 0 {
                    Ok(None)
                } else {
                    Ok(Some(line.trim().to_string()))
                }
            }
        }
    }

    /// Persist the prompt history. No-op in piped mode.
    pub fn save_history(&mut self) -> Result<()> {
        if let Self::Interactive {
            editor,
            history_path,
        } = self
        {
            if let Some(parent) = history_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            editor
                .save_history(history_path)
                .with_context(|| format!("Failed to save history to {}", history_path.display()))?;
        }
        Ok(())
    }
}
