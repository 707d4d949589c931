//! Editor integration for entry files

use crate::error::{EncycloError, Result};
use std::path::Path;
use std::process::Command;

/// Session for editing a file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and wait until the editor exits
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = Command::new(&program);

        log::debug!("launching editor {} {:?}", program, args);
        let status = cmd.args(&args).status().map_err(|e| {
            EncycloError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(EncycloError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace();

        match parts.next() {
            Some(program) => (program.to_string(), parts.map(str::to_string).collect()),
            None if cfg!(windows) => ("notepad".to_string(), vec![]),
            None => ("nano".to_string(), vec![]),
        }
    }
}
