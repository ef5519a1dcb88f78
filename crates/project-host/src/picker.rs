//! Line-based folder prompt.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use stillreel_host_core::{FolderChoice, FolderPicker, HostError, HostResult};

/// Asks for a folder on `output` and reads the answer from `input`.
///
/// An empty answer takes the default, `q` or end of input cancels.
pub struct PromptFolderPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptFolderPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptFolderPicker<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompt on stderr, read from stdin.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> FolderPicker for PromptFolderPicker<R, W> {
    fn choose_folder(&mut self, default: &Path) -> HostResult<FolderChoice> {
        let io_err = |source| HostError::Io {
            path: default.to_path_buf(),
            source,
        };

        write!(
            self.output,
            "Stills folder [{}] (q to cancel): ",
            default.display()
        )
        .map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(io_err)? == 0 {
            return Ok(FolderChoice::Cancelled);
        }

        let answer = line.trim();
        let chosen = match answer {
            "q" | "Q" => return Ok(FolderChoice::Cancelled),
            "" => default.to_path_buf(),
            path => PathBuf::from(path),
        };

        if !chosen.is_dir() {
            return Err(HostError::FolderUnavailable { path: chosen });
        }
        Ok(FolderChoice::Chosen(chosen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str, default: &Path) -> (HostResult<FolderChoice>, String) {
        let mut output = Vec::new();
        let result = PromptFolderPicker::new(Cursor::new(input.as_bytes()), &mut output)
            .choose_folder(default);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_answer_takes_default() {
        let default = std::env::temp_dir();
        let (result, prompt) = ask("\n", &default);
        assert_eq!(result.unwrap(), FolderChoice::Chosen(default.clone()));
        assert!(prompt.contains(&default.display().to_string()));
    }

    #[test]
    fn typed_folder_is_used() {
        let dir = std::env::temp_dir().join("stillreel_picker_typed");
        std::fs::create_dir_all(&dir).unwrap();
        let (result, _) = ask(&format!("  {}  \n", dir.display()), Path::new("/unused"));
        assert_eq!(result.unwrap(), FolderChoice::Chosen(dir.clone()));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn q_and_eof_cancel() {
        assert_eq!(
            ask("q\n", Path::new("/unused")).0.unwrap(),
            FolderChoice::Cancelled
        );
        assert_eq!(
            ask("", Path::new("/unused")).0.unwrap(),
            FolderChoice::Cancelled
        );
    }

    #[test]
    fn non_directory_answer_is_an_error() {
        let (result, _) = ask("/definitely/not/here\n", Path::new("/unused"));
        assert!(matches!(result, Err(HostError::FolderUnavailable { .. })));
    }
}
