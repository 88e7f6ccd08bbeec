//! Entry body reading from flags, stdin or `$EDITOR`.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::CliError;

/// Read entry body from --body flag, stdin, or $EDITOR.
///
/// `initial_body` pre-fills the editor buffer (used by `edit`).
pub fn read_entry_body(
    no_input: bool,
    body: Option<String>,
    editor_override: Option<&str>,
    initial_body: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        if value.trim().is_empty() {
            return Err(CliError::invalid_input("--body cannot be empty").into());
        }
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.trim().is_empty() {
            if !no_input && editor_override.is_some() {
                return read_body_from_editor(editor_override, initial_body);
            }
            return Err(CliError::invalid_input("No input provided on stdin").into());
        }
        return Ok(trimmed);
    }

    if no_input {
        return Err(CliError::invalid_input("--no-input requires content from stdin").into());
    }

    read_body_from_editor(editor_override, initial_body)
}

/// Open $EDITOR to compose entry body.
fn read_body_from_editor(
    editor_override: Option<&str>,
    initial_body: Option<&str>,
) -> anyhow::Result<String> {
    let editor = editor_override
        .map(|value| value.to_string())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            CliError::invalid_input("$EDITOR is not set; use --body or pipe content via stdin")
        })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("flownote_entry_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    std::fs::write(&path, initial_body.unwrap_or(""))
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    // Editors like "code --wait" carry their own arguments.
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    let trimmed = contents.trim_end().to_string();
    if trimmed.trim().is_empty() {
        return Err(CliError::invalid_input("Entry body is empty").into());
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_flag_wins() {
        let body = read_entry_body(true, Some("hello".to_string()), None, None).unwrap();
        assert_eq!(body, "hello");
    }

    #[test]
    fn test_blank_body_flag_is_invalid_input() {
        let err = read_entry_body(true, Some("   ".to_string()), None, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }
}
