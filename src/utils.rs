use std::io::Write;
use crate::GenError;
use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

/// Blocking-style user alert: a highlighted line the user has to read before going on.
pub fn alert<W: Write>(mut out: W, msg: &str) -> Result<(), GenError> {
    out.queue(SetForegroundColor(Color::Yellow))?;
    out.queue(Print(format!("⚠  {}\n", msg)))?;
    out.queue(ResetColor)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_writes_message() {
        let mut buffer = Vec::new();
        alert(&mut buffer, "Please select at least one item to delete.").unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert!(written.contains("⚠  Please select at least one item to delete.\n"));
    }
}
