use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::album_sync::AlbumListSync;
use crate::utils::alert;
use crate::view::{AlbumView, Page};
use crate::GenError;

static PROMPT: &str = "albums> ";
static HELP: &str = "\
set <field> <value>   fill a form field
form                  show the form
submit                create an album from the form
list                  refresh the album table
check <id>...         check table rows
uncheck <id>...       uncheck table rows
delete                delete the checked albums
show                  print the page
help                  this text
quit                  leave the shell
";

#[derive(Debug, PartialEq)]
pub enum ShellCommand {
    Set { field: String, value: String },
    Form,
    Submit,
    List,
    Check(Vec<String>),
    Uncheck(Vec<String>),
    Delete,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Option<ShellCommand>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let ids = || rest.split_whitespace().map(String::from).collect::<Vec<_>>();

        let cmd = match word {
            "set" => match rest.split_once(char::is_whitespace) {
                Some((field, value)) => ShellCommand::Set {
                    field: field.to_owned(),
                    value: value.trim().to_owned(),
                },
                None if !rest.is_empty() => ShellCommand::Set {
                    field: rest.to_owned(),
                    value: String::new(),
                },
                None => return Err("usage: set <field> <value>".to_owned()),
            },
            "form" => ShellCommand::Form,
            "submit" => ShellCommand::Submit,
            "list" | "refresh" => ShellCommand::List,
            "check" if !rest.is_empty() => ShellCommand::Check(ids()),
            "uncheck" if !rest.is_empty() => ShellCommand::Uncheck(ids()),
            "check" | "uncheck" => return Err(format!("usage: {} <id>...", word)),
            "delete" => ShellCommand::Delete,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{}', try help", other)),
        };
        Ok(Some(cmd))
    }
}

/// Runs commands from `input` until it ends or `quit`; the page survives failed actions.
pub async fn run_shell<R, W>(
    sync: &mut AlbumListSync<Page>,
    input: R,
    mut out: W,
) -> Result<(), GenError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        let cmd = match ShellCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        debug!(?cmd, "shell command");

        match cmd {
            ShellCommand::Set { field, value } => sync.view_mut().set_field(field, value),
            ShellCommand::Form => {
                for (name, value) in sync.view().form_fields().fields() {
                    writeln!(out, "{} = {}", name, value)?;
                }
            }
            ShellCommand::Submit => {
                if sync.submit_create().await.is_ok() {
                    writeln!(out, "{}", sync.view().response())?;
                }
            }
            ShellCommand::List => {
                if sync.refresh().await.is_ok() {
                    write!(out, "{}", sync.view().to_html())?;
                }
            }
            ShellCommand::Check(ids) | ShellCommand::Uncheck(ids) if sync.view().table().is_none() => {
                writeln!(out, "no table yet, run list first ({} ignored)", ids.join(" "))?;
            }
            ShellCommand::Check(ids) => {
                for id in ids {
                    if !sync.view_mut().check(&id) {
                        writeln!(out, "no row with id {}", id)?;
                    }
                }
            }
            ShellCommand::Uncheck(ids) => {
                for id in ids {
                    if !sync.view_mut().uncheck(&id) {
                        writeln!(out, "no row with id {}", id)?;
                    }
                }
            }
            ShellCommand::Delete => {
                if let Ok(outcome) = sync.delete_selected().await {
                    writeln!(out, "delete: {:?}", outcome)?;
                }
            }
            ShellCommand::Show => write!(out, "{}", sync.view().to_html())?,
            ShellCommand::Help => write!(out, "{}", HELP)?,
            ShellCommand::Quit => break,
        }

        for msg in sync.view_mut().take_alerts() {
            alert(&mut out, &msg)?;
        }
    }

    Ok(())
}
