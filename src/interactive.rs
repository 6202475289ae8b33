// src/interactive.rs
//! Line-oriented query form. Rows are numbered from 1 on screen.

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::App;
use crate::cli::{format_response, OutputFormat};
use crate::core::AnalysisService;
use crate::error::SubmitError;
use crate::utils::NOT_AVAILABLE;

pub const HELP: &str = "\
Commands:
  query <text>       set the search query
  add [text]         add a competitor row
  set <n> <text>     change competitor row n
  remove <n>         remove competitor row n (row 1 stays)
  index <text>       set the search query index
  show               show the form
  submit             run the analysis
  results            show the last successful analysis
  help               show this help
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Query(String),
    Add(Option<String>),
    Set(usize, String),
    Remove(usize),
    Index(String),
    Show,
    Submit,
    Results,
    Help,
    Quit,
}

/// Parse one input line. Row numbers are converted to zero-based indices.
pub fn parse_command(line: &str) -> Result<FormCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "query" | "q" => Ok(FormCommand::Query(rest.to_string())),
        "add" | "a" => Ok(FormCommand::Add(
            Some(rest.to_string()).filter(|s| !s.is_empty()),
        )),
        "set" => {
            let (row, value) = match rest.split_once(char::is_whitespace) {
                Some((row, value)) => (row, value.trim()),
                None => (rest, ""),
            };
            Ok(FormCommand::Set(parse_row(row)?, value.to_string()))
        }
        "remove" | "rm" => Ok(FormCommand::Remove(parse_row(rest)?)),
        "index" => Ok(FormCommand::Index(rest.to_string())),
        "show" | "" => Ok(FormCommand::Show),
        "submit" | "analyze" => Ok(FormCommand::Submit),
        "results" => Ok(FormCommand::Results),
        "help" | "?" => Ok(FormCommand::Help),
        "quit" | "exit" => Ok(FormCommand::Quit),
        other => Err(format!("Unknown command `{}`. Type `help`.", other)),
    }
}

fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Expected a row number starting at 1, got `{}`", raw)),
    }
}

pub fn write_form<W: Write>(app: &App, out: &mut W) -> std::io::Result<()> {
    let form = app.form();
    let query = if form.query.is_empty() {
        NOT_AVAILABLE
    } else {
        form.query.as_str()
    };
    writeln!(out, "Query: {}", query)?;
    writeln!(out, "Competitors:")?;
    for (i, row) in form.competitors.rows().iter().enumerate() {
        let value = if row.is_empty() { "(empty)" } else { row.as_str() };
        if form.competitors.can_remove(i) {
            writeln!(out, "  {}. {}  [remove {}]", i + 1, value, i + 1)?;
        } else {
            writeln!(out, "  {}. {}", i + 1, value)?;
        }
    }
    let index = if form.search_index.is_empty() {
        NOT_AVAILABLE
    } else {
        form.search_index.as_str()
    };
    writeln!(out, "Search index: {}", index)?;

    let trigger = if app.trigger_enabled() {
        format!("[{}]", app.trigger_label())
    } else {
        format!("[{}] (disabled)", app.trigger_label())
    };
    writeln!(out, "{}", trigger)?;

    if let Some(notice) = app.notice() {
        writeln!(out, "⚠️  {}", notice)?;
    }
    Ok(())
}

/// Run the prompt until `quit` or end of input
pub async fn run<R, W, S>(
    app: &mut App,
    service: &S,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: AnalysisService + ?Sized,
{
    let mut lines = input.lines();
    writeln!(out, "{}\n", HELP)?;
    write_form(app, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        debug!("Interactive input: {:?}", line);

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        if !apply(app, service, command, out, format).await? {
            break;
        }
    }

    Ok(())
}

/// Returns `false` when the user asked to leave
async fn apply<W, S>(
    app: &mut App,
    service: &S,
    command: FormCommand,
    out: &mut W,
    format: OutputFormat,
) -> Result<bool>
where
    W: Write,
    S: AnalysisService + ?Sized,
{
    match command {
        FormCommand::Query(query) => {
            app.form_mut().query = query;
            write_form(app, out)?;
        }
        FormCommand::Add(value) => {
            let index = app.form_mut().competitors.append();
            if let Some(value) = value {
                app.form_mut().competitors.update(index, value)?;
            }
            write_form(app, out)?;
        }
        FormCommand::Set(index, value) => match app.form_mut().competitors.update(index, value) {
            Ok(()) => write_form(app, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
        FormCommand::Remove(index) => match app.form_mut().competitors.remove(index) {
            Ok(_) => write_form(app, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
        FormCommand::Index(index) => {
            app.form_mut().search_index = index;
            write_form(app, out)?;
        }
        FormCommand::Show => write_form(app, out)?,
        FormCommand::Submit => submit(app, service, out, format).await?,
        FormCommand::Results => match app.results() {
            Some(response) => writeln!(out, "{}", format_response(response, format)?)?,
            None => writeln!(out, "No results yet.")?,
        },
        FormCommand::Help => writeln!(out, "{}", HELP)?,
        FormCommand::Quit => return Ok(false),
    }
    Ok(true)
}

async fn submit<W, S>(app: &mut App, service: &S, out: &mut W, format: OutputFormat) -> Result<()>
where
    W: Write,
    S: AnalysisService + ?Sized,
{
    let pending = match app.begin_submit() {
        Ok(pending) => pending,
        Err(SubmitError::EmptyQuery) => {
            writeln!(out, "Please enter a search query first.")?;
            return Ok(());
        }
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
    };

    writeln!(out, "[{}]", app.trigger_label())?;
    out.flush()?;

    let outcome = service.search(pending.request()).await;
    match app.finish_submit(pending, outcome) {
        Ok(_) => {
            if let Some(response) = app.results() {
                writeln!(out, "{}", format_response(response, format)?)?;
            }
        }
        Err(e) => writeln!(out, "⚠️  {}", e.notice())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("query  project tools "),
            Ok(FormCommand::Query("project tools".into()))
        );
        assert_eq!(parse_command("add"), Ok(FormCommand::Add(None)));
        assert_eq!(
            parse_command("add monday.com"),
            Ok(FormCommand::Add(Some("monday.com".into())))
        );
        assert_eq!(
            parse_command("set 2 Trello Inc"),
            Ok(FormCommand::Set(1, "Trello Inc".into()))
        );
        assert_eq!(parse_command("remove 3"), Ok(FormCommand::Remove(2)));
        assert_eq!(parse_command("SUBMIT"), Ok(FormCommand::Submit));
        assert_eq!(parse_command(""), Ok(FormCommand::Show));
    }

    #[test]
    fn test_parse_rejects_bad_rows_and_unknown_words() {
        assert!(parse_command("remove 0").is_err());
        assert!(parse_command("remove two").is_err());
        assert!(parse_command("set").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn test_form_shows_remove_only_after_first_row() {
        let mut app = App::default();
        app.form_mut().competitors.append();
        let mut out = Vec::new();
        write_form(&app, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  1. (empty)\n"));
        assert!(text.contains("  2. (empty)  [remove 2]\n"));
        assert!(text.contains("[Analyze]\n"));
    }
}
