//! Interactive browsing over stdin.
//!
//! Each input line is one user interaction:
//!
//! ```text
//! category <C>      select a category ("all" or nothing for every category)
//! subcategory <S>   select a subcategory within the current category
//! search <T>        free-text search; an empty term leaves search mode
//! clear             leave search mode
//! reload            load the shop list again and start over
//! quit              end the session
//! ```
//!
//! The menu and cards are printed again after every accepted interaction.
//! Rejected input is reported and leaves the session as it was.

use super::render::{ListLayout, Presenter, LOADING_MESSAGE, LOAD_ERROR_MESSAGE};
use shopdir::api::ShopdirApi;
use shopdir::commands::{CmdMessage, CmdResult, FilterEvent, SelectionPolicy};
use shopdir::error::Result;
use shopdir::model::Facet;
use shopdir::store::{DataSource, FallbackMode};
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Event(FilterEvent),
    Reload,
    Quit,
    Blank,
}

fn parse_line(line: &str) -> std::result::Result<Input, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let input = match word {
        "" => Input::Blank,
        "category" | "c" => Input::Event(FilterEvent::SelectCategory(facet(rest))),
        "subcategory" | "sub" | "s" => Input::Event(FilterEvent::SelectSubcategory(facet(rest))),
        "search" | "q" => Input::Event(FilterEvent::SetSearch(rest.to_string())),
        "clear" => Input::Event(FilterEvent::ClearSearch),
        "reload" => Input::Reload,
        "quit" | "exit" => Input::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(input)
}

fn facet(value: &str) -> Facet {
    if value.is_empty() {
        Facet::All
    } else {
        Facet::from(value)
    }
}

/// Prints the loading placeholder, performs the startup load and runs a
/// session over stdin.
pub async fn run<S: DataSource>(
    source: S,
    mode: FallbackMode,
    policy: SelectionPolicy,
    presenter: &Presenter,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", presenter.status_text(LOADING_MESSAGE, false)?)?;
    out.flush()?;

    let mut api = match ShopdirApi::load(source, mode, policy).await {
        Ok(api) => api,
        Err(e) => {
            write!(out, "{}", presenter.status_text(LOAD_ERROR_MESSAGE, true)?)?;
            return Err(e);
        }
    };

    let stdin = std::io::stdin();
    session(&mut api, presenter, stdin.lock(), &mut out).await
}

/// Feeds input lines to the session until `quit` or end of input.
pub async fn session<S, R, W>(
    api: &mut ShopdirApi<S>,
    presenter: &Presenter,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: DataSource,
    R: BufRead,
    W: Write,
{
    show(presenter, &api.current(), out)?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Input::Blank) => continue,
            Ok(Input::Quit) => break,
            Ok(Input::Reload) => {
                write!(out, "{}", presenter.status_text(LOADING_MESSAGE, false)?)?;
                match api.reload().await {
                    Ok(result) => show(presenter, &result, out)?,
                    Err(_) => write!(out, "{}", presenter.status_text(LOAD_ERROR_MESSAGE, true)?)?,
                }
            }
            Ok(Input::Event(event)) => match api.dispatch(event) {
                Ok(result) => show(presenter, &result, out)?,
                Err(e) => warn(presenter, &e.to_string(), out)?,
            },
            Err(message) => warn(presenter, &message, out)?,
        }
        out.flush()?;
    }
    Ok(())
}

fn show<W: Write>(presenter: &Presenter, result: &CmdResult, out: &mut W) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", presenter.shop_list(result, ListLayout::Session)?)?;
    write!(out, "{}", presenter.messages(&result.messages)?)?;
    Ok(())
}

fn warn<W: Write>(presenter: &Presenter, message: &str, out: &mut W) -> Result<()> {
    write!(out, "{}", presenter.messages(&[CmdMessage::warning(message)])?)?;
    Ok(())
}
