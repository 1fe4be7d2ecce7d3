//! `vaka menu`: numbered interactive loop over the case manager.
//!
//! Nothing here ends the loop except an exit choice or end of input. Misses,
//! rejected transitions and bad input are reported and the menu is shown
//! again.

use std::io::{self, BufRead, Write};

use vaka_core::clock::Clock;
use vaka_core::entities::NewCase;
use vaka_core::enums::CaseStatus;
use vaka_store::CaseManager;

use crate::context::AppContext;

const MENU: &str = "\
Menu:
1. Create case
2. View case
3. List cases
4. Search cases
5. Append update
6. Change status
7. Exit";

/// Handle `vaka menu` on the process's stdin and stdout.
pub fn handle(ctx: &mut AppContext) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut ctx.manager, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive the menu until the user exits or `input` runs dry.
pub fn run_loop<C, R, W>(manager: &mut CaseManager<C>, input: R, mut out: W) -> io::Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(choice) = prompt(&mut lines, &mut out, "Choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => create(manager, &mut lines, &mut out)?,
            "2" => view(manager, &mut lines, &mut out)?,
            "3" => list(manager, &mut out)?,
            "4" => search(manager, &mut lines, &mut out)?,
            "5" => append_update(manager, &mut lines, &mut out)?,
            "6" => change_status(manager, &mut lines, &mut out)?,
            "7" | "exit" | "q" => {
                writeln!(out, "Exiting.")?;
                return Ok(());
            }
            "" => {}
            other => writeln!(out, "Invalid choice: {other}")?,
        }
    }

    tracing::debug!("menu input closed");
    Ok(())
}

/// Print `label`, read one trimmed line. `None` means end of input.
fn prompt<I, W>(lines: &mut I, out: &mut W, label: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    lines
        .next()
        .transpose()
        .map(|line| line.map(|text| text.trim().to_string()))
}

fn create<C, I, W>(manager: &mut CaseManager<C>, lines: &mut I, out: &mut W) -> io::Result<()>
where
    C: Clock,
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let mut answers = Vec::with_capacity(5);
    for label in [
        "Title: ",
        "Description: ",
        "Date reported (YYYY-MM-DD): ",
        "Location: ",
        "Evidence (comma separated): ",
    ] {
        match prompt(lines, out, label)? {
            Some(answer) => answers.push(answer),
            None => return Ok(()),
        }
    }
    let [title, description, date_reported, location, evidence] = answers.as_slice() else {
        return Ok(());
    };

    if title.is_empty() {
        writeln!(out, "A case needs a title.")?;
        return Ok(());
    }

    let input = NewCase::new(title.as_str(), description.as_str(), date_reported.as_str())
        .location(location.as_str())
        .evidence(
            evidence
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty()),
        );
    let case = manager.create_case(input);
    writeln!(out, "Created case {}", case.id())
}

fn view<C, I, W>(manager: &CaseManager<C>, lines: &mut I, out: &mut W) -> io::Result<()>
where
    C: Clock,
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let Some(id) = prompt(lines, out, "Case ID: ")? else {
        return Ok(());
    };
    match manager.get_case(&id) {
        Some(case) => writeln!(out, "{}", case.sheet()),
        None => writeln!(out, "Case not found: {id}"),
    }
}

fn list<C: Clock, W: Write>(manager: &CaseManager<C>, out: &mut W) -> io::Result<()> {
    let cases = manager.list_cases(None);
    if cases.is_empty() {
        return writeln!(out, "No cases yet.");
    }
    for case in cases {
        writeln!(out, "{} | {:<18} | {}", case.id(), case.status().as_str(), case.title)?;
    }
    Ok(())
}

fn search<C, I, W>(manager: &CaseManager<C>, lines: &mut I, out: &mut W) -> io::Result<()>
where
    C: Clock,
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let Some(query) = prompt(lines, out, "Search term: ")? else {
        return Ok(());
    };
    let results = manager.search_cases(&query);
    if results.is_empty() {
        return writeln!(out, "No matches.");
    }
    writeln!(out, "{} match(es):", results.len())?;
    for case in results {
        writeln!(out, "{} | {}", case.id(), case.title)?;
    }
    Ok(())
}

fn append_update<C, I, W>(manager: &mut CaseManager<C>, lines: &mut I, out: &mut W) -> io::Result<()>
where
    C: Clock,
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let Some(id) = prompt(lines, out, "Case ID: ")? else {
        return Ok(());
    };
    if manager.get_case(&id).is_none() {
        return writeln!(out, "Case not found: {id}");
    }
    let Some(text) = prompt(lines, out, "Update note: ")? else {
        return Ok(());
    };
    match manager.add_update(&id, &text) {
        Some(_) => writeln!(out, "Update added."),
        None => writeln!(out, "Case not found: {id}"),
    }
}

fn change_status<C, I, W>(manager: &mut CaseManager<C>, lines: &mut I, out: &mut W) -> io::Result<()>
where
    C: Clock,
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let Some(id) = prompt(lines, out, "Case ID: ")? else {
        return Ok(());
    };
    if manager.get_case(&id).is_none() {
        return writeln!(out, "Case not found: {id}");
    }
    let options = CaseStatus::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Statuses: {options}")?;
    let Some(text) = prompt(lines, out, "New status: ")? else {
        return Ok(());
    };

    let status = match text.parse::<CaseStatus>() {
        Ok(status) => status,
        Err(e) => return writeln!(out, "{e}"),
    };
    match manager.change_status(&id, status) {
        Ok(Some(case)) => writeln!(out, "Status is now {}.", case.status()),
        Ok(None) => writeln!(out, "Case not found: {id}"),
        Err(e) => writeln!(out, "{e}"),
    }
}
