//! Interactive command loop over a `MedicineController`.
//!
//! Rows are addressed by their 1-based table index. `add` and `edit` open
//! the form, ask for each field and then for submit or close, mirroring the
//! modal of a graphical front end.

use std::io::{BufRead, Write};

use anyhow::Result;
use medicine_core::{view, DeleteOutcome, FormField, MedicineController, SubmitOutcome, Transport};

use crate::terminal::Terminal;

const HELP: &str = "\
commands:
  list        reload and show the table
  add         add a medicine
  edit <n>    edit the medicine on row n
  delete <n>  delete the medicine on row n
  help        show this help
  quit        leave
in the form, an empty answer keeps a field and `-` clears it";

const CLEAR_FIELD: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(usize),
    Delete(usize),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let row = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments: {line}"));
        }
        match (command, row) {
            ("list" | "ls", None) => Ok(Command::List),
            ("add", None) => Ok(Command::Add),
            ("edit", Some(row)) => parse_row(row).map(Command::Edit),
            ("delete" | "rm", Some(row)) => parse_row(row).map(Command::Delete),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "exit", None) => Ok(Command::Quit),
            ("edit" | "delete" | "rm", None) => Err(format!("usage: {command} <row>")),
            ("", _) => Err(String::new()),
            _ => Err(format!("unknown command: {line} (try `help`)")),
        }
    }
}

fn parse_row(row: &str) -> Result<usize, String> {
    match row.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("not a row number: {row}")),
    }
}

pub type TerminalController<T, R, W> = MedicineController<T, Terminal<R, W>>;

/// Load, show the table, then run commands until `quit` or end of input.
pub fn run<T, R, W>(controller: &mut TerminalController<T, R, W>) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    // A failed initial load is logged and leaves the table empty.
    let _ = controller.load();
    show_table(controller)?;

    loop {
        let Some(line) = controller.prompt_mut().ask("> ")? else {
            break;
        };
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                if !message.is_empty() {
                    controller.prompt_mut().println(&message)?;
                }
                continue;
            }
        };
        tracing::debug!(?command, "running command");

        match command {
            Command::List => {
                let _ = controller.load();
                show_table(controller)?;
            }
            Command::Add => {
                controller.open_for_add();
                run_form(controller)?;
            }
            Command::Edit(row) => match controller.medicine_at(row).cloned() {
                Some(medicine) => {
                    controller.open_for_edit(&medicine);
                    run_form(controller)?;
                }
                None => no_such_row(controller, row)?,
            },
            Command::Delete(row) => match controller.medicine_at(row).cloned() {
                Some(medicine) => {
                    if let DeleteOutcome::Failed(err) = controller.delete(&medicine.id) {
                        controller
                            .prompt_mut()
                            .println(&format!("request failed: {err}"))?;
                    }
                    show_table(controller)?;
                }
                None => no_such_row(controller, row)?,
            },
            Command::Help => controller.prompt_mut().println(HELP)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Drive the open form until it is saved or closed.
fn run_form<T, R, W>(controller: &mut TerminalController<T, R, W>) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let title = view::modal_title(controller.mode());
    controller.prompt_mut().println(&format!("-- {title} --"))?;

    loop {
        if !fill_fields(controller)? {
            controller.close();
            return Ok(());
        }

        let label = view::submit_label(controller.mode());
        let question = format!("[s] {label}  [c] Close: ");
        let choice = controller.prompt_mut().ask(&question)?;
        match choice.as_deref().map(str::trim) {
            Some("s") => match controller.submit() {
                SubmitOutcome::Saved(_) => {
                    show_table(controller)?;
                    return Ok(());
                }
                SubmitOutcome::Invalid => {}
                SubmitOutcome::Failed(err) => {
                    controller
                        .prompt_mut()
                        .println(&format!("request failed: {err}"))?;
                }
            },
            Some("c") | None => {
                controller.close();
                return Ok(());
            }
            Some(_) => {}
        }
    }
}

/// Ask for each field; an empty answer keeps the current value and `-`
/// clears it. Returns false at end of input.
fn fill_fields<T, R, W>(controller: &mut TerminalController<T, R, W>) -> Result<bool>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let fields = [
        (FormField::Name, "Medicine Name"),
        (FormField::Price, "Medicine Price"),
        (FormField::Stock, "Stock in Nos"),
    ];
    for (field, label) in fields {
        let current = match field {
            FormField::Name => controller.form().name.clone(),
            FormField::Price => controller.form().price.clone(),
            FormField::Stock => controller.form().stock.clone(),
        };
        let question = format!("{label} [{current}]: ");
        let Some(answer) = controller.prompt_mut().ask(&question)? else {
            return Ok(false);
        };
        match answer.as_str() {
            "" => {}
            CLEAR_FIELD => controller.set_field(field, ""),
            _ => controller.set_field(field, answer),
        }
    }
    Ok(true)
}

fn show_table<T, R, W>(controller: &mut TerminalController<T, R, W>) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let table = view::render_table(controller.medicines());
    controller.prompt_mut().print(&table)?;
    Ok(())
}

fn no_such_row<T, R, W>(controller: &mut TerminalController<T, R, W>, row: usize) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    controller.prompt_mut().println(&format!("no medicine on row {row}"))?;
    Ok(())
}
