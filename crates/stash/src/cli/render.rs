//! Output formatting for the shell. Every function returns a `String`; the shell
//! decides where it goes.

use super::styles::STYLES;
use stashapp::commands::{CmdMessage, MessageLevel};
use stashapp::error::StashError;
use stashapp::model::Record;
use stashapp::ordering::Criterion;
use stashapp::store::{Inventory, SortState};
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 44;
const NAME_COL: usize = 30;
const KIND_COL: usize = 20;
const QTY_COL: usize = 6;

/// Pads `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn rule(width: usize) -> String {
    STYLES.muted.apply_to("-".repeat(width)).to_string()
}

pub fn render_menu(inventory: &Inventory) -> String {
    let status = match inventory.sort_state() {
        SortState::SortedByName => STYLES.status_sorted.apply_to("SORTED BY NAME"),
        SortState::Unsorted => STYLES.status_unsorted.apply_to("NOT SORTED BY NAME"),
    };
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        STYLES.title.apply_to("=== SURVIVAL BACKPACK ===")
    ));
    out.push_str(&format!(
        "Items in backpack: {}/{}\n",
        inventory.len(),
        inventory.capacity()
    ));
    out.push_str(&format!("Backpack status: {}\n", status));
    out.push_str(&format!("{}\n", rule(RULE_WIDTH)));
    for line in [
        "1. Add an item",
        "2. Remove an item",
        "3. List all items",
        "4. Sort items",
        "5. Binary search by name",
        "0. Exit",
    ] {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("{}\n", rule(RULE_WIDTH)));
    out
}

pub fn render_criteria_menu() -> String {
    let mut out = format!("\n{}\n", STYLES.title.apply_to("--- SORT CRITERIA ---"));
    for criterion in Criterion::ALL {
        let label = criterion.label();
        let mut chars = label.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        out.push_str(&format!("{}. By {}\n", criterion.selector(), label));
    }
    out
}

fn styled_priority(record: &Record) -> String {
    let text = pad(&record.priority.to_string(), 2);
    match record.priority.get() {
        5 | 4 => STYLES.priority_high.apply_to(text).to_string(),
        1 => STYLES.priority_low.apply_to(text).to_string(),
        _ => text,
    }
}

pub fn render_table(records: &[Record]) -> String {
    let header = format!(
        "{} | {} | {} | {}",
        pad("NAME", NAME_COL),
        pad("TYPE", KIND_COL),
        pad("QTY", QTY_COL),
        "PRIORITY"
    );
    let mut out = format!("\n{}\n", STYLES.header.apply_to(header));
    out.push_str(&format!("{}\n", rule(NAME_COL + KIND_COL + QTY_COL + 17)));
    for record in records {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            pad(&record.name, NAME_COL),
            pad(&record.kind, KIND_COL),
            pad(&record.quantity.to_string(), QTY_COL),
            styled_priority(record)
        ));
    }
    out
}

pub fn render_found(record: &Record) -> String {
    format!(
        "\n{}\nName: {}\nType: {}\nQuantity: {}\nPriority: {}\n{}\n",
        STYLES.title.apply_to("--- ITEM FOUND ---"),
        record.name,
        record.kind,
        record.quantity,
        record.priority,
        rule(23)
    )
}

pub fn render_comparisons(label: &str, comparisons: u64) -> String {
    format!("{}\n", STYLES.muted.apply_to(format!("{}: {}", label, comparisons)))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &STYLES.info,
            MessageLevel::Success => &STYLES.success,
            MessageLevel::Warning => &STYLES.warning,
            MessageLevel::Error => &STYLES.error,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

/// Turns a recoverable error into the message shown before returning to the menu.
pub fn error_message(err: &StashError) -> CmdMessage {
    match err {
        StashError::Empty | StashError::InsufficientItems { .. } => {
            CmdMessage::warning(err.to_string())
        }
        StashError::InvalidCriterion(_) => {
            CmdMessage::error(format!("{}. No sorting was done.", err))
        }
        StashError::NotSorted => CmdMessage::error(format!(
            "{}\nGo to the sort menu and choose option {}.",
            err,
            Criterion::ByName.selector()
        )),
        _ => CmdMessage::error(err.to_string()),
    }
}
