//! Styles for the stash shell.
//!
//! Output code refers to these by meaning (a title, a muted hint, an error) rather
//! than by color, so the palette can change in one place. `console` drops the ANSI
//! codes by itself when output is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub struct Styles {
    pub title: Style,
    pub header: Style,
    pub muted: Style,
    pub status_sorted: Style,
    pub status_unsorted: Style,
    pub success: Style,
    pub info: Style,
    pub warning: Style,
    pub error: Style,
    pub priority_high: Style,
    pub priority_low: Style,
}

pub static STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    title: Style::new().bold(),
    header: Style::new().bold().underlined(),
    muted: Style::new().color256(246).italic(),
    status_sorted: Style::new().green(),
    status_unsorted: Style::new().yellow(),
    success: Style::new().green(),
    info: Style::new(),
    warning: Style::new().yellow(),
    error: Style::new().red(),
    priority_high: Style::new().red().bold(),
    priority_low: Style::new().color256(246),
});
