//! Line renderers for the `keygr` front end.
//!
//! Everything is emitted on the print target so the subscriber writes it
//! verbatim, above the spinner when one is running.

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

const BANNER: &str = r#"
           _
          | | _____ _   _  __ _ _ __
          | |/ / _ \ | | |/ _` | '__|
          |   <  __/ |_| | (_| | |
          |_|\_\___|\__, |\__, |_|
                    |___/ |___/
"#;

pub fn banner(no_banner: bool, quiet: bool) {
    if no_banner || quiet {
        return;
    }
    print(&format!("{}", BANNER.bright_green()));
    rule(&format!("v{}", env!("CARGO_PKG_VERSION")), '═');
}

/// A full-width rule of `fill` with `title` centred in it.
fn rule(title: &str, fill: char) {
    let title = format!("⟦ {} ⟧", title.to_uppercase());
    let spare = TOTAL_WIDTH.saturating_sub(title.width());
    let side = |n: usize| fill.to_string().repeat(n).color(colors::SEPARATOR);
    print(&format!(
        "{}{}{}",
        side(spare / 2),
        title.bright_green(),
        side(spare - spare / 2)
    ));
}

pub fn header(msg: &str, quiet: bool) {
    if !quiet {
        rule(msg, '─');
    }
}

/// `key....: value` rows, dots padded to the widest key of this table.
pub fn field_table(rows: &[(String, ColoredString)]) {
    let width = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    for (key, value) in rows {
        let dots = ".".repeat(width + 1 - key.width());
        print(&format!(
            "{} {}{}{} {}",
            ">".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
    print("");
}

/// Numbered candidate keys framed under `network`.
pub fn key_block(network: &str, lines: &[String]) {
    framed_keys(network, lines).iter().for_each(|line| print(line));
}

fn framed_keys(network: &str, lines: &[String]) -> Vec<String> {
    let bar = "│".color(colors::SEPARATOR);
    let noun = if lines.len() == 1 { "candidate" } else { "candidates" };

    let mut framed = Vec::with_capacity(lines.len() + 2);
    framed.push(format!("{} {}", "┌─".color(colors::SEPARATOR), network.color(colors::PRIMARY)));
    for (idx, line) in lines.iter().enumerate() {
        let number = format!("{:>2}", idx + 1).color(colors::ACCENT);
        framed.push(format!("{bar} {number}  {line}"));
    }
    framed.push(format!("└─ {} {noun}", lines.len()).color(colors::SEPARATOR).to_string());
    framed
}

/// One registry entry: `[n] name` followed by its details as branches.
pub fn algorithm_entry(position: usize, name: &str, details: &[(&str, ColoredString)]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        position.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
    let width = details.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    for (idx, (key, value)) in details.iter().enumerate() {
        let branch = if idx + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {:<width$} {} {}",
            branch.bright_black(),
            key,
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn footer(summary: &str) {
    let pad = TOTAL_WIDTH.saturating_sub(console::measure_text_width(summary)) / 2;
    print(&format!("{}{}", " ".repeat(pad), summary.color(colors::SEPARATOR)));
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

const NO_KEYS: &str = r#"
         _   _  ___    _  _______   ______
        | \ | |/ _ \  | |/ / ____\ \ / / ___|
        |  \| | | | | | ' /|  _|  \ V /\___ \
        | |\  | |_| | | . \| |___  | |  ___) |
        |_| \_|\___/  |_|\_\_____| |_| |____/
"#;

pub fn no_keys() {
    print(&format!("{}", NO_KEYS.red().bold()));
}
