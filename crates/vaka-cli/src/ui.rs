//! Terminal presentation preferences, decided once per process.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored; case tables need at least this.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color status cells in case tables.
    pub table_color: bool,
    /// Shrink case tables to this many columns.
    pub term_width: Option<usize>,
}

impl UiPrefs {
    fn detect(flags: &GlobalFlags, stdout_is_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        Self {
            table_color: stdout_is_tty
                && !no_color
                && !flags.quiet
                && flags.format == OutputFormat::Table,
            term_width: columns
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|width| *width >= MIN_TERM_WIDTH),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::detect(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

/// Preferences set by [`init`], or plain output when it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::UiPrefs;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
            data: None,
        }
    }

    #[test]
    fn color_only_for_interactive_tables() {
        let table = flags(OutputFormat::Table, false);
        assert!(UiPrefs::detect(&table, true, false, None).table_color);
        assert!(!UiPrefs::detect(&table, false, false, None).table_color);
        assert!(!UiPrefs::detect(&table, true, true, None).table_color);
        assert!(!UiPrefs::detect(&flags(OutputFormat::Json, false), true, false, None).table_color);
        assert!(!UiPrefs::detect(&flags(OutputFormat::Table, true), true, false, None).table_color);
    }

    #[test]
    fn columns_below_minimum_are_ignored() {
        let table = flags(OutputFormat::Table, false);
        assert_eq!(UiPrefs::detect(&table, false, false, Some("120")).term_width, Some(120));
        assert_eq!(UiPrefs::detect(&table, false, false, Some("20")).term_width, None);
        assert_eq!(UiPrefs::detect(&table, false, false, Some("wide")).term_width, None);
    }
}
