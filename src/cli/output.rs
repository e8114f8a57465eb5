use crate::cli::theme::CliTheme;
use crossterm::style::Stylize;
use std::io::IsTerminal;

/// One `<n>\t<path>` line per entry, numbered from 1.
pub fn format_entries(paths: &[String], theme: &CliTheme, use_color: bool) -> Vec<String> {
    let use_color = use_color && theme.enabled;
    paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            format!(
                "{}\t{}",
                colorize(&(index + 1).to_string(), theme.index, use_color),
                colorize(path, theme.path, use_color)
            )
        })
        .collect()
}

pub fn print_entries(paths: &[String], theme: &CliTheme) {
    let use_color = std::io::stdout().is_terminal();
    for line in format_entries(paths, theme, use_color) {
        println!("{}", line);
    }
}

fn colorize(text: &str, color: crossterm::style::Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn theme(enabled: bool) -> CliTheme {
        CliTheme {
            enabled,
            index: Color::DarkGrey,
            path: Color::Cyan,
        }
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn entries_are_numbered_from_one() {
        let lines = format_entries(&paths(&["/alpha", "/beta"]), &theme(true), false);
        assert_eq!(lines, vec!["1\t/alpha", "2\t/beta"]);
    }

    #[test]
    fn empty_list_prints_nothing() {
        assert!(format_entries(&[], &theme(true), true).is_empty());
    }

    #[test]
    fn disabled_theme_never_colors() {
        let lines = format_entries(&paths(&["/alpha"]), &theme(false), true);
        assert_eq!(lines, vec!["1\t/alpha"]);
    }

    #[test]
    fn enabled_theme_colors_on_terminal() {
        let lines = format_entries(&paths(&["/alpha"]), &theme(true), true);
        assert!(lines[0].contains("\x1b["));
        assert!(lines[0].contains("/alpha"));
    }
}
