use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Section heading: bold cyan on a terminal, plain otherwise.
pub fn heading(title: &str) -> String {
    if std::io::stdout().is_terminal() {
        title.bold().cyan().to_string()
    } else {
        title.to_string()
    }
}

/// Secondary text: dimmed on a terminal, plain otherwise.
pub fn dim(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Widest string in a list, for column alignment.
pub fn column_width<'a, I: IntoIterator<Item = &'a str>>(names: I) -> usize {
    names.into_iter().map(str::len).max().unwrap_or(0)
}
