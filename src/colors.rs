#![forbid(unsafe_code)]

//! ANSI color helpers for terminal output
//!
//! These helpers build plain strings with escape sequences embedded, so they
//! can be nested inside other messages. Stream-level coloring of error
//! reports lives in [`crate::cli::report`].

use crate::error::ClyError;
use std::fmt;
use std::str::FromStr;

/// Resets all attributes
pub const DEFAULT: &str = "\x1b[0m";
/// Starts underlined text
pub const UNDERLINE: &str = "\x1b[4m";

const COMMA: &str = ", ";
const FALLBACK_WIDTH: usize = 80;

/// Colors available for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Red,
    Yellow,
}

impl Color {
    /// All colors, in table order
    pub const ALL: [Color; 3] = [Color::Green, Color::Red, Color::Yellow];

    /// Returns the color name
    pub fn name(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }

    /// Returns the escape sequence starting this color (bold, bright)
    pub fn escape(&self) -> &'static str {
        match self {
            Color::Green => "\x1b[1;92m",
            Color::Red => "\x1b[1;91m",
            Color::Yellow => "\x1b[1;93m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = ClyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| ClyError::UnknownColor {
                name: s.to_string(),
                available: format_options(&color_names()),
            })
    }
}

fn color_names() -> Vec<&'static str> {
    Color::ALL.iter().map(Color::name).collect()
}

/// Joins options with commas and a final "or"
///
/// `["one", "two", "three"]` becomes `"one, two or three"`.
pub fn format_options<S: AsRef<str>>(options: &[S]) -> String {
    match options {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} or {}", init.join(COMMA), last.as_ref())
        }
    }
}

/// Looks up the escape sequence of a color by name
pub fn get_color(name: &str) -> Result<&'static str, ClyError> {
    name.parse::<Color>().map(|color| color.escape())
}

/// Wraps text in a color
pub fn color_text(text: &str, color: Color) -> String {
    format!("{}{}{}", color.escape(), text, DEFAULT)
}

/// Underlines text
///
/// When `color` is given, it is restarted after the underlined part so the
/// text can sit inside a colored message.
pub fn underline_text(text: &str, color: Option<Color>) -> String {
    let end = match color {
        Some(color) => format!("{}{}", DEFAULT, color.escape()),
        None => DEFAULT.to_string(),
    };
    format!("{}{}{}", UNDERLINE, text, end)
}

/// Number of characters of `message` visible in a terminal
pub fn print_length(message: &str) -> usize {
    let hidden: usize = Color::ALL
        .iter()
        .map(Color::escape)
        .chain([UNDERLINE, DEFAULT])
        .map(|style| message.matches(style).count() * style.chars().count())
        .sum();
    message.chars().count().saturating_sub(hidden)
}

/// Current terminal width
///
/// `COLUMNS` wins over the detected terminal size; 80 is used when neither
/// is available.
pub fn terminal_width() -> usize {
    if let Ok(columns) = std::env::var("COLUMNS")
        && let Ok(width) = columns.trim().parse::<usize>()
        && width > 0
    {
        return width;
    }

    terminal_size::terminal_size()
        .map(|(width, _)| usize::from(width.0))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Centers a message between runs of `>` and `<` filling `width` columns
pub fn flashy_line(message: &str, width: usize) -> String {
    let width = i64::try_from(width).unwrap_or(i64::MAX);
    let message_width = i64::try_from(print_length(message)).unwrap_or(i64::MAX) + 2;
    let left = (width - message_width).div_euclid(2);
    let right = width - left - message_width;

    let run = |c: &str, n: i64| c.repeat(usize::try_from(n).unwrap_or(0));
    format!("{} {} {}", run(">", left), message, run("<", right))
}

/// Prints a centered message filling the terminal width
///
/// The message is colored first when `color` names a known color.
pub fn print_flashy(message: &str, color: Option<&str>) -> Result<(), ClyError> {
    let message = match color {
        Some(name) => color_text(message, name.parse()?),
        None => message.to_string(),
    };
    println!("{}", flashy_line(&message, terminal_width()));
    Ok(())
}
