#![forbid(unsafe_code)]

//! Help text extraction from handler docstrings
//!
//! Handlers may carry documentation written in one of three common styles:
//!
//! - NumPy: section names underlined with dashes, parameters as `name : type`
//!   followed by an indented description
//! - Google: `Args:` style section names, parameters as `name (type): text`
//! - Sphinx: `:param name: text` fields
//!
//! The summary (text before the first section) becomes a command's help, and
//! each parameter's description becomes the help of the matching argument.
//! Style detection is a heuristic over this closed set of formats.

use regex::Regex;

const NUMPY_SECTION: &str = r"(?m)^[ \t]*[A-Z][A-Za-z ]*\n[ \t]*-{3,}[ \t]*$";
const GOOGLE_SECTION: &str = r"(?m)^[ \t]*(?:Args|Arguments|Attributes|Examples?|Keyword Args|Keyword Arguments|Methods|Notes?|Other Parameters|Parameters|Raises|References|Returns?|See Also|Todo|Warns|Warnings?|Yields?):[ \t]*$";
const SPHINX_SECTION: &str = r"(?m)^[ \t]*:(?:param|parameter|arg|argument|key|keyword|type|raises?|except|exception|returns?|rtype|var|ivar|cvar|vartype|meta)\b[^:\n]*:";

/// Trailing clauses describing a default value, which clap prints on its own
const DEFAULT_CLAUSE: &str =
    r"(?i)(?:^|[,.;])\s*(?:by default|defaults to)\b(?:[^.]|\.\S)*\.?\s*$";

/// Recognized docstring conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocstringStyle {
    Numpy,
    Google,
    Sphinx,
}

impl DocstringStyle {
    /// All styles, in detection order
    pub const ALL: [DocstringStyle; 3] = [
        DocstringStyle::Numpy,
        DocstringStyle::Google,
        DocstringStyle::Sphinx,
    ];

    /// Returns the style name
    pub fn as_str(&self) -> &'static str {
        match self {
            DocstringStyle::Numpy => "numpy",
            DocstringStyle::Google => "google",
            DocstringStyle::Sphinx => "sphinx",
        }
    }

    /// Detects the style of a docstring
    ///
    /// Returns `None` when no section header of any known style is present.
    pub fn detect(doc: &str) -> Option<Self> {
        let doc = clean(doc);
        Self::ALL
            .into_iter()
            .find(|style| style.section_start(&doc).is_some())
    }

    fn section_pattern(&self) -> &'static str {
        match self {
            DocstringStyle::Numpy => NUMPY_SECTION,
            DocstringStyle::Google => GOOGLE_SECTION,
            DocstringStyle::Sphinx => SPHINX_SECTION,
        }
    }

    /// Pattern matching a parameter entry line
    ///
    /// Group 1 captures the entry's indentation, group 2 (when present) the
    /// description text written on the same line.
    fn param_pattern(&self, param: &str) -> String {
        let name = regex::escape(param);
        match self {
            DocstringStyle::Numpy => {
                format!(
                    r"(?m)^([ \t]*)(?:[^\s:,]+[ \t]*,[ \t]*)*{name}(?:[ \t]*,[^:\n]*)?(?:[ \t]*:[^\n]*)?[ \t]*$"
                )
            }
            DocstringStyle::Google => {
                format!(r"(?m)^([ \t]*){name}(?:[ \t]*\([^\n]*?\))?[ \t]*:[ \t]*(.*)$")
            }
            DocstringStyle::Sphinx => format!(
                r"(?m)^([ \t]*):(?:param|parameter|arg|argument|key|keyword)(?:[ \t]+[^:\n]+?)?[ \t]+{name}[ \t]*:[ \t]*(.*)$"
            ),
        }
    }

    /// Byte offset of the first section header in a cleaned docstring
    fn section_start(&self, doc: &str) -> Option<usize> {
        compile(self.section_pattern())?.find(doc).map(|m| m.start())
    }

    /// Raw description lines of a parameter in a cleaned docstring
    fn param_lines<'a>(&self, doc: &'a str, param: &str) -> Option<Vec<&'a str>> {
        let start = self.section_start(doc)?;
        let sections = &doc[start..];
        let captures = compile(&self.param_pattern(param))?.captures(sections)?;

        let indent = captures.get(1).map_or(0, |m| m.as_str().len());
        let entry_end = captures.get(0).map_or(0, |m| m.end());

        let mut lines = Vec::new();
        if let Some(inline) = captures.get(2) {
            let inline = inline.as_str().trim();
            if !inline.is_empty() {
                lines.push(inline);
            }
        }

        // Continuation lines are indented deeper than the entry itself.
        for line in sections[entry_end..].lines().skip(1) {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || line.len() - trimmed.len() <= indent {
                break;
            }
            if *self == DocstringStyle::Sphinx && trimmed.starts_with(':') {
                break;
            }
            lines.push(trimmed.trim_end());
        }

        Some(lines)
    }
}

impl std::fmt::Display for DocstringStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("Skipping docstring pattern '{}': {}", pattern, e);
            None
        }
    }
}

/// Normalizes docstring indentation
///
/// The first line loses its leading whitespace, the common indentation of the
/// remaining lines is removed, trailing whitespace is stripped from every line
/// and blank lines at both ends are dropped.
pub fn clean(doc: &str) -> String {
    let lines: Vec<&str> = doc.lines().collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i > 0 && line.len() >= margin && line.is_char_boundary(margin) {
                line[margin..].trim_end()
            } else {
                line.trim()
            }
        })
        .collect();

    let first = dedented.iter().position(|line| !line.is_empty());
    let last = dedented.iter().rposition(|line| !line.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => dedented[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Extracts the summary of a docstring
///
/// With a recognized style, the summary is everything before the first
/// section header. Otherwise it is the first paragraph. The result ends with a
/// single newline, or is empty when there is no docstring.
pub fn help_from_docstring(doc: Option<&str>) -> String {
    let Some(doc) = doc else {
        return String::new();
    };
    let doc = clean(doc);

    let summary = match DocstringStyle::ALL
        .into_iter()
        .find_map(|style| style.section_start(&doc))
    {
        Some(start) => doc[..start].trim(),
        None => doc.split("\n\n").next().unwrap_or_default().trim(),
    };

    if summary.is_empty() {
        String::new()
    } else {
        format!("{}\n", summary)
    }
}

/// Extracts the description of a parameter from a docstring
///
/// Continuation lines are joined with single spaces, a trailing default value
/// clause is removed and the text ends with a period. Returns an empty string
/// when there is no docstring, no recognized style or no entry for `param`.
pub fn param_help_from_docstring(param: &str, doc: Option<&str>) -> String {
    let Some(doc) = doc else {
        return String::new();
    };
    let doc = clean(doc);

    let Some(style) = DocstringStyle::ALL
        .into_iter()
        .find(|style| style.section_start(&doc).is_some())
    else {
        return String::new();
    };
    log::trace!("Reading '{}' from {} style docstring", param, style);

    let Some(lines) = style.param_lines(&doc, param) else {
        return String::new();
    };

    tidy_description(&lines.join(" "))
}

fn tidy_description(text: &str) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = match compile(DEFAULT_CLAUSE) {
        Some(default_clause) => default_clause.replace(&text, "").into_owned(),
        None => text,
    };
    let text = text.trim_end_matches([',', ';', ':', ' ']);

    if text.is_empty() {
        String::new()
    } else if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMPY_DOC: &str = "
    Identify the person behind each alias.

    For each alias, get person behind it.

    Parameters
    ----------
    aliases : Vec<String>
        One or more alias to be identified,
        separated by spaces.
    oracle : bool, optional
        Use Oracle's help to get more data, by default false

    ";

    #[test]
    fn test_clean_removes_common_indentation() {
        let cleaned = clean("\n    First line.\n\n    Second\n        nested\n    ");
        assert_eq!(cleaned, "First line.\n\nSecond\n    nested");
    }

    #[test]
    fn test_clean_keeps_first_line_content() {
        assert_eq!(clean("Summary.\n    More text."), "Summary.\nMore text.");
        assert_eq!(clean("   "), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_detect_styles() {
        assert_eq!(DocstringStyle::detect(NUMPY_DOC), Some(DocstringStyle::Numpy));
        assert_eq!(
            DocstringStyle::detect("Summary.\n\nArgs:\n    x (int): A value.\n"),
            Some(DocstringStyle::Google)
        );
        assert_eq!(
            DocstringStyle::detect("Summary.\n\n:param x: A value.\n"),
            Some(DocstringStyle::Sphinx)
        );
        assert_eq!(DocstringStyle::detect("Just a summary."), None);
    }

    #[test]
    fn test_summary_keeps_extended_description() {
        assert_eq!(
            help_from_docstring(Some(NUMPY_DOC)),
            "Identify the person behind each alias.\n\nFor each alias, get person behind it.\n"
        );
    }

    #[test]
    fn test_summary_without_style_is_first_paragraph() {
        assert_eq!(
            help_from_docstring(Some("First paragraph\ncontinues.\n\nSecond one.")),
            "First paragraph\ncontinues.\n"
        );
    }

    #[test]
    fn test_summary_of_empty_docstring() {
        assert_eq!(help_from_docstring(None), "");
        assert_eq!(help_from_docstring(Some("")), "");
        assert_eq!(help_from_docstring(Some("Parameters\n----------\nx : int\n    X.")), "");
    }

    #[test]
    fn test_param_help_joins_continuation_lines() {
        assert_eq!(
            param_help_from_docstring("aliases", Some(NUMPY_DOC)),
            "One or more alias to be identified, separated by spaces."
        );
    }

    #[test]
    fn test_param_help_drops_default_clause() {
        assert_eq!(
            param_help_from_docstring("oracle", Some(NUMPY_DOC)),
            "Use Oracle's help to get more data."
        );
    }

    #[test]
    fn test_numpy_combined_entry() {
        let doc = "Summary.\n\nParameters\n----------\nx, y : int\n    Coordinates of the cave.\nz : int\n    Depth.\n";
        assert_eq!(param_help_from_docstring("x", Some(doc)), "Coordinates of the cave.");
        assert_eq!(param_help_from_docstring("y", Some(doc)), "Coordinates of the cave.");
        assert_eq!(param_help_from_docstring("z", Some(doc)), "Depth.");
        assert_eq!(param_help_from_docstring("w", Some(doc)), "");
    }

    #[test]
    fn test_param_help_unknown_param() {
        assert_eq!(param_help_from_docstring("alias", Some(NUMPY_DOC)), "");
        assert_eq!(param_help_from_docstring("orac", Some(NUMPY_DOC)), "");
    }

    #[test]
    fn test_param_name_is_not_a_pattern() {
        let doc = "Summary.\n\n:param a.b: Dotted name.\n";
        assert_eq!(param_help_from_docstring("a.b", Some(doc)), "Dotted name.");
        assert_eq!(param_help_from_docstring("axb", Some(doc)), "");
    }

    #[test]
    fn test_sphinx_param_with_inline_type() {
        let doc = "Summary.\n\n:param str name: The name\n    spread over lines\n:type name: str\n";
        assert_eq!(
            param_help_from_docstring("name", Some(doc)),
            "The name spread over lines."
        );
    }

    #[test]
    fn test_google_param_stops_at_next_entry() {
        let doc = "Summary.\n\nArgs:\n    first: One.\n    second (int): Two,\n        defaults to 2.\n\nReturns:\n    int: Sum.\n";
        assert_eq!(param_help_from_docstring("first", Some(doc)), "One.");
        assert_eq!(param_help_from_docstring("second", Some(doc)), "Two.");
    }

    #[test]
    fn test_tidy_description() {
        assert_eq!(tidy_description("A small one"), "A small one.");
        assert_eq!(tidy_description("Really?"), "Really?");
        assert_eq!(tidy_description("  "), "");
        assert_eq!(tidy_description("Defaults to None."), "");
        assert_eq!(
            tidy_description("A value. Defaults to None."),
            "A value."
        );
        assert_eq!(tidy_description("A ratio, defaults to 0.5"), "A ratio.");
    }

    #[test]
    fn test_tidy_description_keeps_inner_default_words() {
        assert_eq!(
            tidy_description("Load defaults to memory before running"),
            "Load defaults to memory before running."
        );
        assert_eq!(
            tidy_description("Values set by default are kept, by default true"),
            "Values set by default are kept."
        );
    }

    #[test]
    fn test_style_names() {
        let names: Vec<&str> = DocstringStyle::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["numpy", "google", "sphinx"]);
        assert_eq!(DocstringStyle::Google.to_string(), "google");
    }
}
