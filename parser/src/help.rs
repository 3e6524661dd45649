//! Help text rendering.
//!
//! Purely presentational: the renderer reads the parser's registry and
//! metadata and produces a usage line plus two-column argument listings,
//! word-wrapped to a configurable width. It never affects parse
//! outcomes.

use argot_core::{ArgumentSpec, Arity};

use crate::Parser;

/// Minimum and default total width of rendered help.
pub const DEFAULT_WIDTH: usize = 80;

/// Default share of the width given to the name column, in percent.
pub const DEFAULT_NAME_WIDTH_PERCENT: usize = 30;

/// Renders help with the default width and name-column share.
pub fn render(parser: &Parser) -> String {
    render_with(parser, DEFAULT_WIDTH, DEFAULT_NAME_WIDTH_PERCENT)
}

/// Renders help with an explicit total width and name-column share.
///
/// Widths below [`DEFAULT_WIDTH`] are clamped up to it.
pub fn render_with(parser: &Parser, width: usize, name_width_percent: usize) -> String {
    let width = width.max(DEFAULT_WIDTH);
    let name_width = name_width_percent * width / 100;
    let desc_width = width - name_width;
    let prefix = parser.config().prefix;

    let help_spec = parser.implicit_help_spec();
    let positionals: Vec<&ArgumentSpec> = parser
        .registry()
        .positional_slots()
        .iter()
        .map(|&slot| &parser.registry().specs()[slot])
        .collect();
    let mut named: Vec<&ArgumentSpec> = parser
        .registry()
        .specs()
        .iter()
        .filter(|spec| !spec.is_positional())
        .collect();
    if let Some(spec) = &help_spec {
        named.push(spec);
    }

    let mut out = String::new();
    out.push_str("usage: ");
    out.push_str(parser.name());
    for spec in &positionals {
        out.push(' ');
        out.push_str(&usage_entry(spec, prefix));
    }
    for spec in &named {
        out.push(' ');
        out.push_str(&usage_entry(spec, prefix));
    }
    out.push('\n');

    if !parser.description().is_empty() {
        out.push('\n');
        wrap_into(&mut out, parser.description(), width, 0);
    }

    if !positionals.is_empty() {
        out.push_str("\npositional arguments:\n\n");
        for spec in &positionals {
            listing_row(&mut out, spec, prefix, name_width, desc_width);
        }
    }
    if !named.is_empty() {
        out.push_str("\noptional arguments:\n\n");
        for spec in &named {
            listing_row(&mut out, spec, prefix, name_width, desc_width);
        }
    }

    if !parser.epilog().is_empty() {
        out.push('\n');
        wrap_into(&mut out, parser.epilog(), width, 0);
    }

    out
}

/// Placeholder shown where a value token would go: the choice set when
/// one is declared, otherwise the argument's name.
fn value_stub(spec: &ArgumentSpec) -> String {
    if let Some(choices) = &spec.choices {
        format!("{{{}}}", choices.display_items().join(", "))
    } else if let Some(name) = &spec.positional {
        name.clone()
    } else {
        spec.display_name().to_string()
    }
}

fn usage_entry(spec: &ArgumentSpec, prefix: char) -> String {
    let stub = value_stub(spec);
    let mut entry = String::new();
    if !spec.required {
        entry.push('[');
    }

    if spec.is_positional() {
        match spec.arity {
            Arity::AtLeastOne => {
                entry.push_str(&format!("{stub} [{stub} ...]"));
            }
            Arity::Exact(n) if n > 1 => {
                entry.push_str(&vec![stub.as_str(); n].join(" "));
            }
            _ => entry.push_str(&stub),
        }
    } else {
        if let Some(short) = &spec.short {
            entry.push(prefix);
            entry.push_str(short);
        }
        if let Some(long) = &spec.long {
            if spec.short.is_some() {
                entry.push(',');
            }
            entry.push(prefix);
            entry.push(prefix);
            entry.push_str(long);
        }
        match spec.arity {
            Arity::AnyCount => entry.push_str(&format!(" [{stub} [{stub} ...]]")),
            Arity::AtLeastOne => entry.push_str(&format!(" {stub} [{stub} ...]")),
            Arity::Exact(0) => {}
            Arity::Exact(n) => {
                entry.push(' ');
                entry.push_str(&vec![stub.as_str(); n].join(" "));
            }
        }
    }

    if !spec.required {
        entry.push(']');
    }
    entry
}

fn listing_name(spec: &ArgumentSpec, prefix: char) -> String {
    if spec.is_positional() {
        return value_stub(spec);
    }
    let mut name = String::new();
    if let Some(short) = &spec.short {
        name.push(prefix);
        name.push_str(short);
    }
    if let Some(long) = &spec.long {
        if spec.short.is_some() {
            name.push(',');
        }
        name.push(prefix);
        name.push(prefix);
        name.push_str(long);
    }
    name
}

fn listing_description(spec: &ArgumentSpec) -> String {
    let mut desc = String::new();
    if !spec.help.is_empty() {
        desc.push_str(&spec.help);
        desc.push(' ');
    }
    desc.push_str("Type: ");
    desc.push_str(spec.kind.label());
    desc.push('.');
    if !spec.is_positional() {
        if let Some(choices) = &spec.choices {
            desc.push_str(" Choices: ");
            desc.push_str(&choices.display_items().join(", "));
            desc.push('.');
        }
    }
    desc.push_str(" Args count: ");
    match spec.arity {
        Arity::AnyCount => desc.push_str("any"),
        Arity::AtLeastOne => desc.push_str("at least one"),
        Arity::Exact(n) => desc.push_str(&n.to_string()),
    }
    desc.push('.');
    desc
}

fn listing_row(
    out: &mut String,
    spec: &ArgumentSpec,
    prefix: char,
    name_width: usize,
    desc_width: usize,
) {
    let name = listing_name(spec, prefix);
    out.push_str(&name);
    if name.len() + 1 >= name_width {
        out.push('\n');
        out.push_str(&" ".repeat(name_width));
    } else {
        out.push_str(&" ".repeat(name_width - name.len()));
    }
    wrap_into(out, &listing_description(spec), desc_width, name_width);
}

/// Greedy word wrap; continuation lines are indented by `indent`.
fn wrap_into(out: &mut String, text: &str, width: usize, indent: usize) {
    let pad = " ".repeat(indent);
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        if line_len > 0 && line_len + 1 + word.len() > width {
            out.push('\n');
            out.push_str(&pad);
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word.len();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use argot_core::{ArgumentSpec, Arity, TypedValues, ValueKind};

    use crate::Parser;

    use super::*;

    fn sample_parser() -> Parser {
        let mut parser = Parser::new("copytool")
            .with_description("Copies inputs to a destination.")
            .with_epilog("Report bugs upstream.");
        parser
            .declare(
                ArgumentSpec::named(Some("c"), Some("count"), ValueKind::Int32)
                    .optional()
                    .with_help("How many copies to make."),
            )
            .unwrap();
        parser
            .declare(
                ArgumentSpec::named(None, Some("format"), ValueKind::String)
                    .optional()
                    .with_choices(TypedValues::String(vec!["flat".into(), "tree".into()])),
            )
            .unwrap();
        parser
            .declare(ArgumentSpec::positional("src", ValueKind::String))
            .unwrap();
        parser
            .declare(
                ArgumentSpec::positional("files", ValueKind::String)
                    .with_arity(Arity::AtLeastOne),
            )
            .unwrap();
        parser
    }

    #[test]
    fn test_usage_line_lists_positionals_then_named() {
        let help = render(&sample_parser());
        let usage = help.lines().next().unwrap();

        assert!(usage.starts_with("usage: copytool"));
        let src = usage.find("src").unwrap();
        let count = usage.find("--count").unwrap();
        assert!(src < count);
        assert!(usage.contains("files [files ...]"));
    }

    #[test]
    fn test_sections_and_implicit_help_flag() {
        let help = render(&sample_parser());

        assert!(help.contains("positional arguments:"));
        assert!(help.contains("optional arguments:"));
        assert!(help.contains("-h,--help"));
        assert!(help.contains("Copies inputs to a destination."));
        assert!(help.contains("Report bugs upstream."));
    }

    #[test]
    fn test_choices_render_in_braces_and_listing() {
        let help = render(&sample_parser());

        assert!(help.contains("{flat, tree}"));
        assert!(help.contains("Choices: flat, tree."));
    }

    #[test]
    fn test_type_and_count_labels() {
        let help = render(&sample_parser());

        assert!(help.contains("Type: INT."));
        assert!(help.contains("Args count: at least one."));
    }

    #[test]
    fn test_width_is_clamped_and_wrapped() {
        let mut parser = Parser::new("wrapper");
        parser
            .declare(
                ArgumentSpec::named(None, Some("notes"), ValueKind::String)
                    .optional()
                    .with_help(
                        "A deliberately long help sentence that certainly cannot fit on a \
                         single rendered column line and therefore has to wrap.",
                    ),
            )
            .unwrap();

        let help = render_with(&parser, 10, 30);
        // Width clamps to the default minimum; the description column
        // wraps and continuation lines carry the name-column indent.
        let name_width = 30 * DEFAULT_WIDTH / 100;
        let wrapped: Vec<&str> = help
            .lines()
            .filter(|line| line.starts_with(&" ".repeat(name_width)))
            .collect();
        assert!(!wrapped.is_empty());
    }

    #[test]
    fn test_wrap_into_respects_width() {
        let mut out = String::new();
        wrap_into(&mut out, "one two three four five six", 9, 2);

        for (index, line) in out.lines().enumerate() {
            assert!(line.len() <= 11, "line {index} too long: {line:?}");
        }
    }
}
