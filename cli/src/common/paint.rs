//! Inline colour markup for terminal output.
//!
//! A `{text:kind color}` group paints `text`, where `kind` is `f`
//! (foreground), `b` (background) or `fb` (both) and `color` is one of:
//!
//! - a name: `black`, `white`, `grey`, `red`, `green`, `blue`, `yellow`,
//!   `magenta`, `cyan`, `orange`, `pink`, `purple`, `teal`, `lime`
//! - an 8-bit palette code `0..=255`
//! - an `r,g,b` triple addressing the 6x6x6 colour cube, each part `0..=5`
//!
//! Groups that do not have this shape are copied to the output untouched.
//! A well-formed group with an unknown colour keeps its text but loses the
//! braces and styling.

use nu_ansi_term::{Color, Style};

const NAMED: [(&str, u8); 14] = [
    ("black", cube(0, 0, 0)),
    ("white", cube(5, 5, 5)),
    ("grey", 240),
    ("red", cube(5, 0, 0)),
    ("green", cube(0, 5, 0)),
    ("blue", cube(0, 0, 5)),
    ("yellow", cube(5, 5, 0)),
    ("magenta", cube(5, 0, 5)),
    ("cyan", cube(0, 5, 5)),
    ("orange", cube(5, 2, 0)),
    ("pink", cube(5, 2, 5)),
    ("purple", cube(2, 0, 5)),
    ("teal", cube(0, 2, 5)),
    ("lime", cube(0, 5, 2)),
];

/// Palette index of an entry in the 6x6x6 colour cube.
const fn cube(r: u8, g: u8, b: u8) -> u8 {
    16 + r * 36 + g * 6 + b
}

/// Resolves a colour specification to an 8-bit palette code.
pub fn parse_color(spec: &str) -> Option<u8> {
    let spec = spec.trim();
    if let Some(&(_, code)) = NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spec))
    {
        return Some(code);
    }

    if !spec.is_empty() && spec.bytes().all(|b| b.is_ascii_digit()) {
        return spec.parse().ok();
    }

    let mut parts = spec.split(',').map(|part| part.trim().parse::<u8>().ok());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Some(r)), Some(Some(g)), Some(Some(b)), None) if r <= 5 && g <= 5 && b <= 5 => {
            Some(cube(r, g, b))
        }
        _ => None,
    }
}

/// Expands colour markup in `markup`. With `color` off the text of each
/// group is kept and the styling dropped.
pub fn paint(markup: &str, color: bool) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        out.push_str(&rest[..open]);

        let group = &rest[open..=close];
        match style_group(&group[1..group.len() - 1]) {
            Some((text, style)) if color => out.push_str(&style.paint(text).to_string()),
            Some((text, _)) => out.push_str(text),
            None => out.push_str(group),
        }
        rest = &rest[close + 1..];
    }
    // An unclosed `{` is plain text.
    out.push_str(rest);
    out
}

/// Splits `text:kind color` into the text and its style.
fn style_group(inside: &str) -> Option<(&str, Style)> {
    let (text, spec) = inside.rsplit_once(':')?;
    let (kind, value) = spec.trim().split_once(' ')?;

    let code = parse_color(value);
    let mut style = Style::new();
    match kind {
        "f" => style.foreground = code.map(Color::Fixed),
        "b" => style.background = code.map(Color::Fixed),
        "fb" => {
            style.foreground = code.map(Color::Fixed);
            style.background = code.map(Color::Fixed);
        }
        _ => return None,
    }
    Some((text.trim(), style))
}
