//! Renders parsed SVG trees as Elm expressions over `Svg as S` and
//! `Svg.Attributes as A`.

use crate::models::Element;
use crate::name_utils::kebab_to_camel;

/// Render an element tree. The `<svg>` envelope itself becomes a plain list of
/// its children; the generated `toHtml` supplies the real envelope.
pub fn render_element(element: &Element) -> String {
    let children: Vec<String> = element.children.iter().map(render_element).collect();

    if element.tag == "svg" {
        return elm_list(&children);
    }

    let attributes: Vec<String> = element
        .attributes
        .iter()
        .map(|(name, value)| render_attribute(name, value))
        .collect();

    format!(
        "S.{} {} {}",
        element.tag,
        elm_list(&attributes),
        elm_list(&children)
    )
}

/// `stroke-width` -> `strokeWidth`, `xlink:href` -> `xlinkHref`.
fn render_attribute(name: &str, value: &str) -> String {
    format!(
        "A.{} {}",
        kebab_to_camel(&name.replace(':', "-")),
        elm_string(value)
    )
}

fn elm_list(items: &[String]) -> String {
    if items.is_empty() {
        "[]".to_string()
    } else {
        format!("[ {} ]", items.join(", "))
    }
}

/// Quote a value as an Elm string literal.
pub fn elm_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
