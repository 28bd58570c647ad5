use tracing::trace;

use crate::error::IconError;
use crate::models::{Element, Weight};

/// Parse sanitized SVG text into an element tree rooted at `<svg>`.
///
/// A `<!DOCTYPE>` is accepted. Namespaced attributes keep their prefix
/// (`xlink:href`), while `xmlns` declarations are not attributes at all.
pub fn parse_svg(text: &str, weight: Weight) -> Result<Element, IconError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc =
        roxmltree::Document::parse_with_options(text, options).map_err(|e| IconError::Parse {
            weight,
            message: e.to_string(),
        })?;

    let root = convert(doc.root_element());
    if root.tag != "svg" {
        return Err(IconError::Malformed {
            weight,
            root: root.tag,
        });
    }

    trace!(
        weight = %weight,
        children = root.children.len(),
        "Parsed SVG"
    );

    Ok(root)
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    Element {
        tag: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|attr| (attribute_name(&node, &attr), attr.value().to_string()))
            .collect(),
        children: node
            .children()
            .filter(roxmltree::Node::is_element)
            .map(convert)
            .collect(),
    }
}

fn attribute_name(
    node: &roxmltree::Node<'_, '_>,
    attr: &roxmltree::Attribute<'_, '_>,
) -> String {
    match attr.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) => format!("{}:{}", prefix, attr.name()),
        None => attr.name().to_string(),
    }
}
