//! Assembles `Phosphor.elm`: the fixed prelude plus one function per icon.

use askama::Template;

use crate::error::GeneratorResult;
use crate::models::Weight;

/// Where the doc comment preview images point to.
pub const PREVIEW_BASE_URL: &str =
    "https://raw.githubusercontent.com/phosphor-icons/core/main/assets/regular";

pub const VIEW_BOX: &str = "0 0 256 256";

/// An icon whose six weights rendered successfully.
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub slug: String,
    pub name: String,
    pub alias: Option<String>,
    /// Rendered element lists in canonical weight order.
    pub variants: Vec<(Weight, String)>,
}

impl GeneratedIcon {
    /// Every name this icon is exported under.
    pub fn exports(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alias.as_deref())
    }
}

#[derive(Template)]
#[template(path = "Phosphor.elm", escape = "none")]
pub struct PhosphorModuleTemplate<'a> {
    pub exports: Vec<&'a str>,
    pub docs: String,
    pub weights: &'static [Weight],
    pub view_box: &'static str,
    pub definitions: Vec<String>,
}

pub fn assemble_module(icons: &[GeneratedIcon]) -> GeneratorResult<String> {
    let exports: Vec<&str> = icons.iter().flat_map(|icon| icon.exports()).collect();
    let definitions = icons.iter().map(render_definition).collect();

    let template = PhosphorModuleTemplate {
        docs: exports.join(", "),
        exports,
        weights: &Weight::ALL,
        view_box: VIEW_BOX,
        definitions,
    };

    Ok(template.render()?)
}

/// The icon's function, followed by its alias when it has one.
pub fn render_definition(icon: &GeneratedIcon) -> String {
    let mut out = String::new();

    out.push_str(&preview_doc(&icon.name, &icon.slug));
    out.push_str(&format!("{} : Icon\n", icon.name));
    out.push_str(&format!("{} weight =\n", icon.name));
    out.push_str("    let\n");
    out.push_str("        elements =\n");
    out.push_str("            case weight of\n");
    for (weight, elements) in &icon.variants {
        out.push_str(&format!("                {} ->\n", weight));
        out.push_str(&format!("                    {}\n\n", elements));
    }
    out.push_str("    in\n");
    out.push_str("    makeBuilder elements\n\n\n");

    if let Some(alias) = &icon.alias {
        out.push_str(&preview_doc(alias, &icon.slug));
        out.push_str(&format!("{} : Icon\n", alias));
        out.push_str(&format!("{} =\n", alias));
        out.push_str(&format!("    {}\n\n\n", icon.name));
    }

    out
}

fn preview_doc(name: &str, slug: &str) -> String {
    format!(
        "{{-| ![{}]({}/{}.svg)\n-}}\n",
        name, PREVIEW_BASE_URL, slug
    )
}
