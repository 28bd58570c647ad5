//! Assembles `Test.elm`, a browser sandbox showing every icon at every weight.

use askama::Template;

use crate::error::GeneratorResult;
use crate::models::Weight;

pub const MIN_SIZE: u32 = 4;
pub const MAX_SIZE: u32 = 2000;
/// Used when the size input doesn't parse.
pub const FALLBACK_SIZE: u32 = 128;
pub const INITIAL_SIZE: u32 = 64;
pub const INITIAL_WEIGHT: Weight = Weight::Thin;
/// What `parseWeight` returns for unknown input.
pub const DEFAULT_WEIGHT: Weight = Weight::Regular;

#[derive(Template)]
#[template(path = "Test.elm", escape = "none")]
pub struct DemoPageTemplate<'a> {
    pub names: &'a [String],
    pub weights: &'static [Weight],
    pub parsed_weights: Vec<Weight>,
    pub default_weight: Weight,
    pub initial_weight: Weight,
    pub initial_size: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub fallback_size: u32,
}

pub fn assemble_demo_page(names: &[String]) -> GeneratorResult<String> {
    let template = DemoPageTemplate {
        names,
        weights: &Weight::ALL,
        parsed_weights: Weight::ALL
            .iter()
            .copied()
            .filter(|w| *w != DEFAULT_WEIGHT)
            .collect(),
        default_weight: DEFAULT_WEIGHT,
        initial_weight: INITIAL_WEIGHT,
        initial_size: INITIAL_SIZE,
        min_size: MIN_SIZE,
        max_size: MAX_SIZE,
        fallback_size: FALLBACK_SIZE,
    };

    Ok(template.render()?)
}
