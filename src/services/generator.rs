//! Runs the whole pipeline: refresh, load, render, write.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{GeneratorError, GeneratorResult, IconError};
use crate::models::{IconRecord, IconSet};
use crate::services::demo_page::assemble_demo_page;
use crate::services::loader::{
    icon_set_from_assets, icon_set_from_catalog, load_assets, load_catalog,
};
use crate::services::module_assembler::{assemble_module, GeneratedIcon};
use crate::services::renderer::render_element;
use crate::services::sanitizer::sanitize;
use crate::services::submodule::update_submodules;
use crate::services::svg_parser::parse_svg;

/// An icon left out of the output, with every reason it failed.
#[derive(Debug, Clone)]
pub struct IconFailure {
    pub name: String,
    pub errors: Vec<IconError>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub generated: Vec<GeneratedIcon>,
    pub failures: Vec<IconFailure>,
}

impl RunSummary {
    pub fn passes(&self) -> usize {
        self.generated.len()
    }

    pub fn fails(&self) -> usize {
        self.failures.len()
    }

    /// Primary names of the generated icons, in output order.
    pub fn names(&self) -> Vec<String> {
        self.generated.iter().map(|i| i.name.clone()).collect()
    }
}

pub async fn run(config: &Config) -> GeneratorResult<RunSummary> {
    if config.update_submodule {
        update_submodules(&config.root).await?;
    }

    let icons = load_icon_set(config)?;
    let summary = generate_icons(&icons);

    let module = assemble_module(&summary.generated)?;
    write_output(&config.module_path, &module)?;
    info!(path = %config.module_path.display(), "Wrote icon module");

    let demo = assemble_demo_page(&summary.names())?;
    write_output(&config.demo_path, &demo)?;
    info!(path = %config.demo_path.display(), "Wrote demo page");

    Ok(summary)
}

pub fn load_icon_set(config: &Config) -> GeneratorResult<IconSet> {
    let raw = load_assets(&config.assets_path, config.layout)?;

    Ok(match &config.catalog_path {
        Some(path) => {
            let catalog = load_catalog(path)?;
            icon_set_from_catalog(&catalog, raw)
        }
        None => icon_set_from_assets(raw),
    })
}

/// Render every icon; failures are collected, never fatal.
pub fn generate_icons(icons: &IconSet) -> RunSummary {
    let mut summary = RunSummary::default();

    for record in icons.iter() {
        match generate_icon(record) {
            Ok(icon) => {
                debug!(icon = %icon.name, "Generated icon");
                summary.generated.push(icon);
            }
            Err(errors) => {
                for error in &errors {
                    warn!(icon = %record.name, error = %error, "Icon failed");
                }
                summary.failures.push(IconFailure {
                    name: record.name.clone(),
                    errors,
                });
            }
        }
    }

    info!(
        generated = summary.passes(),
        failed = summary.fails(),
        "Processed icons"
    );
    summary
}

pub fn generate_icon(record: &IconRecord) -> Result<GeneratedIcon, Vec<IconError>> {
    if !record.sources.is_complete() {
        return Err(vec![IconError::MissingWeights {
            missing: record.sources.missing(),
            duplicated: record.sources.duplicated().to_vec(),
        }]);
    }

    let mut variants = Vec::new();
    let mut errors = Vec::new();

    for (weight, raw) in record.sources.iter() {
        match parse_svg(&sanitize(raw), weight) {
            Ok(tree) => variants.push((weight, render_element(&tree))),
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(GeneratedIcon {
        slug: record.slug.clone(),
        name: record.name.clone(),
        alias: record.alias.clone(),
        variants,
    })
}

fn write_output(path: &Path, contents: &str) -> GeneratorResult<()> {
    let write_err = |source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}
