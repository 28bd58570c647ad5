//! Reads the SVG asset tree into an [`IconSet`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::AssetLayout;
use crate::error::{GeneratorError, GeneratorResult};
use crate::models::{CatalogEntry, IconRecord, IconSet, Weight, WeightSources};
use crate::name_utils::{kebab_to_camel, pascal_to_camel};

/// Icon slug -> weight -> raw SVG text.
pub type RawIcons = BTreeMap<String, WeightSources>;

/// Load raw SVG text from `assets` using the given layout.
pub fn load_assets(assets: &Path, layout: AssetLayout) -> GeneratorResult<RawIcons> {
    let icons = match layout {
        AssetLayout::Weights => load_weight_folders(assets)?,
        AssetLayout::Icons => load_icon_folders(assets)?,
    };

    info!(
        count = icons.len(),
        layout = layout.as_str(),
        "Loaded icon assets"
    );
    Ok(icons)
}

/// `<assets>/<weight>/<slug>[-<weight>].svg`
fn load_weight_folders(assets: &Path) -> GeneratorResult<RawIcons> {
    let mut icons = RawIcons::new();

    for folder in sorted_dirs(assets)? {
        let folder_name = file_name(&folder);
        let weight = Weight::parse(&folder_name)
            .ok_or_else(|| GeneratorError::BadWeightFolder(folder_name.clone()))?;

        for file in svg_files(&folder)? {
            let stem = file_stem(&file);
            let slug = strip_weight_suffix(&stem, weight).to_string();
            let text = read_svg(&file)?;
            icons.entry(slug).or_default().insert(weight, text);
        }
    }

    Ok(icons)
}

/// `<assets>/<slug>/<slug>[-<weight>].svg`
fn load_icon_folders(assets: &Path) -> GeneratorResult<RawIcons> {
    let mut icons = RawIcons::new();

    for folder in sorted_dirs(assets)? {
        let slug = file_name(&folder);
        let sources = icons.entry(slug).or_default();

        for file in svg_files(&folder)? {
            let weight = weight_from_stem(&file_stem(&file));
            sources.insert(weight, read_svg(&file)?);
        }
    }

    Ok(icons)
}

/// The last `-` token names the weight; no recognized token means Regular.
pub fn weight_from_stem(stem: &str) -> Weight {
    stem.rsplit('-')
        .next()
        .filter(|token| *token != stem)
        .and_then(Weight::parse)
        .filter(|w| *w != Weight::Regular)
        .unwrap_or(Weight::Regular)
}

/// Strips the folder's weight suffix, ignoring ASCII case like the folder name does.
pub fn strip_weight_suffix(stem: &str, weight: Weight) -> &str {
    let Some(suffix) = weight.file_suffix() else {
        return stem;
    };
    if stem.len() <= suffix.len() {
        return stem;
    }

    let split = stem.len() - suffix.len();
    match stem.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(&suffix) => &stem[..split],
        _ => stem,
    }
}

/// Read the catalog manifest (a JSON array of [`CatalogEntry`]).
pub fn load_catalog(path: &Path) -> GeneratorResult<Vec<CatalogEntry>> {
    let text = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&text).map_err(|source| GeneratorError::Catalog {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = entries.len(), path = %path.display(), "Loaded icon catalog");
    Ok(entries)
}

/// Icons in slug order, named after their slug.
pub fn icon_set_from_assets(raw: RawIcons) -> IconSet {
    IconSet {
        icons: raw
            .into_iter()
            .map(|(slug, sources)| IconRecord {
                name: kebab_to_camel(&slug),
                alias: None,
                slug,
                sources,
            })
            .collect(),
    }
}

/// Icons in catalog order. Catalog entries without assets get empty sources;
/// assets without a catalog entry are dropped.
pub fn icon_set_from_catalog(catalog: &[CatalogEntry], mut raw: RawIcons) -> IconSet {
    let icons = catalog
        .iter()
        .map(|entry| IconRecord {
            slug: entry.name.clone(),
            name: pascal_to_camel(&entry.pascal_name),
            alias: entry
                .alias
                .as_ref()
                .map(|alias| pascal_to_camel(&alias.pascal_name)),
            sources: raw.remove(&entry.name).unwrap_or_default(),
        })
        .collect();

    for slug in raw.keys() {
        debug!(icon = %slug, "Skipping asset not listed in catalog");
    }

    IconSet { icons }
}

fn sorted_dirs(path: &Path) -> GeneratorResult<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(path)
        .map_err(|e| GeneratorError::io(path, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();

    dirs.sort();
    Ok(dirs)
}

fn svg_files(path: &Path) -> GeneratorResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(path)
        .map_err(|e| GeneratorError::io(path, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().map(|ext| ext == "svg").unwrap_or(false))
        .collect();

    files.sort();
    Ok(files)
}

/// Invalid UTF-8 is replaced rather than rejected; only a failed read is fatal.
fn read_svg(path: &Path) -> GeneratorResult<String> {
    let bytes = fs::read(path).map_err(|e| GeneratorError::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(path = %path.display(), "Replaced invalid UTF-8 in SVG file");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
