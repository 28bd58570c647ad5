//! Shared test utilities for integration tests.
//!
//! `AssetTree` builds an icon asset directory inside a temp dir and hands out
//! a `Config` pointing at it. Methods are intentionally broad to support
//! various test scenarios across different test files.

#![allow(dead_code)]

use phosphor_elm_gen::config::{AssetLayout, Config};
use phosphor_elm_gen::models::Weight;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TRIVIAL_SVG: &str = r#"<svg><path d="M1 1"/></svg>"#;

/// What a design tool export looks like before sanitizing.
pub const EXPORTED_SVG: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">"#,
    r#"<rect width="256" height="256" fill="none"/>"#,
    r##"<line x1="40" y1="40" x2="216" y2="216" stroke="#000000" stroke-width="16"/>"##,
    r#"</svg>"#
);

pub struct AssetTree {
    dir: TempDir,
    layout: AssetLayout,
}

impl AssetTree {
    /// Empty tree using one folder per weight.
    pub fn weights() -> Self {
        Self::with_layout(AssetLayout::Weights)
    }

    /// Empty tree using one folder per icon.
    pub fn icons() -> Self {
        Self::with_layout(AssetLayout::Icons)
    }

    fn with_layout(layout: AssetLayout) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("core/assets")).expect("Failed to create assets dir");
        Self { dir, layout }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn assets(&self) -> PathBuf {
        self.root().join("core/assets")
    }

    /// Write one weight of an icon at the path its layout expects.
    pub fn add(&self, slug: &str, weight: Weight, svg: &str) -> &Self {
        let suffix = weight.file_suffix().unwrap_or_default();
        let path = match self.layout {
            AssetLayout::Weights => self
                .assets()
                .join(weight.slug())
                .join(format!("{}{}.svg", slug, suffix)),
            AssetLayout::Icons => self
                .assets()
                .join(slug)
                .join(format!("{}{}.svg", slug, suffix)),
        };
        self.write(&path, svg);
        self
    }

    /// Write all six weights of an icon.
    pub fn add_icon(&self, slug: &str, svg: &str) -> &Self {
        for weight in Weight::ALL {
            self.add(slug, weight, svg);
        }
        self
    }

    /// Write a catalog manifest and return its path.
    pub fn add_catalog(&self, json: &str) -> PathBuf {
        let path = self.root().join("icons.json");
        self.write(&path, json);
        path
    }

    pub fn write(&self, path: &Path, contents: &str) {
        self.write_bytes(path, contents.as_bytes());
    }

    pub fn write_bytes(&self, path: &Path, contents: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, contents).expect("Failed to write fixture");
    }

    /// Config for this tree with the submodule update disabled.
    pub fn config(&self) -> Config {
        let mut config = Config::with_root(self.root());
        config.layout = self.layout;
        config.update_submodule = false;
        config
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read output")
    }
}
