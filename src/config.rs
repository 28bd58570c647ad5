use std::env;
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, GeneratorResult};

/// How the asset tree is organized on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetLayout {
    /// `<assets>/<weight>/<icon>[-<weight>].svg`
    #[default]
    Weights,
    /// `<assets>/<icon>/<icon>[-<weight>].svg`
    Icons,
}

impl AssetLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetLayout::Weights => "weights",
            AssetLayout::Icons => "icons",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weights" => Some(AssetLayout::Weights),
            "icons" => Some(AssetLayout::Icons),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Repository root; relative paths below resolve against it and
    /// the submodule update runs here.
    pub root: PathBuf,
    pub assets_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub module_path: PathBuf,
    pub demo_path: PathBuf,
    pub layout: AssetLayout,
    pub update_submodule: bool,
}

pub const DEFAULT_ASSETS_PATH: &str = "core/assets";
pub const DEFAULT_MODULE_PATH: &str = "src/Phosphor.elm";
pub const DEFAULT_DEMO_PATH: &str = "example/src/Test.elm";

impl Config {
    /// Config rooted at `root` with every other setting at its default.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            assets_path: root.join(DEFAULT_ASSETS_PATH),
            catalog_path: None,
            module_path: root.join(DEFAULT_MODULE_PATH),
            demo_path: root.join(DEFAULT_DEMO_PATH),
            layout: AssetLayout::default(),
            update_submodule: true,
            root,
        }
    }

    pub fn from_env() -> GeneratorResult<Self> {
        dotenvy::dotenv().ok();

        let root = env::var("PHOSPHOR_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let layout = match env::var("PHOSPHOR_ASSET_LAYOUT") {
            Ok(value) => AssetLayout::parse(&value).ok_or_else(|| {
                GeneratorError::Config(format!(
                    "PHOSPHOR_ASSET_LAYOUT must be 'weights' or 'icons', got '{}'",
                    value
                ))
            })?,
            Err(_) => AssetLayout::default(),
        };

        let update_submodule = match env::var("PHOSPHOR_UPDATE_SUBMODULE") {
            Ok(value) => parse_bool(&value).ok_or_else(|| {
                GeneratorError::Config(format!(
                    "PHOSPHOR_UPDATE_SUBMODULE must be a boolean, got '{}'",
                    value
                ))
            })?,
            Err(_) => true,
        };

        Ok(Self {
            assets_path: resolve(&root, env_path("PHOSPHOR_ASSETS_PATH", DEFAULT_ASSETS_PATH)),
            catalog_path: env::var("PHOSPHOR_CATALOG_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(|v| resolve(&root, PathBuf::from(v))),
            module_path: resolve(&root, env_path("PHOSPHOR_MODULE_PATH", DEFAULT_MODULE_PATH)),
            demo_path: resolve(&root, env_path("PHOSPHOR_DEMO_PATH", DEFAULT_DEMO_PATH)),
            layout,
            update_submodule,
            root,
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn resolve(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_defaults() {
        let config = Config::with_root("/repo");
        assert_eq!(config.assets_path, PathBuf::from("/repo/core/assets"));
        assert_eq!(config.module_path, PathBuf::from("/repo/src/Phosphor.elm"));
        assert_eq!(config.demo_path, PathBuf::from("/repo/example/src/Test.elm"));
        assert_eq!(config.layout, AssetLayout::Weights);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let root = Path::new("/repo");
        assert_eq!(
            resolve(root, PathBuf::from("/elsewhere/assets")),
            PathBuf::from("/elsewhere/assets")
        );
        assert_eq!(
            resolve(root, PathBuf::from("assets")),
            PathBuf::from("/repo/assets")
        );
    }

    #[test]
    fn test_parse_layout() {
        assert_eq!(AssetLayout::parse("Icons"), Some(AssetLayout::Icons));
        assert_eq!(AssetLayout::parse("weights"), Some(AssetLayout::Weights));
        assert_eq!(AssetLayout::parse("flat"), None);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
