use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::calculator::TraversalMode;
use crate::error::Result;

pub trait Configuration {
    // 扩展符号词典路径
    fn get_ext_dictionaries(&self) -> Vec<PathBuf>;
    // 屏蔽的符号
    fn get_disabled_symbols(&self) -> Vec<String>;
    fn get_traversal_mode(&self) -> TraversalMode;
}

/// Built-in table only, iterative traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl Configuration for DefaultConfig {
    fn get_ext_dictionaries(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn get_disabled_symbols(&self) -> Vec<String> {
        Vec::new()
    }

    fn get_traversal_mode(&self) -> TraversalMode {
        TraversalMode::default()
    }
}

/// Configuration read from a YAML file:
///
/// ```yaml
/// ext_dictionaries:
///   - extra_symbols.dic
/// disabled_symbols: [Uut, Uup]
/// traversal: recursive
/// ```
///
/// Relative dictionary paths resolve against the directory of the YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YamlConfig {
    pub ext_dictionaries: Vec<String>,
    pub disabled_symbols: Vec<String>,
    pub traversal: TraversalMode,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl YamlConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut cfg = Self::from_yaml_str(&fs::read_to_string(path)?)?;
        cfg.base_dir = path.parent().map(Path::to_path_buf);
        Ok(cfg)
    }
}

impl Configuration for YamlConfig {
    fn get_ext_dictionaries(&self) -> Vec<PathBuf> {
        self.ext_dictionaries
            .iter()
            .map(|dict| match &self.base_dir {
                Some(dir) => dir.join(dict),
                None => PathBuf::from(dict),
            })
            .collect()
    }

    fn get_disabled_symbols(&self) -> Vec<String> {
        self.disabled_symbols.clone()
    }

    fn get_traversal_mode(&self) -> TraversalMode {
        self.traversal
    }
}
