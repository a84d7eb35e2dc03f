pub mod models;
#[cfg(test)]
mod tests;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    CellSizeConfigItem, ColorScaleFloorConfigItem, ConfigItem, FileLoggingConfigItem,
    SlotOrderConfigItem, ThemeConfigItem,
};
use crate::core::types::{SlotOrder, ThemeKey};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    SlotOrder,
    ColorScaleFloor,
    CellSize,
    Theme,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub slot_order: SlotOrderConfigItem,
    #[serde(default)]
    pub color_scale_floor: ColorScaleFloorConfigItem,
    #[serde(default)]
    pub cell_size: CellSizeConfigItem,
    #[serde(default)]
    pub theme: ThemeConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

pub type ConfigChange = (String, String, String);

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<ConfigChange>,
}

/// `(key, description, value)` per config item, in key order.
#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// Loads `path`, or starts from defaults bound to `path` when the file does
    /// not exist yet. Nothing is written until the first edit.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from(path);
        }
        Ok(Self {
            path: path.to_path_buf(),
            data: ConfigFile::default(),
            last_change: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slot_order(&self) -> SlotOrder {
        *self.data.slot_order.get_value()
    }
    pub fn color_scale_floor(&self) -> usize {
        *self.data.color_scale_floor.get_value() as usize
    }
    pub fn cell_size(&self) -> u32 {
        *self.data.cell_size.get_value()
    }
    pub fn theme(&self) -> ThemeKey {
        *self.data.theme.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn value_string(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::SlotOrder => self.data.slot_order.get_value().to_string(),
            ConfigKey::ColorScaleFloor => self.data.color_scale_floor.get_value().to_string(),
            ConfigKey::CellSize => self.data.cell_size.get_value().to_string(),
            ConfigKey::Theme => self.data.theme.get_value().to_string(),
            ConfigKey::FileLoggingEnabled => {
                self.data.file_logging_enabled.get_value().to_string()
            }
        }
    }

    fn description(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::SlotOrder => self.data.slot_order.description(),
            ConfigKey::ColorScaleFloor => self.data.color_scale_floor.description(),
            ConfigKey::CellSize => self.data.cell_size.description(),
            ConfigKey::Theme => self.data.theme.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    (
                        key.to_string(),
                        self.description(key).to_string(),
                        self.value_string(key),
                    )
                })
                .collect(),
        )
    }

    pub fn set_by_index(&mut self, index: usize, new_value: &str) -> Result<()> {
        let key = ConfigKey::iter()
            .nth(index)
            .ok_or_else(|| Error::Parse(format!("Invalid ID: {index}")))?;
        self.set_key(key, new_value)
    }

    /// Sets one item and saves. The `(key, old, new)` triple is kept in
    /// `last_change` for the caller to log.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.value_string(key);
        self.edit(|cfg| Self::apply(cfg, key, new_value))?;
        self.last_change = Some((key.to_string(), old, self.value_string(key)));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<ConfigChange> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = Self::parse_key(key_str)?;
        self.set_key(key, new_value)
    }

    /// Applies every pair or none of them, then saves once.
    pub fn set_many<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut staged = self.data.clone();
        for (k, v) in pairs {
            let key = Self::parse_key(k.as_ref())?;
            Self::apply(&mut staged, key, v.as_ref())?;
        }
        self.edit(|cfg| {
            *cfg = staged;
            Ok(())
        })
    }

    fn parse_key(key_str: &str) -> Result<ConfigKey> {
        ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })
    }

    fn apply(cfg: &mut ConfigFile, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::SlotOrder => cfg.slot_order.set_value(value),
            ConfigKey::ColorScaleFloor => cfg.color_scale_floor.set_value(value),
            ConfigKey::CellSize => cfg.cell_size.set_value(value),
            ConfigKey::Theme => cfg.theme.set_value(value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(value),
        }
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        f(&mut self.data)?;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
