use crate::core::types::{Bool, SlotOrder, ThemeKey};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub const MAX_CELL_SIZE: u32 = 1000;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

fn parse_positive(new_value: &str, what: &str) -> Result<u32, Error> {
    match new_value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Parse(format!(
            "Invalid {what}: '{}'. Expected a positive whole number.",
            new_value.trim()
        ))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotOrderConfigItem {
    pub value: SlotOrder,
    pub description: String,
}

impl Default for SlotOrderConfigItem {
    fn default() -> Self {
        Self {
            value: SlotOrder::default(),
            description: "Order of a day's records before overlapping slots are dropped.".into(),
        }
    }
}

impl ConfigItem<SlotOrder> for SlotOrderConfigItem {
    fn get_value(&self) -> &SlotOrder {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = SlotOrder::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScaleFloorConfigItem {
    pub value: u32,
    pub description: String,
}

impl Default for ColorScaleFloorConfigItem {
    fn default() -> Self {
        Self {
            value: 4,
            description: "Lowest heatmap scale maximum, in period-pairs.".into(),
        }
    }
}

impl ConfigItem<u32> for ColorScaleFloorConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = parse_positive(new_value, "color scale floor")?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSizeConfigItem {
    pub value: u32,
    pub description: String,
}

impl Default for CellSizeConfigItem {
    fn default() -> Self {
        Self {
            value: 70,
            description: "Calendar cell size in pixels for exported charts.".into(),
        }
    }
}

impl ConfigItem<u32> for CellSizeConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let size = parse_positive(new_value, "cell size")?;
        if size > MAX_CELL_SIZE {
            return Err(Error::Parse(format!(
                "Invalid cell size: '{size}'. Expected at most {MAX_CELL_SIZE}."
            )));
        }
        self.value = size;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfigItem {
    pub value: ThemeKey,
    pub description: String,
}

impl Default for ThemeConfigItem {
    fn default() -> Self {
        Self {
            value: ThemeKey::default(),
            description: "Color theme selected at startup.".into(),
        }
    }
}

impl ConfigItem<ThemeKey> for ThemeConfigItem {
    fn get_value(&self) -> &ThemeKey {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = ThemeKey::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
