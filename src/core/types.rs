use crate::errors::{Error, Result};
use crate::extensions::chrono::WeekdayExt;
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDateKey;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Grouping key format for calendar days.
pub const DATE_KEY_FORMAT: &str = "%Y%m%d";
/// Human-readable date format used in chart cells and tooltips.
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DayOfWeek {
    #[strum(serialize = "mon", serialize = "monday", to_string = "MON")]
    Mon,
    #[strum(serialize = "tue", serialize = "tuesday", to_string = "TUE")]
    Tue,
    #[strum(serialize = "wed", serialize = "wednesday", to_string = "WED")]
    Wed,
    #[strum(serialize = "thu", serialize = "thursday", to_string = "THU")]
    Thu,
    #[strum(serialize = "fri", serialize = "friday", to_string = "FRI")]
    Fri,
    #[strum(serialize = "sat", serialize = "saturday", to_string = "SAT")]
    Sat,
    #[strum(serialize = "sun", serialize = "sunday", to_string = "SUN")]
    Sun,
}

impl DayOfWeek {
    /// 1 (Monday) through 7 (Sunday).
    pub fn number(self) -> u8 {
        match self {
            DayOfWeek::Mon => 1,
            DayOfWeek::Tue => 2,
            DayOfWeek::Wed => 3,
            DayOfWeek::Thu => 4,
            DayOfWeek::Fri => 5,
            DayOfWeek::Sat => 6,
            DayOfWeek::Sun => 7,
        }
    }

    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            1 => Ok(DayOfWeek::Mon),
            2 => Ok(DayOfWeek::Tue),
            3 => Ok(DayOfWeek::Wed),
            4 => Ok(DayOfWeek::Thu),
            5 => Ok(DayOfWeek::Fri),
            6 => Ok(DayOfWeek::Sat),
            7 => Ok(DayOfWeek::Sun),
            other => Err(Error::Parse(format!(
                "Invalid day of the week: {other}. Expected 1 (Monday) to 7 (Sunday)."
            ))),
        }
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        DayOfWeek::from_number(n).map_err(serde::de::Error::custom)
    }
}

/// One calendar day, identified by its `YYYYMMDD` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateDim(NaiveDate);

impl DateDim {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Accepts `YYYYMMDD`, `YYYY-MM-DD` and `YYYY/MM/DD`.
    pub fn try_from_str(input: &str) -> Result<Self> {
        let key = input.to_date_key();
        NaiveDate::parse_from_str(&key, DATE_KEY_FORMAT)
            .map(DateDim)
            .map_err(|_| {
                Error::Parse(format!(
                    "Invalid date: '{}'. Expected YYYYMMDD or YYYY-MM-DD.",
                    input.trim()
                ))
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The grouping key, e.g. `20240902`.
    pub fn key(&self) -> String {
        self.0.format(DATE_KEY_FORMAT).to_string()
    }

    pub fn formatted(&self) -> String {
        self.0.format(DATE_DISPLAY_FORMAT).to_string()
    }

    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.0.weekday().to_day_of_week()
    }
}

impl From<NaiveDate> for DateDim {
    fn from(date: NaiveDate) -> Self {
        DateDim(date)
    }
}

impl fmt::Display for DateDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for DateDim {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for DateDim {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateDim::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Half of the teaching day a lesson starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Meridiem {
    #[strum(to_string = "(AM)")]
    Am,
    #[strum(to_string = "(PM)")]
    Pm,
}

impl Meridiem {
    /// Periods 1 to 4 are morning periods.
    pub fn for_period(period_start: u8) -> Self {
        if period_start < 5 { Meridiem::Am } else { Meridiem::Pm }
    }
}

/// Order in which a day's records are fed to the overlap check.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "kebab-case")]
pub enum SlotOrder {
    #[strum(serialize = "as-given", to_string = "as-given")]
    AsGiven,
    #[default]
    #[strum(serialize = "by-period-start", to_string = "by-period-start")]
    ByPeriodStart,
}

impl SlotOrder {
    pub fn help(&self) -> &'static str {
        match self {
            SlotOrder::AsGiven => "Resolve overlaps in the order records were supplied.",
            SlotOrder::ByPeriodStart => {
                "Stable-sort each day's records by start period before resolving overlaps."
            }
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid slot order: '{}'. Allowed orders: {}",
                s.trim(),
                valid_csv::<SlotOrder>()
            ))
        })
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "kebab-case")]
pub enum ThemeKey {
    #[default]
    #[strum(serialize = "deeppurple-amber", to_string = "deeppurple-amber")]
    DeeppurpleAmber,
    #[strum(serialize = "indigo-pink", to_string = "indigo-pink")]
    IndigoPink,
    #[strum(serialize = "pink-bluegrey", to_string = "pink-bluegrey")]
    PinkBluegrey,
    #[strum(serialize = "purple-green", to_string = "purple-green")]
    PurpleGreen,
}

impl ThemeKey {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid theme: '{}'. Valid themes: {}",
                s.trim(),
                valid_csv::<ThemeKey>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

/// Boolean stored as `"True"`/`"False"` text in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Bool, D::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Content shown in calendar cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ChartMode {
    #[default]
    #[strum(serialize = "lessons", to_string = "lessons")]
    Lessons,
    #[strum(serialize = "statistics", serialize = "stats", to_string = "statistics")]
    Statistics,
}
