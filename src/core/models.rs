use crate::core::types::{DateDim, DayOfWeek};
use crate::errors::{Error, Result};
use crate::extensions::chrono::NaiveDateExt;
use crate::schedule::calendar_view::CalendarView;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a course, teacher, site or class, as shipped with a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// =====
// Record
// =====

/// One scheduled lesson occurrence. Periods are 1-based and callers guarantee
/// `period_start <= period_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotRecord {
    pub date: DateDim,
    pub day_of_week: DayOfWeek,
    pub weekno: u32,
    pub period_start: u8,
    pub period_end: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<NamedRef>,
    #[serde(default, rename = "class", skip_serializing_if = "Option::is_none")]
    pub the_class: Option<NamedRef>,
}

impl TimeSlotRecord {
    pub fn new(date: DateDim, weekno: u32, period_start: u8, period_end: u8) -> Self {
        Self {
            date,
            day_of_week: date.day_of_week(),
            weekno,
            period_start,
            period_end,
            course: None,
            teacher: None,
            site: None,
            the_class: None,
        }
    }

    pub fn with_course(mut self, name: impl Into<String>) -> Self {
        self.course = Some(NamedRef::new(name));
        self
    }

    pub fn with_teacher(mut self, name: impl Into<String>) -> Self {
        self.teacher = Some(NamedRef::new(name));
        self
    }

    pub fn with_site(mut self, name: impl Into<String>) -> Self {
        self.site = Some(NamedRef::new(name));
        self
    }

    pub fn with_class(mut self, name: impl Into<String>) -> Self {
        self.the_class = Some(NamedRef::new(name));
        self
    }
}

impl fmt::Display for TimeSlotRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slot(date={}, week={}, periods={}-{}, course={})",
            self.date,
            self.weekno,
            self.period_start,
            self.period_end,
            self.course.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
        )
    }
}

// =====
// Context
// =====

/// Which dimensions the current perspective is fixed on. A set flag hides that
/// dimension's name from tooltips (a teacher's own timetable need not repeat the
/// teacher on every line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleContext {
    pub course: bool,
    pub teacher: bool,
    pub site: bool,
    pub the_class: bool,
}

impl ScheduleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma list such as `teacher,site`.
    pub fn try_from_csv(s: &str) -> Result<Self> {
        let mut ctx = Self::default();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "course" => ctx.course = true,
                "teacher" => ctx.teacher = true,
                "site" => ctx.site = true,
                "class" => ctx.the_class = true,
                other => {
                    return Err(Error::Parse(format!(
                        "Unknown context dimension: '{other}'. Valid dimensions: course, teacher, site, class"
                    )));
                }
            }
        }
        Ok(ctx)
    }
}

// =====
// Calendar divisions
// =====

/// A teaching week. `first_day..=last_day` usually spans 7 days but may be
/// shorter at term edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDim {
    pub weekno: u32,
    pub first_day: DateDim,
    pub last_day: DateDim,
}

impl WeekDim {
    pub fn new(weekno: u32, first_day: DateDim, last_day: DateDim) -> Self {
        Self {
            weekno,
            first_day,
            last_day,
        }
    }

    /// Every calendar day of the week in order.
    pub fn days(&self) -> Vec<DateDim> {
        CalendarView::between(self.first_day.date(), self.last_day.date().next_day())
            .days()
            .into_iter()
            .map(DateDim::new)
            .collect()
    }

    fn intersects(&self, start: NaiveDate, end_exclusive: NaiveDate) -> bool {
        self.first_day.date() < end_exclusive && self.last_day.date() >= start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDim {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekDim>,
    first_day: NaiveDate,
}

impl MonthDim {
    pub fn try_new(year: i32, month: u32, weeks: Vec<WeekDim>) -> Result<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::Parse(format!("Invalid month: {year}-{month}")))?;
        Ok(Self {
            year,
            month,
            weeks,
            first_day,
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn end_exclusive(&self) -> NaiveDate {
        self.first_day.next_month_start()
    }

    /// `YYYY-MM`.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Parses `YYYY-MM` (or `YYYY/MM`) into a year and month.
    pub fn parse_label(s: &str) -> Result<(i32, u32)> {
        let s = s.trim().replace('/', "-");
        let parsed = s.split_once('-').and_then(|(y, m)| {
            let year = y.parse::<i32>().ok()?;
            let month = m.parse::<u32>().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1).map(|_| (year, month))
        });
        parsed.ok_or_else(|| Error::Parse(format!("Invalid month: '{s}'. Expected YYYY-MM.")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDim {
    pub name: String,
    pub weeks: Vec<WeekDim>,
}

impl TermDim {
    pub fn new(name: impl Into<String>, weeks: Vec<WeekDim>) -> Self {
        Self {
            name: name.into(),
            weeks,
        }
    }

    pub fn first_day(&self) -> Option<DateDim> {
        self.weeks.first().map(|w| w.first_day)
    }

    pub fn last_day(&self) -> Option<DateDim> {
        self.weeks.last().map(|w| w.last_day)
    }

    /// The month view of this term: every week touching `year-month`.
    pub fn month(&self, year: i32, month: u32) -> Result<MonthDim> {
        let probe = MonthDim::try_new(year, month, Vec::new())?;
        let (start, end) = (probe.first_day(), probe.end_exclusive());
        let weeks = self
            .weeks
            .iter()
            .filter(|w| w.intersects(start, end))
            .cloned()
            .collect();
        MonthDim::try_new(year, month, weeks)
    }

    /// Every month the term touches, in calendar order.
    pub fn months(&self) -> Vec<MonthDim> {
        let (Some(first), Some(last)) = (self.first_day(), self.last_day()) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut cursor = first.date().month_start();
        while cursor <= last.date() {
            if let Ok(m) = self.month(cursor.year(), cursor.month()) {
                out.push(m);
            }
            cursor = cursor.next_month_start();
        }
        out
    }
}
