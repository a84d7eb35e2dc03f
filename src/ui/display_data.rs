use crate::config::Config;
use crate::core::models::{NamedRef, ScheduleContext};
use crate::schedule::day::DaySchedule;

/// Headers and rows of the lesson table.
#[derive(Debug, Clone)]
pub struct LessonTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self
    }

    /// One row per accepted lesson. Columns fixed by `context` are left out.
    pub fn lesson_table(&self, days: &[&DaySchedule], context: &ScheduleContext) -> LessonTable {
        let optional: [(&'static str, bool); 4] = [
            ("COURSE", context.course),
            ("CLASS", context.the_class),
            ("SITE", context.site),
            ("TEACHER", context.teacher),
        ];

        let mut headers = vec!["DATE", "DAY", "TIME", "PERIODS"];
        headers.extend(optional.iter().filter(|(_, hidden)| !hidden).map(|(h, _)| *h));

        let mut rows = Vec::new();
        for day in days {
            for slot in day.no_placeholder_lessons() {
                let r = &slot.record;
                let mut row = vec![
                    day.date_dim().formatted(),
                    day.date_dim().day_of_week().to_string(),
                    slot.meridiem().to_string(),
                    format!("{}-{}", r.period_start, r.period_end),
                ];
                let names: [(&Option<NamedRef>, bool); 4] = [
                    (&r.course, context.course),
                    (&r.the_class, context.the_class),
                    (&r.site, context.site),
                    (&r.teacher, context.teacher),
                ];
                row.extend(
                    names
                        .iter()
                        .filter(|(_, hidden)| !hidden)
                        .map(|(named, _)| name_or_dash(named)),
                );
                rows.push(row);
            }
        }

        LessonTable { headers, rows }
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }
}

fn name_or_dash(named: &Option<NamedRef>) -> String {
    named
        .as_ref()
        .map(|n| n.name.clone())
        .unwrap_or_else(|| "-".to_string())
}
