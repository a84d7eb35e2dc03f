use crate::core::models::{NamedRef, ScheduleContext};
use crate::schedule::day::DaySchedule;

pub const NO_LESSONS_TEXT: &str = "No lessons";
const INDENT: &str = "        ";

/// Multi-line hover text for one day.
///
/// Each lesson contributes a `(AM)1-2` style header followed by one indented
/// line per name that is present on the record and not fixed by `context`.
pub fn lessons_text(day: &DaySchedule, context: &ScheduleContext) -> String {
    let lessons = day.no_placeholder_lessons();
    if lessons.is_empty() {
        return NO_LESSONS_TEXT.to_string();
    }

    let mut text = String::new();
    for slot in lessons {
        let record = &slot.record;
        text.push_str(&format!(
            "{}{}-{}\n",
            slot.meridiem(),
            record.period_start,
            record.period_end
        ));

        let lines: [(bool, &Option<NamedRef>); 4] = [
            (context.course, &record.course),
            (context.the_class, &record.the_class),
            (context.site, &record.site),
            (context.teacher, &record.teacher),
        ];
        for (suppressed, named) in lines {
            if let (false, Some(named)) = (suppressed, named) {
                text.push_str(INDENT);
                text.push_str(&named.name);
                text.push('\n');
            }
        }
    }
    text
}
