use crate::core::models::TimeSlotRecord;
use crate::core::types::{DateDim, Meridiem, SlotOrder};

/// Period-pairs in one teaching day (periods 1-10).
pub const PERIOD_PAIRS_PER_DAY: usize = 5;

/// One accepted, non-overlapping lesson on a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonSlot {
    pub record: TimeSlotRecord,
    /// Period-pairs occupied, at least 1.
    pub span: usize,
    /// Grid cell of the first period-pair.
    pub start_index: usize,
}

impl LessonSlot {
    pub fn period_start(&self) -> u8 {
        self.record.period_start
    }

    pub fn period_end(&self) -> u8 {
        self.record.period_end
    }

    pub fn meridiem(&self) -> Meridiem {
        Meridiem::for_period(self.record.period_start)
    }
}

/// State of one period-pair cell. Indices point into the day's accepted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Empty,
    Lesson(usize),
    /// Covered by the multi-pair lesson that starts in an earlier cell.
    Continuation(usize),
}

impl GridCell {
    fn is_empty(self) -> bool {
        matches!(self, GridCell::Empty)
    }
}

/// All lessons of one calendar day laid out on the period-pair grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    date_dim: DateDim,
    records: Vec<TimeSlotRecord>,
    grid: [GridCell; PERIOD_PAIRS_PER_DAY],
    slots: Vec<LessonSlot>,
    lesson_spans_count: usize,
}

impl DaySchedule {
    pub fn new(date_dim: DateDim, records: Vec<TimeSlotRecord>) -> Self {
        Self::with_order(date_dim, records, SlotOrder::default())
    }

    /// Lays `records` out on the grid. A record is dropped when it starts at or
    /// before the end period of the last accepted record, when its first cell is
    /// outside the grid, or when any cell it needs is already taken. Spans running
    /// past the last cell are clamped.
    pub fn with_order(date_dim: DateDim, records: Vec<TimeSlotRecord>, order: SlotOrder) -> Self {
        let mut ordered: Vec<&TimeSlotRecord> = records.iter().collect();
        if order == SlotOrder::ByPeriodStart {
            ordered.sort_by_key(|r| r.period_start);
        }

        let mut grid = [GridCell::Empty; PERIOD_PAIRS_PER_DAY];
        let mut slots: Vec<LessonSlot> = Vec::new();
        let mut lesson_spans_count = 0;
        let mut last_end: Option<u8> = None;

        for record in ordered {
            if let Some(end) = last_end {
                // TODO: merge overlapping slots instead of dropping the later one
                if record.period_start <= end {
                    continue;
                }
            }

            let index = usize::from(record.period_start / 2);
            if index >= PERIOD_PAIRS_PER_DAY {
                continue;
            }
            let raw_span =
                (usize::from(record.period_end.saturating_sub(record.period_start)) + 1) / 2;
            let span = raw_span.max(1).min(PERIOD_PAIRS_PER_DAY - index);

            if !grid[index..index + span].iter().all(|c| c.is_empty()) {
                continue;
            }

            let slot_id = slots.len();
            grid[index] = GridCell::Lesson(slot_id);
            for cell in &mut grid[index + 1..index + span] {
                *cell = GridCell::Continuation(slot_id);
            }
            slots.push(LessonSlot {
                record: record.clone(),
                span,
                start_index: index,
            });
            lesson_spans_count += span;
            last_end = Some(record.period_end);
        }

        Self {
            date_dim,
            records,
            grid,
            slots,
            lesson_spans_count,
        }
    }

    /// A day without lessons.
    pub fn empty(date_dim: DateDim) -> Self {
        Self::new(date_dim, Vec::new())
    }

    pub fn date_dim(&self) -> &DateDim {
        &self.date_dim
    }

    /// Records this day was built from, in input order.
    pub fn records(&self) -> &[TimeSlotRecord] {
        &self.records
    }

    pub fn grid(&self) -> &[GridCell; PERIOD_PAIRS_PER_DAY] {
        &self.grid
    }

    pub fn lesson_spans_count(&self) -> usize {
        self.lesson_spans_count
    }

    /// The grid with continuation cells removed; `None` marks an empty cell.
    pub fn lessons(&self) -> Vec<Option<&LessonSlot>> {
        self.grid
            .iter()
            .filter_map(|cell| match cell {
                GridCell::Empty => Some(None),
                GridCell::Lesson(i) => Some(self.slots.get(*i)),
                GridCell::Continuation(_) => None,
            })
            .collect()
    }

    /// Accepted lessons in grid order.
    pub fn no_placeholder_lessons(&self) -> Vec<&LessonSlot> {
        self.lessons().into_iter().flatten().collect()
    }

    /// Lesson covering each grid cell, continuation cells included.
    pub fn time_index_lessons(&self) -> Vec<Option<&LessonSlot>> {
        self.grid
            .iter()
            .map(|cell| match cell {
                GridCell::Empty => None,
                GridCell::Lesson(i) | GridCell::Continuation(i) => self.slots.get(*i),
            })
            .collect()
    }

    pub fn has_lessons(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Records that did not make it onto the grid.
    pub fn dropped_count(&self) -> usize {
        self.records.len() - self.slots.len()
    }
}
