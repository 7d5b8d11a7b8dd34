//! Time slot grid.
//!
//! The timetable is discretized into a fixed catalog of slots, each pinned
//! to a day of week and a start/end time. Slots carry an ordering index
//! used for adjacency checks and for multi-slot lab blocks, which must
//! occupy contiguous indexes on the same day.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Working day of the week.
///
/// Ordering follows the calendar (Monday first); Saturday is representable
/// for institutions that teach six days.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// A single cell of the timetable grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Day of week.
    pub day: DayOfWeek,
    /// Start time in minutes from midnight.
    pub start_minute: u16,
    /// End time in minutes from midnight.
    pub end_minute: u16,
    /// Global ordering index. Unique across the catalog; contiguous
    /// within a day so that index distance measures adjacency.
    pub index: u32,
    /// Break slots stay in the catalog but never take assignments.
    pub is_break: bool,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(
        id: impl Into<String>,
        day: DayOfWeek,
        start_minute: u16,
        end_minute: u16,
        index: u32,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            start_minute,
            end_minute,
            index,
            is_break: false,
        }
    }

    /// Marks this slot as a break (lunch, assembly).
    pub fn as_break(mut self) -> Self {
        self.is_break = true;
        self
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

/// The run's slot catalog, ordered by index.
///
/// Wraps the input slots with the lookups the evaluator and solver need:
/// id resolution, contiguous-span expansion for lab blocks, and adjacency
/// queries. Built once per run; never mutated during search.
#[derive(Debug, Clone)]
pub struct SlotCatalog {
    /// Slots sorted ascending by ordering index.
    slots: Vec<TimeSlot>,
    /// Slot id → position in `slots`.
    by_id: HashMap<String, usize>,
    /// Ordering index → position in `slots`.
    by_index: HashMap<u32, usize>,
}

impl SlotCatalog {
    /// Builds a catalog from the run's slots.
    ///
    /// Slots are cloned and sorted by ordering index; input order does not
    /// affect the run.
    pub fn new(slots: &[TimeSlot]) -> Self {
        let mut sorted: Vec<TimeSlot> = slots.to_vec();
        sorted.sort_by(|a, b| a.index.cmp(&b.index));

        let by_id = sorted
            .iter()
            .enumerate()
            .map(|(pos, s)| (s.id.clone(), pos))
            .collect();
        let by_index = sorted
            .iter()
            .enumerate()
            .map(|(pos, s)| (s.index, pos))
            .collect();

        Self {
            slots: sorted,
            by_id,
            by_index,
        }
    }

    /// Looks up a slot by id.
    pub fn get(&self, slot_id: &str) -> Option<&TimeSlot> {
        self.by_id.get(slot_id).map(|&pos| &self.slots[pos])
    }

    /// Looks up a slot by ordering index.
    pub fn get_by_index(&self, index: u32) -> Option<&TimeSlot> {
        self.by_index.get(&index).map(|&pos| &self.slots[pos])
    }

    /// All slots in ascending index order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of slots in the catalog.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolves the contiguous span of `duration` slots starting at `start`.
    ///
    /// A span is valid only if every slot exists at consecutive indexes,
    /// lies on the same day as the start, and none is a break. Returns
    /// `None` otherwise.
    pub fn span(&self, start: &TimeSlot, duration: u32) -> Option<Vec<&TimeSlot>> {
        if duration == 0 || start.is_break {
            return None;
        }
        let mut span = Vec::with_capacity(duration as usize);
        for offset in 0..duration {
            let slot = self.get_by_index(start.index + offset)?;
            if slot.day != start.day || slot.is_break {
                return None;
            }
            span.push(slot);
        }
        Some(span)
    }

    /// Slot ids adjacent to `slot` (index ±1, same day).
    pub fn adjacent_ids(&self, slot: &TimeSlot) -> Vec<&str> {
        let mut adjacent = Vec::with_capacity(2);
        if slot.index > 0 {
            if let Some(prev) = self.get_by_index(slot.index - 1) {
                if prev.day == slot.day {
                    adjacent.push(prev.id.as_str());
                }
            }
        }
        if let Some(next) = self.get_by_index(slot.index + 1) {
            if next.day == slot.day {
                adjacent.push(next.id.as_str());
            }
        }
        adjacent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday_slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::new("MON-1", DayOfWeek::Monday, 540, 600, 0),
            TimeSlot::new("MON-2", DayOfWeek::Monday, 600, 660, 1),
            TimeSlot::new("MON-3", DayOfWeek::Monday, 660, 720, 2),
            TimeSlot::new("MON-L", DayOfWeek::Monday, 720, 780, 3).as_break(),
            TimeSlot::new("MON-4", DayOfWeek::Monday, 780, 840, 4),
            TimeSlot::new("TUE-1", DayOfWeek::Tuesday, 540, 600, 5),
        ]
    }

    #[test]
    fn test_catalog_sorted_by_index() {
        let mut slots = monday_slots();
        slots.reverse();
        let catalog = SlotCatalog::new(&slots);
        let indexes: Vec<u32> = catalog.slots().iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_lookup_by_id_and_index() {
        let catalog = SlotCatalog::new(&monday_slots());
        assert_eq!(catalog.get("MON-2").unwrap().index, 1);
        assert_eq!(catalog.get_by_index(4).unwrap().id, "MON-4");
        assert!(catalog.get("NONE").is_none());
    }

    #[test]
    fn test_span_contiguous() {
        let catalog = SlotCatalog::new(&monday_slots());
        let start = catalog.get("MON-1").unwrap();
        let span = catalog.span(start, 2).unwrap();
        assert_eq!(span.len(), 2);
        assert_eq!(span[1].id, "MON-2");
    }

    #[test]
    fn test_span_rejects_break() {
        let catalog = SlotCatalog::new(&monday_slots());
        // MON-3 + MON-L would cross the lunch break
        let start = catalog.get("MON-3").unwrap();
        assert!(catalog.span(start, 2).is_none());
        // A break slot cannot anchor a span either
        let lunch = catalog.get("MON-L").unwrap();
        assert!(catalog.span(lunch, 1).is_none());
    }

    #[test]
    fn test_span_rejects_day_boundary() {
        let catalog = SlotCatalog::new(&monday_slots());
        let start = catalog.get("MON-4").unwrap();
        // MON-4 (index 4) followed by TUE-1 (index 5) is not a valid block
        assert!(catalog.span(start, 2).is_none());
        assert!(catalog.span(start, 1).is_some());
    }

    #[test]
    fn test_adjacency_same_day_only() {
        let catalog = SlotCatalog::new(&monday_slots());
        let mon4 = catalog.get("MON-4").unwrap();
        // TUE-1 has index 5 but sits on another day
        assert_eq!(catalog.adjacent_ids(mon4), vec!["MON-L"]);

        let mon2 = catalog.get("MON-2").unwrap();
        assert_eq!(catalog.adjacent_ids(mon2), vec!["MON-1", "MON-3"]);
    }

    #[test]
    fn test_slot_duration() {
        let slot = TimeSlot::new("S", DayOfWeek::Friday, 540, 600, 0);
        assert_eq!(slot.duration_minutes(), 60);
    }
}
