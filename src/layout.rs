use strum::IntoEnumIterator;

use crate::config::staff::Staff;
use crate::NoteName;

/// Inner padding between the staff edges and its outer lines.
pub const STAFF_PADDING: f64 = 20.0;
/// Distance between the staff's outer lines, in the same unit as the
/// geometry. Not cross-validated against the configured staff height.
pub const LINE_SPAN: f64 = 140.0;

const STAFF_INTERVALS: f64 = 6.0;

/// Computed once at board construction: the vertical position for every
/// note name and the horizontal position for every token slot.
pub struct Layout {
    note_tops: [f64; 7],
    slot_lefts: Vec<f64>,
}

impl Layout {
    pub fn new(staff: &Staff) -> Self {
        let radius = staff.note_diameter / 2.0;

        // Tokens are centered on the outer lines: B on the top line, C on
        // the bottom line, the rest evenly spaced between them.
        let top_position = staff.top + STAFF_PADDING - radius;
        let bottom_position = staff.top + STAFF_PADDING + LINE_SPAN - radius;
        let interval = (bottom_position - top_position) / STAFF_INTERVALS;

        let mut note_tops = [0.0; 7];
        for note in NoteName::iter() {
            let index = note.staff_index();
            note_tops[index] = bottom_position - interval * index as f64;
        }

        let usable_left = staff.left + STAFF_PADDING - radius;
        let usable_right = staff.left + staff.width - STAFF_PADDING - radius;
        let total_range = usable_right - usable_left;
        let adjusted_range = total_range * staff.compression;
        let offset = (total_range - adjusted_range) / 2.0;
        let spacing = if staff.columns > 1 {
            adjusted_range / (staff.columns - 1) as f64
        } else {
            0.0
        };

        let slot_lefts = (0..staff.columns)
            .map(|slot| usable_left + offset + spacing * slot as f64)
            .collect();

        Self {
            note_tops,
            slot_lefts,
        }
    }

    pub fn note_top(&self, note: NoteName) -> f64 {
        self.note_tops[note.staff_index()]
    }

    pub fn slot_left(&self, slot: usize) -> Option<f64> {
        self.slot_lefts.get(slot).copied()
    }

    pub fn columns(&self) -> usize {
        self.slot_lefts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_tops_descend_as_pitch_ascends() {
        let layout = Layout::new(&Staff::default());

        let tops: Vec<_> = NoteName::iter().map(|note| layout.note_top(note)).collect();

        assert!(tops.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn note_tops_anchor_to_the_outer_lines() {
        // top 175, padding 20, diameter 60: bottom line center at 305,
        // top line center 140 above it.
        let layout = Layout::new(&Staff::default());

        assert_eq!(layout.note_top(NoteName::C), 305.0);
        assert_eq!(layout.note_top(NoteName::B), 165.0);
    }

    #[test]
    fn note_tops_are_evenly_spaced() {
        let layout = Layout::new(&Staff::default());

        let tops: Vec<_> = NoteName::iter().map(|note| layout.note_top(note)).collect();
        let interval = LINE_SPAN / 6.0;

        for pair in tops.windows(2) {
            assert!((pair[0] - pair[1] - interval).abs() < 1e-9);
        }
    }

    #[test]
    fn slot_lefts_increase_with_slot_index() {
        let layout = Layout::new(&Staff::default());

        let lefts: Vec<_> = (0..layout.columns())
            .map(|slot| layout.slot_left(slot).unwrap())
            .collect();

        assert_eq!(lefts.len(), 7);
        assert!(lefts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn compression_insets_the_distribution() {
        // left 180, width 600, padding 20, radius 30: usable range is
        // 170..730, compressed by 0.9 leaves a 28-unit inset either side.
        let layout = Layout::new(&Staff::default());

        assert_eq!(layout.slot_left(0), Some(198.0));
        assert_eq!(layout.slot_left(6), Some(702.0));
    }

    #[test]
    fn zero_columns_produce_no_slots() {
        let staff = Staff {
            columns: 0,
            ..Staff::default()
        };

        let layout = Layout::new(&staff);

        assert_eq!(layout.columns(), 0);
        assert_eq!(layout.slot_left(0), None);
    }

    #[test]
    fn single_column_sits_at_the_inset_edge() {
        let staff = Staff {
            columns: 1,
            ..Staff::default()
        };

        let layout = Layout::new(&staff);

        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.slot_left(0), Some(198.0));
    }
}
