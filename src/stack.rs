// SPDX-License-Identifier: MPL-2.0
//! Position bucket: insertion-ordered membership and offset bookkeeping
//! for one screen corner.
//!
//! Offsets are measured from the corner's anchor edge and grow away from
//! it, so within a stack they are non-decreasing in insertion order and
//! visible siblings never overlap. The interpretation of the offset axis
//! (downward vs. upward) is the render layer's business; see
//! [`Position::anchor`](crate::position::Position::anchor).

use crate::position::Position;
use crate::toast::{ToastId, ToastRecord};

/// The ordered set of toasts anchored to one screen corner.
#[derive(Debug)]
pub struct Stack {
    position: Position,
    records: Vec<ToastRecord>,
}

impl Stack {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Members in insertion order, oldest (closest to the anchor) first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: ToastId) -> Option<&mut ToastRecord> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Offset the next appended toast should take: the gutter, plus every
    /// current member's measured height and trailing gutter.
    ///
    /// Members that have not reported a height yet contribute nothing for
    /// this pass; a fast-arriving sibling may land under-offset until the
    /// layout reports catch up.
    #[must_use]
    pub fn stacked_offset(&self, gutter: f32) -> f32 {
        self.records.iter().fold(gutter, |offset, record| {
            offset + record.mounted_height().map_or(0.0, |height| height + gutter)
        })
    }

    /// Appends `record` at the end, farthest from the anchor edge.
    pub(crate) fn append(&mut self, record: ToastRecord) {
        self.records.push(record);
    }

    /// Removes the record with `id`, yielding its membership index and the
    /// record itself.
    ///
    /// A missing id is a recoverable miss, not an error: a timer and a user
    /// click racing to close the same toast both land here, and the loser
    /// gets `None`.
    pub(crate) fn remove(&mut self, id: ToastId) -> Option<(usize, ToastRecord)> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some((index, self.records.remove(index)))
    }

    /// Slides every member at or after `index` toward the anchor by the
    /// removed sibling's height plus the gutter, returning the ids and new
    /// offsets of the members that moved.
    ///
    /// Members whose element has not reported a height are left untouched
    /// for this pass; the render sink positions them once they mount.
    pub(crate) fn reflow_after(
        &mut self,
        index: usize,
        removed_height: f32,
        gutter: f32,
    ) -> Vec<(ToastId, f32)> {
        let mut moved = Vec::new();
        for record in self.records.iter_mut().skip(index) {
            if record.mounted_height().is_none() {
                continue;
            }
            record.shift_offset(-(removed_height + gutter));
            moved.push((record.id(), record.offset()));
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionDefaults, ToastOptions};
    use crate::test_utils::assert_abs_diff_eq;

    const GUTTER: f32 = 12.0;

    fn stack_with_heights(heights: &[f32]) -> Stack {
        let mut stack = Stack::new(Position::TopRight);
        for &height in heights {
            let offset = stack.stacked_offset(GUTTER);
            let (options, _) = ToastOptions::new().resolve(&OptionDefaults::default());
            let mut record = ToastRecord::new("toast".into(), options, None, offset);
            record.set_mounted_height(height);
            stack.append(record);
        }
        stack
    }

    #[test]
    fn first_toast_sits_one_gutter_from_the_anchor() {
        let stack = Stack::new(Position::TopRight);
        assert_abs_diff_eq!(stack.stacked_offset(GUTTER), 12.0);
    }

    #[test]
    fn stacked_offset_sums_heights_and_gutters() {
        let stack = stack_with_heights(&[40.0, 50.0]);
        // 12 + (40 + 12) + (50 + 12)
        assert_abs_diff_eq!(stack.stacked_offset(GUTTER), 126.0);
    }

    #[test]
    fn unmeasured_members_contribute_nothing_to_the_stacked_offset() {
        let mut stack = stack_with_heights(&[40.0]);
        let (options, _) = ToastOptions::new().resolve(&OptionDefaults::default());
        let unmeasured =
            ToastRecord::new("pending".into(), options, None, stack.stacked_offset(GUTTER));
        stack.append(unmeasured);

        assert_abs_diff_eq!(stack.stacked_offset(GUTTER), 64.0);
    }

    #[test]
    fn remove_yields_index_and_record() {
        let mut stack = stack_with_heights(&[40.0, 50.0, 60.0]);
        let middle_id = stack.iter().nth(1).unwrap().id();

        let (index, record) = stack.remove(middle_id).expect("member should be found");
        assert_eq!(index, 1);
        assert_eq!(record.id(), middle_id);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn remove_of_unknown_id_is_a_silent_miss() {
        let mut stack = stack_with_heights(&[40.0]);
        let foreign = stack_with_heights(&[10.0]).remove_first_id();

        assert!(stack.remove(foreign).is_none());
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn reflow_shifts_only_members_at_or_after_the_removal_index() {
        let mut stack = stack_with_heights(&[40.0, 50.0, 60.0]);
        let middle_id = stack.iter().nth(1).unwrap().id();
        let (index, removed) = stack.remove(middle_id).unwrap();

        let moved = stack.reflow_after(index, removed.mounted_height().unwrap(), GUTTER);

        assert_eq!(moved.len(), 1);
        let offsets: Vec<f32> = stack.iter().map(ToastRecord::offset).collect();
        assert_abs_diff_eq!(offsets[0], 12.0);
        assert_abs_diff_eq!(offsets[1], 64.0); // was 126, slid up by 50 + 12
    }

    #[test]
    fn reflow_skips_members_without_a_measured_height() {
        let mut stack = stack_with_heights(&[40.0, 50.0]);
        let (options, _) = ToastOptions::new().resolve(&OptionDefaults::default());
        let pending =
            ToastRecord::new("pending".into(), options, None, stack.stacked_offset(GUTTER));
        let pending_offset = pending.offset();
        stack.append(pending);

        let first_id = stack.iter().next().unwrap().id();
        let (index, removed) = stack.remove(first_id).unwrap();
        stack.reflow_after(index, removed.mounted_height().unwrap(), GUTTER);

        let offsets: Vec<f32> = stack.iter().map(ToastRecord::offset).collect();
        assert_abs_diff_eq!(offsets[0], 12.0); // was 64, slid up by 40 + 12
        assert_abs_diff_eq!(offsets[1], pending_offset); // untouched until measured
    }

    impl Stack {
        fn remove_first_id(mut self) -> ToastId {
            let id = self.iter().next().unwrap().id();
            self.remove(id);
            id
        }
    }
}
