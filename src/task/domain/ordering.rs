//! Urgency ordering shared by task listings and the dashboard.

use super::Task;
use std::cmp::Ordering;

/// Orders tasks most urgent first.
///
/// Higher priority wins. Within a priority the earliest due date wins and a
/// task without a due date sorts after every dated one. Remaining ties go to
/// the most recently created task.
#[must_use]
pub fn by_urgency(left: &Task, right: &Task) -> Ordering {
    right
        .priority()
        .cmp(&left.priority())
        .then_with(|| match (left.due_date(), right.due_date()) {
            (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| right.created_at().cmp(&left.created_at()))
}
