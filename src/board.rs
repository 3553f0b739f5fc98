//! Board Operations
//!
//! The one piece of client-side logic with a contract: moving a task from
//! a source slot to a destination slot on the board. The mutation is
//! applied synchronously for immediate visual feedback; the caller issues
//! the remote status update and re-fetches the board if that write fails.

use leptos_dragdrop::SlotRef;

use crate::models::{Board, BoardColumn, Task};

impl Board {
    pub fn column(&self, status: &str) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.status == status)
    }

    fn column_mut(&mut self, status: &str) -> Option<&mut BoardColumn> {
        self.columns.iter_mut().find(|c| c.status == status)
    }

    /// Remove the task at `source` and insert it at `dest`, updating its
    /// status to the destination column's label. Both indices refer to the
    /// slot layout as rendered, so a same-column drop below the source is
    /// shifted down by one to account for the removal.
    ///
    /// Returns the moved task, or `None` when the source slot is stale
    /// (unknown column or out-of-range index); the board is left
    /// unchanged in that case.
    pub fn apply_move(&mut self, source: &SlotRef, dest: &SlotRef) -> Option<Task> {
        {
            let src = self.column(&source.column)?;
            if source.index >= src.tasks.len() {
                return None;
            }
        }
        if self.column(&dest.column).is_none() {
            return None;
        }

        let mut at = dest.index;
        if dest.column == source.column && dest.index > source.index {
            at -= 1;
        }

        let mut task = self
            .column_mut(&source.column)
            .map(|c| c.tasks.remove(source.index))?;
        task.status = dest.column.clone();

        let dst = self
            .column_mut(&dest.column)
            .expect("destination column checked above");
        let at = at.min(dst.tasks.len());
        dst.tasks.insert(at, task.clone());
        Some(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: &str) -> Task {
        Task {
            id: id.to_string(),
            task_name: format!("task {id}"),
            task_description: format!("description {id}"),
            status: status.to_string(),
        }
    }

    fn board() -> Board {
        Board {
            columns: vec![
                BoardColumn {
                    status: "todo".into(),
                    tasks: vec![task("42", "todo"), task("43", "todo")],
                },
                BoardColumn {
                    status: "in progress".into(),
                    tasks: vec![task("50", "in progress")],
                },
                BoardColumn {
                    status: "done".into(),
                    tasks: vec![],
                },
            ],
        }
    }

    #[test]
    fn cross_column_move_lands_at_destination_index() {
        let mut b = board();
        let moved = b
            .apply_move(&SlotRef::new("todo", 0), &SlotRef::new("done", 0))
            .unwrap();

        assert_eq!(moved.id, "42");
        assert_eq!(moved.status, "done");
        // Identity and description survive the move
        assert_eq!(moved.task_description, "description 42");

        let todo = b.column("todo").unwrap();
        assert!(todo.tasks.iter().all(|t| t.id != "42"));
        assert_eq!(todo.tasks.len(), 1);

        let done = b.column("done").unwrap();
        assert_eq!(done.tasks.len(), 1);
        assert_eq!(done.tasks[0].id, "42");
    }

    #[test]
    fn moved_task_appears_exactly_once() {
        let mut b = board();
        b.apply_move(&SlotRef::new("todo", 1), &SlotRef::new("in progress", 1))
            .unwrap();

        let occurrences: usize = b
            .columns
            .iter()
            .map(|c| c.tasks.iter().filter(|t| t.id == "43").count())
            .sum();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn same_column_downward_drop_lands_at_the_rendered_slot() {
        let mut b = Board {
            columns: vec![BoardColumn {
                status: "todo".into(),
                tasks: vec![task("1", "todo"), task("2", "todo"), task("3", "todo")],
            }],
        };
        // Slot 2 is rendered between the second and third card
        let moved = b
            .apply_move(&SlotRef::new("todo", 0), &SlotRef::new("todo", 2))
            .unwrap();

        assert_eq!(moved.id, "1");
        assert_eq!(moved.status, "todo");
        let ids: Vec<_> = b.column("todo").unwrap().tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }

    #[test]
    fn same_column_drop_on_the_next_slot_keeps_the_order() {
        let mut b = board();
        let moved = b
            .apply_move(&SlotRef::new("todo", 0), &SlotRef::new("todo", 1))
            .unwrap();

        assert_eq!(moved.id, "42");
        let ids: Vec<_> = b.column("todo").unwrap().tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["42", "43"]);
    }

    #[test]
    fn same_column_tail_drop_moves_to_the_end() {
        let mut b = board();
        b.apply_move(&SlotRef::new("todo", 0), &SlotRef::new("todo", 2))
            .unwrap();
        let ids: Vec<_> = b.column("todo").unwrap().tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["43", "42"]);
    }

    #[test]
    fn same_column_upward_drop_keeps_the_rendered_index() {
        let mut b = board();
        b.apply_move(&SlotRef::new("todo", 1), &SlotRef::new("todo", 0))
            .unwrap();
        let ids: Vec<_> = b.column("todo").unwrap().tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["43", "42"]);
    }

    #[test]
    fn stale_source_index_leaves_board_unchanged() {
        let mut b = board();
        let before = b.clone();
        assert!(b.apply_move(&SlotRef::new("todo", 5), &SlotRef::new("done", 0)).is_none());
        assert_eq!(b, before);
    }

    #[test]
    fn unknown_columns_leave_board_unchanged() {
        let mut b = board();
        let before = b.clone();
        assert!(b.apply_move(&SlotRef::new("archived", 0), &SlotRef::new("done", 0)).is_none());
        assert!(b.apply_move(&SlotRef::new("todo", 0), &SlotRef::new("archived", 0)).is_none());
        assert_eq!(b, before);
    }

    #[test]
    fn destination_index_past_end_appends() {
        let mut b = board();
        b.apply_move(&SlotRef::new("todo", 0), &SlotRef::new("in progress", 9))
            .unwrap();
        let col = b.column("in progress").unwrap();
        assert_eq!(col.tasks.last().unwrap().id, "42");
    }
}
