//! Optimistic drag-and-drop reordering of stops.
//!
//! Drag-over splices the dragged stop into the hovered slot immediately.
//! Drop produces the per-stop order updates to persist; if persisting
//! fails the local order is discarded in favour of the server's.

use crate::{Stop, StopOrderUpdate};

/// Move `items[from]` to position `to`, shifting the items in between
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Renumber `order` as 1-based list positions
pub fn renumber(stops: &mut [Stop]) {
    for (index, stop) in stops.iter_mut().enumerate() {
        stop.order = index as u32 + 1;
    }
}

/// Sort by the server-provided `order`, keeping ties in arrival order
pub fn sort_by_order(stops: &mut [Stop]) {
    stops.sort_by_key(|stop| stop.order);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReorderResolution {
    /// Persisted; show these stops with their new orders
    Commit(Vec<Stop>),
    /// Persisting failed; show the pre-drag order and reload from the server
    Revert(Vec<Stop>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderState {
    dragged: Option<usize>,
    snapshot: Vec<Stop>,
}

impl ReorderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged
    }

    /// Remember the dragged index and the order to fall back to
    pub fn start(&mut self, index: usize, stops: &[Stop]) {
        self.dragged = Some(index);
        self.snapshot = stops.to_vec();
    }

    /// Splice the dragged stop to `index`. Returns whether `stops` changed.
    pub fn drag_over(&mut self, stops: &mut Vec<Stop>, index: usize) -> bool {
        let Some(from) = self.dragged else {
            return false;
        };
        if from == index || index >= stops.len() {
            return false;
        }
        move_item(stops, from, index);
        self.dragged = Some(index);
        true
    }

    /// End the drag. Returns the order updates to persist, or `None` when no
    /// drag was in progress.
    pub fn end_drag(&mut self, stops: &[Stop]) -> Option<Vec<(String, StopOrderUpdate)>> {
        self.dragged.take()?;
        Some(
            stops
                .iter()
                .enumerate()
                .map(|(index, stop)| {
                    (
                        stop.id.clone(),
                        StopOrderUpdate {
                            order: index as u32 + 1,
                        },
                    )
                })
                .collect(),
        )
    }

    /// Decide what to show once the order updates have settled
    pub fn resolve<E>(&mut self, local: Vec<Stop>, outcome: Result<(), E>) -> ReorderResolution {
        let snapshot = std::mem::take(&mut self.snapshot);
        match outcome {
            Ok(()) => {
                let mut committed = local;
                renumber(&mut committed);
                ReorderResolution::Commit(committed)
            }
            Err(_) => ReorderResolution::Revert(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stops(cities: &[&str]) -> Vec<Stop> {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        cities
            .iter()
            .enumerate()
            .map(|(i, city)| Stop {
                id: format!("s{}", i + 1),
                city: city.to_string(),
                country: String::new(),
                start_date: date,
                end_date: date,
                budget: 0.0,
                notes: String::new(),
                order: i as u32 + 1,
                activities: Vec::new(),
            })
            .collect()
    }

    fn cities(stops: &[Stop]) -> Vec<&str> {
        stops.iter().map(|s| s.city.as_str()).collect()
    }

    #[test]
    fn test_move_item() {
        let mut items = vec![1, 2, 3, 4];
        move_item(&mut items, 0, 2);
        assert_eq!(items, vec![2, 3, 1, 4]);
        move_item(&mut items, 3, 0);
        assert_eq!(items, vec![4, 2, 3, 1]);
        move_item(&mut items, 9, 0);
        assert_eq!(items, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_drag_over_follows_the_dragged_stop() {
        let mut list = stops(&["Paris", "Amsterdam", "Berlin"]);
        let mut state = ReorderState::new();
        state.start(0, &list);

        assert!(state.drag_over(&mut list, 1));
        assert_eq!(cities(&list), vec!["Amsterdam", "Paris", "Berlin"]);
        assert!(state.drag_over(&mut list, 2));
        assert_eq!(cities(&list), vec!["Amsterdam", "Berlin", "Paris"]);
        assert_eq!(state.dragged_index(), Some(2));
        assert!(!state.drag_over(&mut list, 2));
    }

    #[test]
    fn test_dragged_index_set_on_start_and_cleared_on_drop() {
        let list = stops(&["Paris", "Amsterdam"]);
        let mut state = ReorderState::new();
        state.start(1, &list);
        assert_eq!(state.dragged_index(), Some(1));
        assert!(state.is_dragging());
        assert!(state.end_drag(&list).is_some());
        assert_eq!(state.dragged_index(), None);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let list = stops(&["Paris"]);
        let mut state = ReorderState::new();
        assert_eq!(state.end_drag(&list), None);
        let mut list = list;
        assert!(!state.drag_over(&mut list, 0));
    }

    #[test]
    fn test_drop_emits_one_based_orders() {
        let mut list = stops(&["Paris", "Amsterdam", "Berlin"]);
        let mut state = ReorderState::new();
        state.start(2, &list);
        state.drag_over(&mut list, 0);
        let updates = state.end_drag(&list).unwrap();
        assert_eq!(
            updates,
            vec![
                ("s3".to_string(), StopOrderUpdate { order: 1 }),
                ("s1".to_string(), StopOrderUpdate { order: 2 }),
                ("s2".to_string(), StopOrderUpdate { order: 3 }),
            ]
        );
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_successful_persist_commits_local_order() {
        let mut list = stops(&["Paris", "Amsterdam"]);
        let mut state = ReorderState::new();
        state.start(1, &list);
        state.drag_over(&mut list, 0);
        state.end_drag(&list);
        match state.resolve::<String>(list, Ok(())) {
            ReorderResolution::Commit(committed) => {
                assert_eq!(cities(&committed), vec!["Amsterdam", "Paris"]);
                assert_eq!(committed[0].order, 1);
                assert_eq!(committed[1].order, 2);
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_persist_reverts_to_server_order() {
        let server = stops(&["Paris", "Amsterdam", "Berlin"]);
        let mut list = server.clone();
        let mut state = ReorderState::new();
        state.start(0, &list);
        state.drag_over(&mut list, 2);
        assert_ne!(list, server);
        state.end_drag(&list);
        let resolution = state.resolve(list, Err("500 Internal Server Error"));
        assert_eq!(resolution, ReorderResolution::Revert(server));
    }

    #[test]
    fn test_sort_by_order() {
        let mut list = stops(&["A", "B", "C"]);
        list[0].order = 3;
        list[2].order = 1;
        sort_by_order(&mut list);
        assert_eq!(cities(&list), vec!["C", "B", "A"]);
    }
}
