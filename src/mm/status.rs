//! A registry exposing the progress of the in-flight (or most recently
//! completed) iterative-deepening search, so a caller (e.g. a UI showing
//! "searching depth 4...") can poll it without holding a reference into the
//! search itself.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

/// How far an iterative-deepening search has progressed: the deepest ply
/// completed so far, and whether the position at that depth is decided (a
/// forced win/loss no deeper search can change).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatus {
    pub current_depth: u32,
    pub is_terminal: bool,
}

struct Registry {
    in_flight: Vec<(u64, SearchStatus)>,
    last_completed: Option<SearchStatus>,
}

static NEXT_SEARCH_ID: AtomicU64 = AtomicU64::new(1);

fn registry() -> &'static Mutex<Registry> {
    static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(Registry { in_flight: Vec::new(), last_completed: None }))
}

pub(super) fn begin_search() -> u64 {
    let id = NEXT_SEARCH_ID.fetch_add(1, Ordering::Relaxed);
    registry().lock().expect("search status registry poisoned").in_flight.push((id, SearchStatus::default()));
    id
}

pub(super) fn update(search_id: u64, status: SearchStatus) {
    let mut registry = registry().lock().expect("search status registry poisoned");
    if let Some(entry) = registry.in_flight.iter_mut().find(|(id, _)| *id == search_id) {
        entry.1 = status;
    }
}

pub(super) fn end_search(search_id: u64) {
    let mut registry = registry().lock().expect("search status registry poisoned");
    if let Some(index) = registry.in_flight.iter().position(|(id, _)| *id == search_id) {
        let (_, status) = registry.in_flight.remove(index);
        registry.last_completed = Some(status);
    }
}

/// The status of whichever iterative-deepening search most recently
/// reported progress: the most recently started search still in flight, or
/// else the last one to finish. Depth 0, non-terminal, if no search has run
/// yet in this process.
pub fn get_search_status() -> SearchStatus {
    let registry = registry().lock().expect("search status registry poisoned");
    registry.in_flight.last().map(|(_, status)| *status).or(registry.last_completed).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_then_update_then_end_is_visible_in_order() {
        let id = begin_search();
        assert_eq!(get_search_status(), SearchStatus { current_depth: 0, is_terminal: false });

        update(id, SearchStatus { current_depth: 3, is_terminal: true });
        assert_eq!(get_search_status(), SearchStatus { current_depth: 3, is_terminal: true });

        end_search(id);
        assert_eq!(get_search_status(), SearchStatus { current_depth: 3, is_terminal: true });
    }
}
