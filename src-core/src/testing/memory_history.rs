use std::cell::RefCell;

use crate::ports::Navigator;

/// How the current history entry was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Pop,
    Push,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
}

#[derive(Debug)]
struct Entries {
    paths: Vec<String>,
    index: usize,
    action: HistoryAction,
}

/// Navigation handle that keeps its entries in memory.
///
/// Starts with a single entry reached by `Pop`, the way a freshly loaded page
/// does.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Entries>,
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: RefCell::new(Entries {
                paths: vec![initial_path.to_string()],
                index: 0,
                action: HistoryAction::Pop,
            }),
        }
    }

    /// Number of entries in the stack.
    pub fn length(&self) -> usize {
        self.entries.borrow().paths.len()
    }

    pub fn action(&self) -> HistoryAction {
        self.entries.borrow().action
    }

    pub fn location(&self) -> Location {
        let entries = self.entries.borrow();
        Location {
            pathname: entries.paths[entries.index].clone(),
        }
    }

    /// Step back one entry; no-op at the start of the stack.
    pub fn back(&self) {
        let mut entries = self.entries.borrow_mut();
        if entries.index > 0 {
            entries.index -= 1;
            entries.action = HistoryAction::Pop;
        }
    }
}

impl Navigator for MemoryHistory {
    fn push(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        let next = entries.index + 1;
        // Pushing drops any forward entries.
        entries.paths.truncate(next);
        entries.paths.push(path.to_string());
        entries.index = next;
        entries.action = HistoryAction::Push;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_history_has_one_popped_entry() {
        let history = MemoryHistory::new("/login");
        assert_eq!(history.length(), 1);
        assert_eq!(history.action(), HistoryAction::Pop);
        assert_eq!(history.location().pathname, "/login");
    }

    #[test]
    fn push_then_back_returns_to_previous_entry() {
        let history = MemoryHistory::new("/login");
        history.push("/");
        assert_eq!(history.length(), 2);
        assert_eq!(history.action(), HistoryAction::Push);

        history.back();
        assert_eq!(history.location().pathname, "/login");
        assert_eq!(history.action(), HistoryAction::Pop);
    }

    #[test]
    fn push_after_back_discards_forward_entries() {
        let history = MemoryHistory::new("/login");
        history.push("/a");
        history.back();
        history.push("/b");
        assert_eq!(history.length(), 2);
        assert_eq!(history.location().pathname, "/b");
    }
}
