//! Selection state of a tab bar

use matter_core::fsm::StateMachine;

use super::item::TabBarItem;

/// Whether an item is selected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionPhase {
    NoSelection,
    Selected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum SelectionEvent {
    Select,
    Clear,
    ItemRemoved,
}

/// Selected item tracked by a two-state machine
pub(crate) struct Selection {
    fsm: StateMachine<SelectionPhase, SelectionEvent>,
    item: Option<TabBarItem>,
}

impl Selection {
    pub(crate) fn new() -> Self {
        let fsm = StateMachine::builder(SelectionPhase::NoSelection)
            .on(
                SelectionPhase::NoSelection,
                SelectionEvent::Select,
                SelectionPhase::Selected,
            )
            .on(
                SelectionPhase::Selected,
                SelectionEvent::Select,
                SelectionPhase::Selected,
            )
            .on(
                SelectionPhase::Selected,
                SelectionEvent::Clear,
                SelectionPhase::NoSelection,
            )
            .on(
                SelectionPhase::Selected,
                SelectionEvent::ItemRemoved,
                SelectionPhase::NoSelection,
            )
            .build();
        Self { fsm, item: None }
    }

    pub(crate) fn phase(&self) -> SelectionPhase {
        self.fsm.current_state()
    }

    pub(crate) fn item(&self) -> Option<&TabBarItem> {
        self.item.as_ref()
    }

    pub(crate) fn select(&mut self, item: TabBarItem) {
        self.fsm.send(SelectionEvent::Select);
        self.item = Some(item);
    }

    pub(crate) fn clear(&mut self) {
        if self.fsm.can_send(SelectionEvent::Clear) {
            self.fsm.send(SelectionEvent::Clear);
        }
        self.item = None;
    }

    /// Drop the selection if its item is not in `items`.
    ///
    /// Returns true when the selection was dropped.
    pub(crate) fn retain_in(&mut self, items: &[TabBarItem]) -> bool {
        match &self.item {
            Some(item) if !items.contains(item) => {
                self.fsm.send(SelectionEvent::ItemRemoved);
                self.item = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matter_core::fsm::DEFAULT_HISTORY_LIMIT;

    #[test]
    fn test_select_and_clear() {
        let mut selection = Selection::new();
        assert_eq!(selection.phase(), SelectionPhase::NoSelection);

        let item = TabBarItem::new("A");
        selection.select(item.clone());
        assert_eq!(selection.phase(), SelectionPhase::Selected);
        assert_eq!(selection.item(), Some(&item));

        selection.clear();
        assert_eq!(selection.phase(), SelectionPhase::NoSelection);
        assert!(selection.item().is_none());

        selection.clear();
        assert_eq!(selection.phase(), SelectionPhase::NoSelection);
    }

    #[test]
    fn test_removed_item_drops_selection() {
        let mut selection = Selection::new();
        let a = TabBarItem::new("A");
        let b = TabBarItem::new("B");
        selection.select(a.clone());

        assert!(!selection.retain_in(&[b.clone(), a.clone()]));
        assert_eq!(selection.phase(), SelectionPhase::Selected);

        assert!(selection.retain_in(&[b]));
        assert_eq!(selection.phase(), SelectionPhase::NoSelection);
        assert!(!selection.retain_in(&[]));
    }

    #[test]
    fn test_long_lived_selection_stays_bounded() {
        let mut selection = Selection::new();
        let items = [TabBarItem::new("A"), TabBarItem::new("B")];
        for i in 0..50_000 {
            selection.select(items[i % 2].clone());
        }
        assert_eq!(selection.fsm.history().len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(selection.item(), Some(&items[1]));
    }
}
