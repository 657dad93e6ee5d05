//! Modal Visibility State
//!
//! Two independent toggles plus the record selected for editing.

use crate::models::FoodItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub add_open: bool,
    pub edit_open: bool,
    /// Last record picked for editing. Left stale after close; only read
    /// while `edit_open`.
    pub editing: Option<FoodItem>,
}

impl ModalState {
    pub fn toggle_add(&mut self) {
        self.add_open = !self.add_open;
    }

    pub fn toggle_edit(&mut self) {
        self.edit_open = !self.edit_open;
    }

    /// Select first, then open.
    pub fn begin_edit(&mut self, food: FoodItem) {
        self.editing = Some(food);
        self.edit_open = true;
    }

    pub fn close_add(&mut self) {
        self.add_open = false;
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
    }

    /// Record shown in the edit modal, if it is open
    pub fn edit_target(&self) -> Option<&FoodItem> {
        self.editing.as_ref().filter(|_| self.edit_open)
    }
}
