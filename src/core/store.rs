//! Portfolio state slice
//!
//! One explicit container shared by every portfolio view. All changes go
//! through [`PortfolioState::apply`], one action at a time, so each update is
//! atomic and the last committed action wins.

use std::cell::RefCell;

use leptos::prelude::*;

use super::client::PortfolioPage;
use super::links::PageLinks;
use super::model::Portfolio;
use super::pagination::FetchMode;

/// Shared state of the portfolio views
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioState {
    /// Rows shown by the list view
    pub entities: Vec<Portfolio>,
    /// Record shown by the detail, edit and delete views
    pub entity: Portfolio,
    /// A read request is in flight
    pub loading: bool,
    /// A write request is in flight
    pub updating: bool,
    /// The last write succeeded; views use it to navigate or refresh
    pub update_success: bool,
    pub links: PageLinks,
    pub total_items: u64,
    pub error_message: Option<String>,
}

/// Everything that can happen to the slice
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioAction {
    /// Back to the initial slice
    Reset,
    ReadPending,
    WritePending,
    Failed(String),
    ListLoaded { page: PortfolioPage, mode: FetchMode },
    EntityLoaded(Portfolio),
    EntitySaved(Portfolio),
    EntityDeleted(i64),
}

impl PortfolioState {
    pub fn apply(&mut self, action: PortfolioAction) {
        match action {
            PortfolioAction::Reset => *self = PortfolioState::default(),
            PortfolioAction::ReadPending => {
                self.error_message = None;
                self.update_success = false;
                self.loading = true;
            }
            PortfolioAction::WritePending => {
                self.error_message = None;
                self.update_success = false;
                self.updating = true;
            }
            PortfolioAction::Failed(message) => {
                self.loading = false;
                self.updating = false;
                self.update_success = false;
                self.error_message = Some(message);
            }
            PortfolioAction::ListLoaded { page, mode } => {
                self.loading = false;
                self.links = page.links;
                self.total_items = page.total_items;
                match mode {
                    FetchMode::Replace => self.entities = page.items,
                    FetchMode::Append => self.entities.extend(page.items),
                }
            }
            PortfolioAction::EntityLoaded(entity) => {
                self.loading = false;
                self.entity = entity;
            }
            PortfolioAction::EntitySaved(entity) => {
                self.updating = false;
                self.update_success = true;
                self.entity = entity;
            }
            PortfolioAction::EntityDeleted(id) => {
                self.updating = false;
                self.update_success = true;
                self.entity = Portfolio::default();
                self.entities.retain(|e| e.id != Some(id));
            }
        }
    }

    /// The list finished loading and came back empty
    pub fn is_empty_result(&self) -> bool {
        self.entities.is_empty() && !self.loading
    }
}

/// Somewhere a [`PortfolioState`] lives.
///
/// The views hold it in an `RwSignal`; tests use a plain `RefCell`.
pub trait StateSlice {
    fn dispatch(&self, action: PortfolioAction);
    fn snapshot(&self) -> PortfolioState;
}

impl StateSlice for RwSignal<PortfolioState> {
    fn dispatch(&self, action: PortfolioAction) {
        self.update(|state| state.apply(action));
    }

    fn snapshot(&self) -> PortfolioState {
        self.get_untracked()
    }
}

impl StateSlice for RefCell<PortfolioState> {
    fn dispatch(&self, action: PortfolioAction) {
        self.borrow_mut().apply(action);
    }

    fn snapshot(&self) -> PortfolioState {
        self.borrow().clone()
    }
}

/// Reacts to `update_success` only for an operation its owner started.
///
/// Armed when the owner issues its request. A success flag that was already
/// up at that moment belongs to somebody else and is skipped until it has been
/// seen cleared. Fires once, then disarms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuccessLatch {
    armed: bool,
    seen_clear: bool,
}

impl SuccessLatch {
    pub fn arm(&mut self, current_success: bool) {
        self.armed = true;
        self.seen_clear = !current_success;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed the latest flag value; true means "our operation succeeded"
    pub fn observe(&mut self, update_success: bool) -> bool {
        if !self.armed {
            return false;
        }
        if !update_success {
            self.seen_clear = true;
            return false;
        }
        if self.seen_clear {
            self.armed = false;
            return true;
        }
        false
    }
}
