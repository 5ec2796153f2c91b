//! Explicit store holding the search state.
//!
//! The store owns the single [`SearchState`] slot. The only way to change it
//! is [`Store::dispatch`], which runs [`SearchReducer`] and then notifies
//! every subscriber with the new state.

use crate::ui::mvi::Reducer;
use crate::ui::search::{Action, SearchReducer, SearchState};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&SearchState)>;

pub struct Store {
    state: SearchState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store and run the bootstrap `Init` action.
    pub fn new() -> Self {
        let mut store = Self {
            state: SearchState::default(),
            listeners: Vec::new(),
            next_id: 0,
        };
        store.dispatch(Action::Init);
        store
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Typed selector over the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&SearchState) -> T) -> T {
        selector(&self.state)
    }

    /// Reduce `action` into the state and notify subscribers.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        self.state = SearchReducer::reduce(std::mem::take(&mut self.state), action);
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SearchState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}
