//! Package search feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Search state record
//! - `intent.rs` - Search signals and root store actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::{Action, SearchSignal};
pub use reducer::SearchReducer;
pub use state::SearchState;
