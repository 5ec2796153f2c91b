//! Model-View-Intent (MVI) primitives.
//!
//! The search screen follows a unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what the view renders
//! - **Intent**: Signals produced by the user or by a finished request
//! - **Reducer**: Pure function that computes the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
