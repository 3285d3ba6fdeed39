//! Model-View-Intent primitives for the catalog UI.
//!
//! ```text
//! key / fetch result ──→ Intent ──→ Reducer ──→ State ──→ draw
//!        ↑                                                 │
//!        └─────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are the only place UI state changes, which keeps the filter
//! pipeline testable without a terminal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
