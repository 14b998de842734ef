//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! effect (I/O) ──→ Intent ──→ Reducer ──→ State ──→ view
//! ```
//!
//! Reducers are pure. All storage and network access happens in
//! [`crate::ui::app::App`], which turns results into intents.

/// Screen state. Cloneable, comparable and self-contained.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or the outcome of an effect.
pub trait Intent: Send + 'static {}

/// Pure state transition: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
