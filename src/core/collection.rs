// This module groups the collection level components.
//
// Structure
// - state.rs: the entry collection and its ordering policy
// - actions.rs: everything the outside world can ask the engine to do
// - effects.rs: follow-up work the engine requests declaratively
// - reduce.rs: the collection engine folding actions into state plus effects

pub mod actions;
pub mod effects;
pub mod reduce;
pub mod state;
