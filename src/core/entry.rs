// This module groups the time entry domain components.
//
// Structure
// - model.rs: entry data model and its wire shape
// - reduce.rs: pure per-entry state transitions and elapsed time accounting

pub mod model;
pub mod reduce;
