// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - The binary in src/shell/main.rs and the integration tests import from this root.

pub mod core {
    pub mod collection;
    pub mod entry;
    pub mod ports;
}

pub mod runtime {
    pub mod autosave;
    pub mod display_timer;
    pub mod store;
}

pub mod adapters {
    pub mod analytics;
    pub mod file_system;
    pub mod in_memory;
    pub mod system;
}
