//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quickdo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quickdo_core::TaskListStore;

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring
    // independently from any UI host.
    println!("quickdo_core version={}", quickdo_core::core_version());

    let mut store = TaskListStore::new();
    if let Err(err) = store.add("Buy milk") {
        eprintln!("smoke add failed: {err}");
        std::process::exit(1);
    }
    println!("quickdo_core smoke tasks={}", store.len());
}
