//! Panic hook that restores the terminal before the default hook runs.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that leaves TUI mode before printing the panic.
///
/// Call early in `main()`, before entering TUI mode, so a panic never
/// leaves the user's terminal in raw mode.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
