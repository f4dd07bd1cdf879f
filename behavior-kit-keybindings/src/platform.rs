//! Platform-specific modifier resolution.

/// Resolve the `Shortcut` modifier for the current platform.
///
/// Returns `(expected_ctrl, expected_meta)` given a `shortcut` flag and the
/// raw `ctrl`/`meta` requirements from a chord.
///
/// - macOS: `Shortcut` maps to Meta (Cmd key).
/// - All other platforms: `Shortcut` maps to Ctrl.
#[inline]
pub fn resolve_shortcut(shortcut: bool, ctrl: bool, meta: bool) -> (bool, bool) {
    if shortcut {
        #[cfg(target_os = "macos")]
        {
            (ctrl, true)
        }
        #[cfg(not(target_os = "macos"))]
        {
            (true, meta)
        }
    } else {
        (ctrl, meta)
    }
}
