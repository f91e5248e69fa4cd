use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Sequence items rendered for a sequence cell while image markup is
/// embedded: enough to read as "a sequence lives here" without the
/// serialized vector competing with the chart for cell space.
pub(crate) const SEQ_ITEMS_WHILE_EMBEDDED: usize = 2;

/// Table display limits, owned by the caller instead of process-global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Maximum rendered width of one cell in characters; `None` is unbounded.
    pub max_col_width: Option<usize>,
    /// Maximum sequence items rendered before eliding; `None` is unbounded.
    pub max_seq_items: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_col_width: Some(50),
            max_seq_items: Some(100),
        }
    }
}

/// Scoped widen/restore bracket around the display limits.
///
/// Construction widens the cell width to unbounded and caps rendered
/// sequence items so embedded image markup is never truncated or elided;
/// dropping restores the previous limits on every exit path, including
/// panics and early returns.
#[derive(Debug)]
pub struct WidenGuard<'a> {
    settings: &'a mut DisplaySettings,
    saved: DisplaySettings,
}

impl<'a> WidenGuard<'a> {
    #[must_use]
    pub fn new(settings: &'a mut DisplaySettings) -> Self {
        let saved = *settings;
        settings.max_col_width = None;
        settings.max_seq_items = Some(SEQ_ITEMS_WHILE_EMBEDDED);
        Self { settings, saved }
    }
}

impl Deref for WidenGuard<'_> {
    type Target = DisplaySettings;

    fn deref(&self) -> &Self::Target {
        self.settings
    }
}

impl Drop for WidenGuard<'_> {
    fn drop(&mut self) {
        *self.settings = self.saved;
    }
}
