//! Sidebar vs inline detail display.

use retro_core::entities::InsightRecord;
use retro_core::enums::DisplayMode;

#[derive(Debug, Default)]
pub struct DisplayModeController {
    mode: DisplayMode,
    selected: Option<InsightRecord>,
}

impl DisplayModeController {
    #[must_use]
    pub const fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            selected: None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The insight open in the sidebar. Always `None` in inline mode.
    #[must_use]
    pub const fn selected(&self) -> Option<&InsightRecord> {
        self.selected.as_ref()
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&mut self) -> DisplayMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode == DisplayMode::Inline {
            self.selected = None;
        }
        self.mode = mode;
    }

    /// Open `insight` in the sidebar. Ignored (returns `false`) in inline mode.
    pub fn select_for_sidebar(&mut self, insight: InsightRecord) -> bool {
        if self.mode != DisplayMode::Sidebar {
            tracing::debug!("sidebar selection ignored in inline mode");
            return false;
        }
        self.selected = Some(insight);
        true
    }

    pub fn close_sidebar(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight() -> InsightRecord {
        InsightRecord {
            id: Some("x".into()),
            tags: vec!["A".into()],
            ..InsightRecord::default()
        }
    }

    #[test]
    fn inline_clears_selection() {
        let mut display = DisplayModeController::default();
        assert!(display.select_for_sidebar(insight()));
        assert_eq!(display.toggle(), DisplayMode::Inline);
        assert!(display.selected().is_none());
    }

    #[test]
    fn back_to_sidebar_does_not_select() {
        let mut display = DisplayModeController::new(DisplayMode::Inline);
        assert_eq!(display.toggle(), DisplayMode::Sidebar);
        assert!(display.selected().is_none());
    }

    #[test]
    fn selection_ignored_inline() {
        let mut display = DisplayModeController::new(DisplayMode::Inline);
        assert!(!display.select_for_sidebar(insight()));
        assert!(display.selected().is_none());
    }

    #[test]
    fn close_is_idempotent() {
        let mut display = DisplayModeController::default();
        display.select_for_sidebar(insight());
        display.close_sidebar();
        display.close_sidebar();
        assert!(display.selected().is_none());
        assert_eq!(display.mode(), DisplayMode::Sidebar);
    }
}
