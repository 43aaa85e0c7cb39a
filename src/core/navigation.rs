//! Dashboard view state
//!
//! The current view and the selected driver live in one value that only
//! changes through [`DashboardState::apply`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Monitor,
    DriverDetail,
    History,
    Suggestions,
}

/// User intents that move the dashboard between views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "driverId", rename_all = "snake_case")]
pub enum Action {
    SelectDriver(String),
    BackToMonitor,
    ViewHistory,
    ViewSuggestions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub view: View,
    #[serde(rename = "selectedDriver")]
    pub selected_driver: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            view: View::Monitor,
            selected_driver: None,
        }
    }
}

impl DashboardState {
    /// Produce the state that follows `action`
    pub fn apply(&self, action: Action) -> DashboardState {
        match action {
            Action::SelectDriver(driver_id) => DashboardState {
                view: View::DriverDetail,
                selected_driver: Some(driver_id),
            },
            Action::BackToMonitor => DashboardState::default(),
            Action::ViewHistory => DashboardState {
                view: View::History,
                selected_driver: self.selected_driver.clone(),
            },
            Action::ViewSuggestions => DashboardState {
                view: View::Suggestions,
                selected_driver: self.selected_driver.clone(),
            },
        }
    }

    /// View to render; a detail view without a selection shows the monitor
    pub fn resolved_view(&self) -> View {
        match (self.view, &self.selected_driver) {
            (View::DriverDetail, None) => View::Monitor,
            (view, _) => view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_back() {
        let state = DashboardState::default().apply(Action::SelectDriver("d3".to_string()));
        assert_eq!(state.view, View::DriverDetail);
        assert_eq!(state.selected_driver.as_deref(), Some("d3"));

        let state = state.apply(Action::BackToMonitor);
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn test_history_keeps_selection() {
        let state = DashboardState::default()
            .apply(Action::SelectDriver("d1".to_string()))
            .apply(Action::ViewHistory);

        assert_eq!(state.view, View::History);
        assert_eq!(state.selected_driver.as_deref(), Some("d1"));
    }

    #[test]
    fn test_detail_without_selection_resolves_to_monitor() {
        let state = DashboardState {
            view: View::DriverDetail,
            selected_driver: None,
        };
        assert_eq!(state.resolved_view(), View::Monitor);

        let suggestions = state.apply(Action::ViewSuggestions);
        assert_eq!(suggestions.resolved_view(), View::Suggestions);
    }

    #[test]
    fn test_action_wire_format() {
        let action: Action =
            serde_json::from_str(r#"{"type":"select_driver","driverId":"d9"}"#).unwrap();
        assert_eq!(action, Action::SelectDriver("d9".to_string()));

        let action: Action = serde_json::from_str(r#"{"type":"view_history"}"#).unwrap();
        assert_eq!(action, Action::ViewHistory);
    }
}
