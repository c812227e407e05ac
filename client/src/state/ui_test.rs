use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_home_without_drawer() {
    let state = UiState::default();
    assert_eq!(state.tab, DashboardTab::Home);
    assert_eq!(state.drawer, None);
    assert!(state.demo_banner_expanded);
}

// =============================================================
// Entry links
// =============================================================

#[test]
fn from_start_chat_selects_chat_tab() {
    let state = UiState::from_start(Some("chat"));
    assert_eq!(state.tab, DashboardTab::Chat);
    assert_eq!(state.drawer, None);
}

#[test]
fn from_start_feature_opens_drawer_over_home() {
    for (start, drawer) in [("send", Drawer::Send), ("deposit", Drawer::Deposit), ("receive", Drawer::Receive)] {
        let state = UiState::from_start(Some(start));
        assert_eq!(state.tab, DashboardTab::Home);
        assert_eq!(state.drawer, Some(drawer), "start {start}");
    }
}

#[test]
fn from_start_unknown_lands_on_home() {
    assert_eq!(UiState::from_start(Some("history")), UiState::default());
    assert_eq!(UiState::from_start(None), UiState::default());
}

// =============================================================
// Drawers and banner
// =============================================================

#[test]
fn only_one_drawer_open_at_a_time() {
    let mut state = UiState::default();
    state.open(Drawer::Send);
    state.open(Drawer::Deposit);
    assert!(state.is_open(Drawer::Deposit));
    assert!(!state.is_open(Drawer::Send));
    state.close_drawer();
    assert_eq!(state.drawer, None);
}

#[test]
fn demo_banner_hidden_on_chat_tab_only() {
    let mut state = UiState::default();
    for tab in DashboardTab::ALL {
        state.select_tab(tab);
        assert_eq!(state.shows_demo_banner(), tab != DashboardTab::Chat);
    }
}

#[test]
fn tab_labels_follow_navigation_order() {
    let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Home", "Chat", "History", "Profile"]);
}
