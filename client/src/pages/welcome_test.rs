use super::*;
use crate::state::ui::{DashboardTab, Drawer, UiState};

#[test]
fn app_link_without_start_is_plain_dashboard() {
    assert_eq!(app_link(None), "/app");
}

#[test]
fn app_link_start_values_round_trip_through_dashboard_entry() {
    let cases = [("deposit", Some(Drawer::Deposit)), ("receive", Some(Drawer::Receive)), ("send", Some(Drawer::Send))];
    for (start, drawer) in cases {
        let link = app_link(Some(start));
        assert_eq!(link, format!("/app?start={start}"));
        let query = link.split_once("start=").map(|(_, value)| value);
        let state = UiState::from_start(query);
        assert_eq!(state.drawer, drawer);
        assert_eq!(state.tab, DashboardTab::Home);
    }
}
