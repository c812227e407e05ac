//! Dashboard chrome state (active tab, open drawer, demo banner).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the wallet and chat models
//! so navigation can evolve independently of ledger data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs in the bottom navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Home,
    Chat,
    History,
    Profile,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Home, Self::Chat, Self::History, Self::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Chat => "Chat",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Chat => "💬",
            Self::History => "🕘",
            Self::Profile => "👤",
        }
    }
}

/// Bottom-sheet flows. At most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drawer {
    Send,
    Deposit,
    Receive,
}

/// UI state for the dashboard page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub tab: DashboardTab,
    pub drawer: Option<Drawer>,
    pub demo_banner_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tab: DashboardTab::Home, drawer: None, demo_banner_expanded: true }
    }
}

impl UiState {
    /// Initial state for `/app?start=<value>` links from the welcome page.
    pub fn from_start(start: Option<&str>) -> Self {
        let mut state = Self::default();
        match start {
            Some("chat") => state.tab = DashboardTab::Chat,
            Some("send") => state.drawer = Some(Drawer::Send),
            Some("deposit") => state.drawer = Some(Drawer::Deposit),
            Some("receive") => state.drawer = Some(Drawer::Receive),
            _ => {}
        }
        state
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    /// Opening a drawer replaces any drawer already open.
    pub fn open(&mut self, drawer: Drawer) {
        self.drawer = Some(drawer);
    }

    pub fn close_drawer(&mut self) {
        self.drawer = None;
    }

    pub fn is_open(&self, drawer: Drawer) -> bool {
        self.drawer == Some(drawer)
    }

    /// The demo banner would cover the chat input, so it hides on that tab.
    pub fn shows_demo_banner(&self) -> bool {
        self.tab != DashboardTab::Chat
    }
}
