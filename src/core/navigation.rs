//! # Navigation
//!
//! The app shell: a tab container (Home, Profile, Tourist, Hotel, Settings)
//! wrapped by a stack. The root of the stack is always the tab container;
//! detail screens are pushed on top of it and popped with Back.
//!
//! ```text
//! stack: [Tabs] ──push_detail(key)──▶ [Tabs, CountryDetail(key)]
//!           ▲                                 │
//!           └──────────────pop()──────────────┘
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Profile,
    Tourist,
    Hotel,
    Settings,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Profile, Tab::Tourist, Tab::Hotel, Tab::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Profile => "Profile",
            Tab::Tourist => "Tourist",
            Tab::Hotel => "Hotel",
            Tab::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Cycles forward, wrapping from Settings to Home.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycles backward, wrapping from Home to Settings.
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A screen on the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The tab container. Always at the bottom of the stack.
    Tabs,
    /// Details for the Home list row with this key.
    CountryDetail(String),
}

#[derive(Debug, Clone)]
pub struct AppShell {
    active_tab: Tab,
    stack: Vec<Screen>,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}

impl AppShell {
    pub fn new(initial_tab: Tab) -> Self {
        Self {
            active_tab: initial_tab,
            stack: vec![Screen::Tabs],
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn current_screen(&self) -> Screen {
        self.stack.last().cloned().unwrap_or(Screen::Tabs)
    }

    pub fn at_root(&self) -> bool {
        self.stack.len() <= 1
    }

    /// Switches tabs. Ignored while a detail screen covers the tabs.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.at_root() {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn next_tab(&mut self) -> bool {
        self.select_tab(self.active_tab.next())
    }

    pub fn prev_tab(&mut self) -> bool {
        self.select_tab(self.active_tab.prev())
    }

    pub fn push_detail(&mut self, key: String) {
        self.stack.push(Screen::CountryDetail(key));
    }

    /// Pops the top screen. The tab container is never popped.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.at_root() {
            return None;
        }
        self.stack.pop()
    }

    pub fn pop_to_root(&mut self) {
        self.stack.truncate(1);
    }
}
