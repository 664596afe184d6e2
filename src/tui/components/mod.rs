//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar with status and last-updated time
//! - `TabBar`: The five tabs, active one highlighted
//! - `Placeholder`: Centered screen name for tabs without content
//! - `CountryDetail`: Full record for one country (stack screen)
//! - `HelpBar`: Key hints for the current screen
//!
//! ### Stateful Components
//!
//! - `CountryList`: Home screen. Borrows persistent `CountryListUiState`
//!   (list offset, viewport height) and writes it back while rendering.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TabBar::new(app.shell.active_tab(), !app.shell.at_root()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! TabBar::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── tab_bar.rs         (Tab strip)
//! ├── country_list.rs    (Home: loading / error / rows)
//! ├── country_detail.rs  (Detail stack screen)
//! ├── placeholder.rs     (Profile, Tourist, Hotel, Settings)
//! └── help_bar.rs        (Key hints)
//! ```

pub mod country_detail;
pub mod country_list;
mod help_bar;
pub mod placeholder;
mod tab_bar;
mod title_bar;

pub use country_detail::CountryDetail;
pub use country_list::{CountryList, CountryListUiState};
pub use help_bar::HelpBar;
pub use placeholder::Placeholder;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
