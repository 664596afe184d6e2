use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::navigation::{Screen, Tab};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryDetail, CountryList, HelpBar, Placeholder, TabBar, TitleBar,
};

/// Splits the frame into title, tab strip, content and help areas.
fn layout_areas(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, tabs_area, content_area, help_area] = layout_areas(frame.area());

    TitleBar::new(app.status_message.clone(), app.fetched_at).render(frame, title_area);
    TabBar::new(app.shell.active_tab(), !app.shell.at_root()).render(frame, tabs_area);

    let screen = app.shell.current_screen();
    match &screen {
        Screen::Tabs => draw_tab_content(frame, content_area, app, tui, spinner_frame),
        Screen::CountryDetail(key) => {
            CountryDetail::new(app.home.country_by_key(key)).render(frame, content_area)
        }
    }

    HelpBar::new(screen, app.shell.active_tab()).render(frame, help_area);
}

fn draw_tab_content(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    match app.shell.active_tab() {
        Tab::Home => CountryList::new(&app.home, app.selected, spinner_frame, &mut tui.country_list)
            .render(frame, area),
        other => Placeholder::new(other).render(frame, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::countries::Country;
    use crate::test_support::{buffer_lines, france, loaded_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> Vec<String> {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_loading_home() {
        let app = App::new(Tab::Home);
        let lines = draw(&app);
        assert!(lines[0].starts_with("Atlas | Loading countries..."));
        assert!(lines[1].contains("Home"));
        assert!(lines.iter().any(|l| l.contains("Loading countries...")));
    }

    #[test]
    fn test_draw_loaded_home() {
        let app = loaded_app(vec![france()]);
        let lines = draw(&app);
        assert!(lines[0].contains("1 country"));
        assert!(lines[2].contains("France"));
        assert!(lines[2].contains("Paris"));
    }

    #[test]
    fn test_draw_placeholder_tab() {
        let mut app = loaded_app(vec![france()]);
        update(&mut app, Action::SelectTab(Tab::Tourist));
        let lines = draw(&app);
        assert!(lines.iter().any(|l| l.contains("Tourist Screen")));
        assert!(lines.iter().all(|l| !l.contains("Paris")));
    }

    #[test]
    fn test_draw_detail_screen() {
        let mut app = loaded_app(vec![france()]);
        update(&mut app, Action::OpenDetail);
        let lines = draw(&app);
        assert!(lines.iter().any(|l| l.contains("French Republic")));
        assert!(lines.last().unwrap().starts_with("Esc back"));
    }

    #[test]
    fn test_detail_screen_follows_row_key() {
        let twin = Country::new("Second France", "French Republic", vec![], "c.png", None);
        let mut app = loaded_app(vec![france(), twin]);
        update(&mut app, Action::SelectNext);
        update(&mut app, Action::OpenDetail);
        let lines = draw(&app);
        assert!(lines.iter().any(|l| l.contains("Second France")));
        assert!(lines.iter().all(|l| !l.contains("Paris")));
    }

    #[test]
    fn test_layout_areas_reserve_single_lines() {
        let [title, tabs, content, help] = layout_areas(Rect::new(0, 0, 80, 24));
        assert_eq!((title.height, tabs.height, help.height), (1, 1, 1));
        assert_eq!(content.height, 21);
        assert_eq!(help.y, 23);
    }
}
