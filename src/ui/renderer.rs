//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Compose components into one frame buffer
//!
//! [`render_frame`] returns the frame so it can be inspected; [`render`]
//! writes it to stdout for the host.

use crate::app::{AppState, Page};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_frame(state, rows, cols));
}

/// Builds the ANSI-styled frame for the current state without printing it.
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, state.page, &state.theme, rows, cols)
}

/// Chooses the layout for `page` and renders `vm` with it.
fn render_viewmodel(vm: &UIViewModel, page: Page, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();

    if page.is_listing() {
        components::render_listing_mode(&mut out, vm, theme, cols, rows);
    } else {
        components::render_static_mode(&mut out, vm, theme, cols, rows);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::content::{CrudService, FetchResponse};

    fn loaded(page: Page) -> AppState {
        let mut state = AppState::new(CrudService::new("http://cms.local/api", None), page, Theme::default());
        for action in state.set_web_access(true).unwrap() {
            let Action::FetchCollection(request) = action else {
                continue;
            };
            let body = br#"{"items": [
                {"_id": "g1", "gestureName": "Hello", "textTranslation": "Hello",
                 "gestureCategory": "Greetings", "difficultyLevel": "Easy",
                 "gestureDescription": "Open hand salutes away from the forehead"},
                {"_id": "g2", "gestureName": "Thank you", "textTranslation": "Thank you",
                 "gestureCategory": "Courtesy", "difficultyLevel": "Medium"}
            ]}"#;
            state.receive(&request.ticket, &FetchResponse::new(200, body.to_vec()));
        }
        state
    }

    #[test]
    fn listing_frame_has_chrome_rows_and_badges() {
        let state = loaded(Page::Gestures);
        let frame = render_frame(&state, 24, 80);

        assert!(frame.contains("SignBridge"));
        assert!(frame.contains("Showing 2 of 2 gestures"));
        assert!(frame.contains("[Medium]"));
        assert!(frame.contains("\u{1b}[23;1H"));
        assert!(frame.contains("\u{1b}[24;1H"));
        assert!(!frame.contains("\u{1b}[25;1H"));
    }

    #[test]
    fn wide_panes_show_the_detail_panel() {
        let state = loaded(Page::Gestures);

        assert!(render_frame(&state, 24, 120).contains("Open hand salutes"));
        assert!(!render_frame(&state, 24, 80).contains("Open hand salutes"));
    }

    #[test]
    fn store_failure_is_rendered_as_an_error() {
        let mut state = AppState::new(CrudService::new("http://cms.local/api", None), Page::Gestures, Theme::default());
        state.set_web_access(false).unwrap();
        let frame = render_frame(&state, 24, 80);

        assert!(frame.contains("Content store unavailable"));
        assert!(frame.contains(&Theme::fg(&state.theme.colors.error_fg)));
    }

    #[test]
    fn about_page_renders_static_copy() {
        let state = loaded(Page::About);
        let frame = render_frame(&state, 40, 80);

        assert!(frame.contains(crate::ui::copy::ABOUT[0].heading));
        assert!(frame.contains("Tab/1-4: pages"));
    }

    #[test]
    fn tiny_panes_do_not_panic() {
        let state = loaded(Page::Gestures);
        let _ = render_frame(&state, 1, 1);
        let _ = render_frame(&state, 0, 0);
        let _ = render_frame(&loaded(Page::Home), 3, 10);
    }
}
