use crate::app::App;
use crate::model::types::Screen;
use ratatui::Frame;

use super::{browser, menu, notice, prompt, splash, toast};

/// Main render function - dispatches to the screen currently shown
pub fn render(f: &mut Frame, app: &mut App) {
    match app.model.ui.screen {
        Screen::Splash => splash::render_splash(f),
        Screen::Menu => menu::render_menu(f),
        Screen::Browse(purpose) => browser::render_browser(f, app, purpose),
        Screen::NameInput => prompt::render_name_prompt(f, &app.model.ui.input),
        Screen::Notice => notice::render_notice(f, app.model.ui.notice.as_deref().unwrap_or("")),
    }

    if let Some((message, _)) = &app.model.ui.toast {
        let area = f.area();
        toast::render_toast(f, area, message);
    }
}
