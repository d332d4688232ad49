use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Char('q')) || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Main => {
            if matches!(key.code, KeyCode::Enter) {
                app.enter_intermediate();
            }
        }
        Screen::Intermediate => match key.code {
            KeyCode::Enter => app.open_carousel(),
            KeyCode::Esc => app.back_to_main(),
            _ => {}
        },
        Screen::Carousel => match key.code {
            KeyCode::Esc => app.dismiss_carousel(),
            KeyCode::Char(' ') => app.toggle_pause(),
            // Story taps: right edge completes the segment, left edge
            // rewinds it.
            KeyCode::Right => app.skip_to_next(),
            KeyCode::Left => app.rewind_to_previous(),
            // Swipe navigation: cyclic, independent of the timer.
            KeyCode::Tab => app.next_slide(),
            KeyCode::BackTab => app.previous_slide(),
            // Page control: digits address slides directly.
            KeyCode::Char(digit @ '1'..='9') => {
                app.jump_to_slide(digit as usize - '1' as usize);
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, wanted: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c == wanted)
}
