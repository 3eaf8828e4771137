//! Keyboard and mouse handling and the interactive loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crossterm::style::{Color, Stylize};

use crate::controller::{InteractionController, SelectAction};
use crate::events::SelectEvents;
use crate::models::SelectOption;
use crate::ui::theme::colors;

use super::render::{render, render_help_bar, render_status_bar};

/// Convert a keyboard event to a SelectAction.
///
/// While `searching`, printable characters feed the search box instead of
/// acting as shortcuts.
pub fn key_to_action(key: KeyEvent, searching: bool) -> Option<SelectAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(SelectAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(SelectAction::Up),
        KeyCode::Down => Some(SelectAction::Down),
        KeyCode::Right => Some(SelectAction::Expand),
        KeyCode::Left => Some(SelectAction::Collapse),
        KeyCode::Tab => Some(SelectAction::Activate),
        KeyCode::Enter => Some(SelectAction::Confirm),
        KeyCode::Esc => Some(SelectAction::Dismiss),
        KeyCode::Char(' ') => Some(SelectAction::Toggle),
        KeyCode::Backspace if searching => Some(SelectAction::SearchBackspace),
        KeyCode::Char(c) if searching => Some(SelectAction::SearchInput(c)),
        KeyCode::Char('k') => Some(SelectAction::Up),
        KeyCode::Char('j') => Some(SelectAction::Down),
        KeyCode::Char('l') => Some(SelectAction::Expand),
        KeyCode::Char('h') | KeyCode::Backspace => Some(SelectAction::Collapse),
        KeyCode::Char('a') => Some(SelectAction::SelectAll),
        KeyCode::Char('c') => Some(SelectAction::Clear),
        KeyCode::Char('q') => Some(SelectAction::Quit),
        _ => None,
    }
}

/// Where a left click landed relative to the drawn control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The collapsed field line
    Field,
    /// A dropdown row, by index into the visible rows
    Row(usize),
    /// Inside the control but on no actionable line
    Inside,
    /// Anywhere below the control
    Outside,
}

/// Map a mouse event at screen row `y` onto the control drawn from row 0
pub fn classify_click<E: SelectEvents>(
    controller: &InteractionController<E>,
    mouse: MouseEvent,
) -> Option<ClickTarget> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let y = mouse.row as usize;
    if y == 0 {
        return Some(ClickTarget::Field);
    }
    if !controller.is_open() {
        return Some(ClickTarget::Outside);
    }
    let search_lines = usize::from(controller.props().show_search);
    let first_row = 1 + search_lines;
    let shown = controller.window().len();
    if y < first_row {
        Some(ClickTarget::Inside)
    } else if y < first_row + shown {
        Some(ClickTarget::Row(controller.scroll_offset() + y - first_row))
    } else {
        Some(ClickTarget::Outside)
    }
}

/// Apply a click; returns true when the display changed
pub fn apply_click<E: SelectEvents>(
    controller: &mut InteractionController<E>,
    target: ClickTarget,
) -> bool {
    match target {
        ClickTarget::Field => controller.activate(),
        ClickTarget::Row(index) => {
            controller.set_cursor(index);
            controller.handle_action(SelectAction::Toggle);
            true
        }
        ClickTarget::Inside => false,
        ClickTarget::Outside => controller.outside_click(),
    }
}

/// Apply `color` to `text` when styling is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Run the control interactively.
///
/// Mouse capture stays on for the whole session so a click on the closed
/// field can open it. Whether outside clicks matter is still decided by
/// the controller's attach/detach pairing. `color` gates accent and dim
/// styling. `after_action` runs after every handled event so the owner
/// can feed new data back through `configure`. Returns the selection if
/// confirmed, `None` if quit.
pub fn run_interactive<E: SelectEvents>(
    controller: &mut InteractionController<E>,
    unicode: bool,
    color: bool,
    mut after_action: impl FnMut(&mut InteractionController<E>),
) -> std::io::Result<Option<Vec<SelectOption>>> {
    use crossterm::{
        cursor,
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnableMouseCapture)?;

    let render_ui = |stdout: &mut std::io::Stdout,
                     controller: &InteractionController<E>|
     -> std::io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let rendered = render(controller, unicode);
        for (i, line) in rendered.lines().enumerate() {
            if i > 0 && line.starts_with("> ") {
                write!(stdout, "{}\r\n", paint(line, colors::ACCENT, color))?;
            } else {
                write!(stdout, "{}\r\n", line)?;
            }
        }

        write!(
            stdout,
            "{}\r\n",
            paint(&"─".repeat(63), colors::DIM, color)
        )?;

        let status = render_status_bar(controller.selection().len(), controller.tree().len(), unicode);
        for line in status.lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;

        for line in render_help_bar(controller.props().show_search).lines() {
            write!(stdout, "{}\r\n", paint(line, colors::DIM, color))?;
        }

        stdout.flush()
    };

    execute!(stdout, cursor::Hide)?;
    render_ui(&mut stdout, controller)?;

    let result = loop {
        let handled = match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let searching = controller.is_open() && controller.props().show_search;
                match key_to_action(key, searching) {
                    Some(SelectAction::Confirm) => break Some(controller.selection().to_vec()),
                    Some(SelectAction::Quit) => break None,
                    Some(action) => {
                        if controller.handle_action(action) {
                            break None;
                        }
                        true
                    }
                    None => false,
                }
            }
            Event::Mouse(mouse) => match classify_click(controller, mouse) {
                Some(target) => apply_click(controller, target),
                None => false,
            },
            Event::Resize(_, _) => true,
            _ => false,
        };

        if handled {
            after_action(controller);
            render_ui(&mut stdout, controller)?;
        }
    };

    // Release the logical listener before dropping capture
    controller.close();
    execute!(
        stdout,
        DisableMouseCapture,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    Ok(result)
}
