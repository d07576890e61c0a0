//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to tree actions and runs the
//! interactive terminal loop.

use std::io::{self, Write};

use crossterm::event::KeyEvent;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

use super::menu::{TreeAction, TreeMenu};
use super::render::RenderStyle;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree menu interactively.
///
/// Returns `true` if the user confirmed, `false` if they quit.
pub fn run_interactive(menu: &mut TreeMenu<'_>, style: RenderStyle, title: &str) -> io::Result<bool> {
    use crossterm::{cursor, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut stdout, menu, &style, title);

    // Restore the terminal even when the loop failed
    let restored = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)
        .and_then(|_| terminal::disable_raw_mode());

    let confirmed = result?;
    restored?;
    Ok(confirmed)
}

fn event_loop(
    stdout: &mut io::Stdout,
    menu: &mut TreeMenu<'_>,
    style: &RenderStyle,
    title: &str,
) -> io::Result<bool> {
    use crossterm::event::{self, Event, KeyEventKind};

    render_ui(stdout, menu, style, title)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_to_action(key) {
            Some(TreeAction::Confirm) => return Ok(true),
            Some(TreeAction::Quit) => return Ok(false),
            Some(action) => {
                menu.handle_action(action);
                render_ui(stdout, menu, style, title)?;
            }
            None => {}
        }
    }
}

fn render_ui(
    stdout: &mut io::Stdout,
    menu: &TreeMenu<'_>,
    style: &RenderStyle,
    title: &str,
) -> io::Result<()> {
    use crossterm::{
        cursor, queue,
        terminal::{self, ClearType},
    };

    queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    // Raw mode needs explicit carriage returns
    let mut line = |text: &str| write!(stdout, "{}\r\n", text);

    line(&ColoredText::plain(title).bold().render(style.color))?;
    line("")?;

    for row in menu.render(style).lines() {
        line(row)?;
    }

    let separator = if style.unicode {
        icons::SEPARATOR
    } else {
        icons_ascii::SEPARATOR
    };
    line(&separator.repeat(63))?;

    for row in menu.render_status_bar(style).lines() {
        line(row)?;
    }
    line("")?;

    for row in menu.render_help_bar(style).lines() {
        line(row)?;
    }

    stdout.flush()
}
