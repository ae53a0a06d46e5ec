//! UI rendering for the TUI.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::pomodoro::{render_progress_bar, ScreenState, SessionKind};

const TITLE: &str = "Pomodoro Timer";
const CONTROLS: &str = "[s] Start/Pause  [r] Reset  [q] Quit";
const MENU_HELP: &str = "Use UP/DOWN to select, ENTER to confirm";
const PROMPT_HELP: &str = "Press any key to continue, or 'q' to exit...";

/// Render the timer screen.
pub fn render_timer(frame: &mut Frame<'_>, screen: &ScreenState, bar_width: usize) {
    let accent = match screen.kind {
        SessionKind::Study => Color::Red,
        SessionKind::Break => Color::Green,
    };
    let bar = render_progress_bar(screen.total_seconds, screen.remaining_seconds, bar_width);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Time: "),
            Span::styled(
                screen.clock(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(bar, Style::default().fg(accent))),
        Line::from(Span::styled(CONTROLS, Style::default().fg(Color::DarkGray))),
        Line::default(),
        Line::from(format!("Status: {}", screen.status)),
    ];

    frame.render_widget(Paragraph::new(lines), inset(frame.area()));
}

/// Render a selection menu.
pub fn render_menu(
    frame: &mut Frame<'_>,
    prompt: &str,
    options: &[String],
    selected: usize,
    allow_quit: bool,
) {
    let highlight = Style::default().add_modifier(Modifier::REVERSED);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            prompt,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let quit_row = allow_quit.then_some("Quit");
    for (i, label) in options.iter().map(String::as_str).chain(quit_row).enumerate() {
        let style = if i == selected {
            highlight
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![Span::raw("  "), Span::styled(label, style)]));
    }

    lines.push(Line::from(Span::styled(
        MENU_HELP,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inset(frame.area()));
}

/// Render a session transition prompt.
pub fn render_prompt(frame: &mut Frame<'_>, message: &str, detail: &str) {
    let lines = vec![
        Line::default(),
        Line::default(),
        Line::default(),
        Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(detail),
        Line::default(),
        Line::from(Span::styled(PROMPT_HELP, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines), inset(frame.area()));
}

/// Leave a two-column left margin.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2).min(area.right()),
        width: area.width.saturating_sub(2),
        ..area
    }
}
