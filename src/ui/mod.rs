mod help;
mod helpers;
mod palettes;
mod settings;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use swatchr::color::resolve_color;

use crate::app::{App, FocusMode};
pub use helpers::TextTone;
use helpers::hex_to_color;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::new(app.settings.theme);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().fg(theme.text()).bg(theme.background())),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::White).bg(theme.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette generator",
            Style::default()
                .fg(theme.secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.secondary())),
        );
    frame.render_widget(header, layout[0]);

    render_input(frame, layout[1], app, &theme);

    if app.show_help {
        let help = Paragraph::new(help::build_help_text(&theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Help ")
                .style(Style::default().fg(theme.secondary())),
        );
        frame.render_widget(help, layout[2]);
    } else {
        palettes::render_palettes(frame, layout[2], app, &theme);
    }

    let footer = Paragraph::new(Text::from(footer_lines(app, &theme)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.secondary())),
        );
    frame.render_widget(footer, layout[3]);

    if let Some(popup) = &app.settings_popup {
        settings::render_settings_popup(frame, popup, app, &theme);
    }
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let focused = app.focus == FocusMode::Input;
    let resolved = resolve_color(&app.input);
    let preview = resolved
        .as_deref()
        .and_then(hex_to_color)
        .unwrap_or(Color::White);

    let mut spans = vec![
        Span::styled(" ████ ", Style::default().fg(preview)),
        Span::raw(" "),
    ];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(
            "HEX code or color name...",
            Style::default().fg(theme.dim()),
        ));
    } else {
        spans.push(Span::styled(
            app.input.as_str(),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        ));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.highlight())));
    }
    match resolved {
        Some(hex) if hex != app.input => spans.push(Span::styled(
            format!("  → {hex}"),
            Style::default().fg(theme.dim()),
        )),
        None if !app.input.is_empty() => spans.push(Span::styled(
            "  not a color yet",
            Style::default().fg(theme.warn()),
        )),
        _ => {}
    }

    let border_style = if focused {
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.secondary())
    };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Color "),
    );
    frame.render_widget(input, area);
}

fn footer_lines<'a>(app: &'a App, theme: &Theme) -> Vec<Line<'a>> {
    let first = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.text.as_str(),
            Style::default()
                .fg(theme.success())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::styled("Base ", Style::default().fg(theme.dim())),
            Span::styled(
                app.base_color.as_str(),
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   format {}   view {}",
                    app.settings.color_format,
                    app.view_mode.label()
                ),
                Style::default().fg(theme.dim()),
            ),
        ]),
    };

    let keybinds = if app.show_help {
        "F1/?/Esc: Close help"
    } else if app.settings_popup.is_some() {
        "Up/Down: Setting  Left/Right: Change  Esc: Close"
    } else {
        match app.focus {
            FocusMode::Input => "Type a color  Tab: Palettes  Ctrl+R: Random  F1: Help  F2: Settings  Ctrl+C: Quit",
            FocusMode::Palettes => {
                "Arrows: Select  Enter: Copy  r: Random  s: Settings  Tab: Input  ?: Help  q: Quit"
            }
        }
    };

    vec![
        first,
        Line::from(Span::styled(keybinds, Style::default().fg(theme.dim()))),
    ]
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::{AppEvent, Clipboard};
    use crate::db;
    use crate::settings::{Settings, ViewMode};

    struct NoClipboard;

    impl Clipboard for NoClipboard {
        fn set_contents(&mut self, _text: String) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn app(view_mode: ViewMode) -> App {
        App::new(
            db::init_in_memory().unwrap(),
            Settings::default(),
            view_mode,
            Box::new(NoClipboard),
        )
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_grid_shows_every_palette() {
        let screen = render(&app(ViewMode::Grid), 160, 60);
        assert!(screen.contains("Swatchr"));
        assert!(screen.contains("#3b82f6"));
        for name in ["Complementary", "Analogous", "Triadic", "Tetradic", "Shades", "Tints"] {
            assert!(screen.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_carousel_shows_one_palette() {
        let mut app = app(ViewMode::Carousel);
        app.update(AppEvent::Key(crossterm::event::KeyEvent::from(
            crossterm::event::KeyCode::Tab,
        )));
        app.update(AppEvent::Key(crossterm::event::KeyEvent::from(
            crossterm::event::KeyCode::Down,
        )));
        let screen = render(&app, 90, 30);
        assert!(screen.contains("Analogous"));
        assert!(!screen.contains("Tetradic"));
        assert!(screen.contains("●"));
    }

    #[test]
    fn test_settings_popup_and_help_render() {
        let mut app = app(ViewMode::Grid);
        app.show_help = true;
        assert!(render(&app, 120, 50).contains("Key bindings"));

        app.show_help = false;
        app.settings_popup = Some(crate::app::SettingsPopup {
            field: crate::app::SettingsField::Format,
        });
        let screen = render(&app, 120, 50);
        assert!(screen.contains("Color format"));
        assert!(screen.contains("HEX (#123456)"));
    }
}
