use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use swatchr::color::ColorFormat;

use super::centered_rect;
use super::theme::Theme;
use crate::app::{App, SettingsField, SettingsPopup};
use crate::settings::{ThemeMode, ViewMode};

pub fn render_settings_popup(frame: &mut Frame, popup: &SettingsPopup, app: &App, theme: &Theme) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let theme_options = ThemeMode::ALL
        .iter()
        .map(|mode| (mode.label(), *mode == app.settings.theme))
        .collect::<Vec<_>>();
    let view_options = [ViewMode::Grid, ViewMode::Carousel]
        .iter()
        .map(|mode| (mode.label(), *mode == app.view_mode))
        .collect::<Vec<_>>();
    let format_options = ColorFormat::ALL
        .iter()
        .map(|format| (format.example_label(), *format == app.settings.color_format))
        .collect::<Vec<_>>();

    let mut lines = vec![
        Line::from(Span::styled(
            "Settings",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (field, label, options) in [
        (SettingsField::Theme, "Theme", theme_options),
        (SettingsField::View, "View", view_options),
        (SettingsField::Format, "Color format", format_options),
    ] {
        lines.extend(option_lines(label, popup.field == field, &options, theme));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Up/Down: choose setting. Left/Right/Enter: change. Esc: close.",
        Style::default().fg(theme.dim()),
    )));

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Settings ")
                .style(Style::default().fg(theme.secondary()).bg(theme.background())),
        );
    frame.render_widget(popup_widget, area);
}

fn option_lines(
    label: &str,
    focused: bool,
    options: &[(&'static str, bool)],
    theme: &Theme,
) -> Vec<Line<'static>> {
    let (marker, label_style) = if focused {
        (
            "> ",
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(theme.dim()))
    };

    let mut spans = vec![Span::raw("    ")];
    for (option, selected) in options {
        let style = if *selected {
            Style::default()
                .fg(theme.background())
                .bg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };
        spans.push(Span::styled(format!(" {option} "), style));
        spans.push(Span::raw(" "));
    }

    vec![
        Line::from(Span::styled(format!("{marker}{label}"), label_style)),
        Line::from(spans),
    ]
}
