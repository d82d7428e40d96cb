use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use swatchr::color::{ColorFormat, Palette};

use super::helpers::{TextTone, clamp_text, hex_to_color};
use super::theme::Theme;
use crate::app::{App, FocusMode};
use crate::settings::ViewMode;

pub fn render_palettes(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    if app.palettes.is_empty() {
        let empty = Paragraph::new("Enter a HEX code or color name to generate palettes.")
            .style(Style::default().fg(theme.dim()));
        frame.render_widget(empty, area);
        return;
    }
    match app.view_mode {
        ViewMode::Grid => render_grid(frame, area, app, theme),
        ViewMode::Carousel => render_carousel(frame, area, app, theme),
    }
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let rows = app.palettes.len().div_ceil(2);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    for (row, row_area) in row_areas.iter().enumerate() {
        let columns = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row_area);
        for (column, card_area) in columns.iter().enumerate() {
            let index = row * 2 + column;
            if let Some(palette) = app.palettes.get(index) {
                render_card(frame, *card_area, app, index, palette, theme);
            }
        }
    }
}

fn render_carousel(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let [card_area, dots_area] =
        Layout::vertical([Constraint::Min(4), Constraint::Length(1)]).areas(area);
    let index = app.selected_palette.min(app.palettes.len() - 1);
    render_card(frame, card_area, app, index, &app.palettes[index], theme);

    let mut dots = Vec::new();
    for dot in 0..app.palettes.len() {
        if dot > 0 {
            dots.push(Span::raw(" "));
        }
        if dot == index {
            dots.push(Span::styled(
                "●",
                Style::default()
                    .fg(theme.primary())
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            dots.push(Span::styled("○", Style::default().fg(theme.dim())));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        dots_area,
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    index: usize,
    palette: &Palette,
    theme: &Theme,
) {
    let active = index == app.selected_palette && app.focus == FocusMode::Palettes;
    let border_style = if active {
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim())
    };
    let title_width = area.width.saturating_sub(4) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", clamp_text(&palette.name, title_width.saturating_sub(2))),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || palette.colors.is_empty() {
        return;
    }

    let [description_area, swatches_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            clamp_text(&palette.description, description_area.width as usize),
            Style::default().fg(theme.dim()),
        )),
        description_area,
    );

    let count = palette.colors.len();
    let swatch_areas =
        Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count]).split(swatches_area);
    for (color_index, (hex, swatch_area)) in palette.colors.iter().zip(swatch_areas.iter()).enumerate()
    {
        let focused = active && color_index == app.selected_color;
        render_swatch(frame, *swatch_area, hex, app.settings.color_format, focused);
    }
}

/// A filled block with the color's text along the bottom edge.
fn render_swatch(frame: &mut Frame, area: Rect, hex: &str, format: ColorFormat, focused: bool) {
    let Some(background) = hex_to_color(hex) else {
        return;
    };
    let tone = TextTone::for_background(hex).color();
    let label = format.render(hex).unwrap_or_else(|| hex.to_string());
    let label = if focused {
        format!("▸{label}")
    } else {
        format!(" {label}")
    };
    let mut label_style = Style::default().fg(tone).bg(background);
    if focused {
        label_style = label_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let mut lines = vec![Line::from(""); area.height.saturating_sub(1) as usize];
    lines.push(Line::from(Span::styled(
        clamp_text(&label, area.width as usize),
        label_style,
    )));
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(tone).bg(background)),
        area,
    );
}
