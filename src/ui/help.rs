use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text(theme: &Theme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global", theme));
    lines.extend(section_lines(
        &[
            "Ctrl+C: Quit",
            "Ctrl+R: Random base color",
            "F1: Toggle help",
            "F2: Settings",
        ],
        theme,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Color input", theme));
    lines.extend(section_lines(
        &[
            "Type a HEX code (#3b82f6, #abc) or a color name (red, 赤, sakura)",
            "Backspace: Delete",
            "Tab/Enter/Esc: Go to palettes",
        ],
        theme,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Palettes", theme));
    lines.extend(section_lines(
        &[
            "Up/Down (k/j): Previous/next palette",
            "Left/Right (h/l): Previous/next color",
            "1-6: Jump to palette",
            "Enter/c/y: Copy color in the current format",
            "r: Random base color",
            "s: Settings",
            "Tab/i//: Back to input",
            "?: Toggle help",
            "q: Quit",
        ],
        theme,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Settings", theme));
    lines.extend(section_lines(
        &[
            "Up/Down: Choose setting",
            "Left/Right/Enter: Change value",
            "Esc: Close",
        ],
        theme,
    ));

    Text::from(lines)
}

fn section_title(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str], theme: &Theme) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(theme.text()),
            ))
        })
        .collect()
}
