use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rusqlite::Connection;
use swatchr::color::{self, Palette};

use crate::settings::{Settings, ViewMode};

use super::{AppEvent, Clipboard, FocusMode, SettingsField};

/// How long a status message stays in the footer.
const STATUS_TTL: Duration = Duration::from_secs(2);

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub db: Connection,
    pub settings: Settings,
    pub view_mode: ViewMode,
    pub focus: FocusMode,
    /// Raw text in the color input, possibly not a color yet.
    pub input: String,
    /// Last input that resolved to a color, as `#rrggbb`.
    pub base_color: String,
    /// Palettes for `base_color`, in display order.
    pub palettes: Vec<Palette>,
    pub selected_palette: usize,
    pub selected_color: usize,
    pub show_help: bool,
    pub settings_popup: Option<SettingsPopup>,
    pub status: Option<StatusMessage>,
    clipboard: Box<dyn Clipboard>,
}

#[derive(Clone, Debug)]
pub struct SettingsPopup {
    pub field: SettingsField,
}

#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl App {
    pub fn new(
        db: Connection,
        settings: Settings,
        view_mode: ViewMode,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let base_color = color::DEFAULT_BASE_COLOR.to_string();
        let palettes = color::display_palettes(&base_color);
        Self {
            running: true,
            db,
            settings,
            view_mode,
            focus: FocusMode::Input,
            input: base_color.clone(),
            base_color,
            palettes,
            selected_palette: 0,
            selected_color: 0,
            show_help: false,
            settings_popup: None,
            status: None,
            clipboard,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.expire_status(),
            AppEvent::Key(key) => self.handle_key(key),
        }
    }

    /// Replace the input text, as if the user had typed it.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        if !self.input_changed() {
            self.set_status(format!("'{text}' is not a hex code or known color name"));
        }
    }

    pub fn selected_hex(&self) -> Option<&str> {
        self.palettes
            .get(self.selected_palette)?
            .colors
            .get(self.selected_color)
            .map(String::as_str)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.running = false,
                KeyCode::Char('r') => self.randomize(),
                _ => {}
            }
            return;
        }
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1)
            ) {
                self.show_help = false;
            }
            return;
        }
        if self.settings_popup.is_some() {
            self.handle_settings_key(key.code);
            return;
        }
        match self.focus {
            FocusMode::Input => self.handle_input_key(key.code),
            FocusMode::Palettes => self.handle_palettes_key(key.code),
        }
    }

    fn handle_input_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.input.push(ch);
                self.input_changed();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.input_changed();
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter | KeyCode::Esc => {
                self.focus = FocusMode::Palettes;
            }
            KeyCode::F(1) => self.show_help = true,
            KeyCode::F(2) => self.open_settings(),
            _ => {}
        }
    }

    fn handle_palettes_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('s') | KeyCode::F(2) => self.open_settings(),
            KeyCode::Char('r') => self.randomize(),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('/') => {
                self.focus = FocusMode::Input;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_palette(self.selected_palette.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_palette(self.selected_palette + 1);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_color = self.selected_color.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_color += 1;
                self.clamp_selection();
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if index < self.palettes.len() {
                    self.select_palette(index);
                }
            }
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => self.copy_selected(),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyCode) {
        let Some(popup) = self.settings_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') | KeyCode::F(2) => {
                self.settings_popup = None;
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                popup.field = popup.field.prev();
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                popup.field = popup.field.next();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                let field = popup.field;
                self.change_setting(field, false);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
                let field = popup.field;
                self.change_setting(field, true);
            }
            _ => {}
        }
    }

    fn open_settings(&mut self) {
        self.settings_popup = Some(SettingsPopup {
            field: SettingsField::Theme,
        });
    }

    fn change_setting(&mut self, field: SettingsField, forward: bool) {
        match field {
            SettingsField::Theme => {
                self.settings.theme = if forward {
                    self.settings.theme.next()
                } else {
                    self.settings.theme.prev()
                };
                self.persist_settings();
            }
            SettingsField::View => self.view_mode = self.view_mode.toggle(),
            SettingsField::Format => {
                self.settings.color_format = if forward {
                    self.settings.color_format.next()
                } else {
                    self.settings.color_format.prev()
                };
                self.persist_settings();
            }
        }
    }

    fn persist_settings(&mut self) {
        if let Err(err) = self.settings.save(&self.db) {
            log::error!("failed to save settings: {err:#}");
            self.set_status(format!("Could not save settings: {err}"));
        }
    }

    /// Re-resolve the input. Returns whether it named a color; when it
    /// doesn't, the previous palettes stay on screen.
    fn input_changed(&mut self) -> bool {
        match color::resolve_color(&self.input) {
            Some(hex) => {
                self.set_base_color(hex);
                true
            }
            None => false,
        }
    }

    fn set_base_color(&mut self, hex: String) {
        if hex == self.base_color {
            return;
        }
        log::debug!("base color {} -> {}", self.base_color, hex);
        self.palettes = color::display_palettes(&hex);
        self.base_color = hex;
        self.clamp_selection();
    }

    fn randomize(&mut self) {
        let hex = color::random_hex();
        self.input = hex.clone();
        self.set_base_color(hex);
    }

    fn select_palette(&mut self, index: usize) {
        self.selected_palette = index;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.palettes.is_empty() {
            self.selected_palette = 0;
            self.selected_color = 0;
            return;
        }
        self.selected_palette = self.selected_palette.min(self.palettes.len() - 1);
        let colors = self.palettes[self.selected_palette].colors.len();
        self.selected_color = self.selected_color.min(colors.saturating_sub(1));
    }

    fn copy_selected(&mut self) {
        let Some(hex) = self.selected_hex() else {
            return;
        };
        let text = self
            .settings
            .color_format
            .render(hex)
            .unwrap_or_else(|| hex.to_string());
        match self.clipboard.set_contents(text.clone()) {
            Ok(()) => self.set_status(format!("Copied {text}")),
            Err(err) => {
                log::warn!("copy failed: {err:#}");
                self.set_status(format!("Copy failed: {err}"));
            }
        }
    }

    fn set_status(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            set_at: Instant::now(),
        });
    }

    fn expire_status(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.set_at.elapsed() >= STATUS_TTL)
        {
            self.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use swatchr::color::{ColorFormat, PaletteKind};

    use super::*;
    use crate::db;
    use crate::settings::ThemeMode;

    #[derive(Clone, Default)]
    struct RecordingClipboard {
        copied: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn set_contents(&mut self, text: String) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("no display");
            }
            self.copied.borrow_mut().push(text);
            Ok(())
        }
    }

    fn app_with(clipboard: RecordingClipboard) -> App {
        App::new(
            db::init_in_memory().unwrap(),
            Settings::default(),
            ViewMode::Grid,
            Box::new(clipboard),
        )
    }

    fn app() -> App {
        app_with(RecordingClipboard::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.update(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn ctrl(app: &mut App, ch: char) {
        app.update(AppEvent::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn clear_input(app: &mut App) {
        while !app.input.is_empty() {
            press(app, KeyCode::Backspace);
        }
    }

    #[test]
    fn test_starts_with_default_palettes() {
        let app = app();
        assert_eq!(app.input, "#3b82f6");
        assert_eq!(app.base_color, "#3b82f6");
        assert_eq!(app.palettes.len(), 6);
        assert_eq!(app.palettes[0].name, PaletteKind::Complementary.label());
        assert_eq!(app.focus, FocusMode::Input);
    }

    #[test]
    fn test_typing_a_name_regenerates() {
        let mut app = app();
        clear_input(&mut app);
        type_text(&mut app, "Red");
        assert_eq!(app.base_color, "#ff0000");
        assert_eq!(app.palettes[0].colors, vec!["#ff0000", "#00ffff"]);
    }

    #[test]
    fn test_delete_key_does_not_edit_input() {
        let mut app = app();
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.input, "#3b82f6");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "#3b82f");
    }

    #[test]
    fn test_partial_input_keeps_last_palettes() {
        let mut app = app();
        clear_input(&mut app);
        // deleting "#3b82f6" passes through the valid shorthand "#3b8"
        assert_eq!(app.base_color, "#33bb88");
        let before = app.palettes.clone();
        type_text(&mut app, "#12");
        assert_eq!(color::resolve_color(&app.input), None);
        assert_eq!(app.base_color, "#33bb88");
        assert_eq!(app.palettes, before);

        type_text(&mut app, "3");
        assert_eq!(app.base_color, "#112233");
    }

    #[test]
    fn test_set_input_reports_unknown_names() {
        let mut app = app();
        app.set_input("chartreuse-ish");
        assert_eq!(app.base_color, "#3b82f6");
        assert!(app.status.is_some());

        app.set_input("瑠璃色");
        assert_eq!(app.base_color, "#1e50a2");
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FocusMode::Palettes);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_palette, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_palette, 5);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.palettes[app.selected_palette].name, PaletteKind::Tetradic.label());
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_color, 3);

        // complementary only has two colors
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_color, 1);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.selected_palette, 0);
    }

    #[test]
    fn test_copy_uses_active_format() {
        let clipboard = RecordingClipboard::default();
        let copied = clipboard.copied.clone();
        let mut app = app_with(clipboard);
        app.settings.color_format = ColorFormat::Rgb;
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(copied.borrow().as_slice(), ["rgb(59, 130, 246)".to_string()]);
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Copied rgb(59, 130, 246)")
        );
    }

    #[test]
    fn test_copy_failure_sets_status() {
        let mut app = app_with(RecordingClipboard {
            fail: true,
            ..Default::default()
        });
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('c'));
        let status = app.status.as_ref().unwrap();
        assert!(status.text.starts_with("Copy failed"));
    }

    #[test]
    fn test_status_expires_on_tick() {
        let mut app = app();
        app.status = Some(StatusMessage {
            text: "old".to_string(),
            set_at: Instant::now().checked_sub(Duration::from_secs(3)).unwrap(),
        });
        app.update(AppEvent::Tick);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_settings_popup_changes_and_persists() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.settings_popup.is_some());

        press(&mut app, KeyCode::Right);
        assert_eq!(app.settings.theme, ThemeMode::Light);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view_mode, ViewMode::Carousel);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.settings.color_format, ColorFormat::Hsl);

        press(&mut app, KeyCode::Esc);
        assert!(app.settings_popup.is_none());

        let stored = Settings::load(&app.db).unwrap();
        assert_eq!(stored.theme, ThemeMode::Light);
        assert_eq!(stored.color_format, ColorFormat::Hsl);
    }

    #[test]
    fn test_q_types_in_input_but_quits_from_palettes() {
        let mut app = app();
        clear_input(&mut app);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.input, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app();
        ctrl(&mut app, 'c');
        assert!(!app.running);
    }

    #[test]
    fn test_random_color_updates_input() {
        let mut app = app();
        ctrl(&mut app, 'r');
        assert_eq!(app.input, app.base_color);
        assert!(swatchr::color::is_valid_hex(&app.input));
        assert!(!app.palettes.is_empty());
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input, "#3b82f6");
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
