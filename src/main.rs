mod app;
mod cli;
mod db;
mod event;
mod logging;
mod settings;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

use logging::LogTarget;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let db_path = db::default_db_path();
    if let Some(command) = cli_opts.command {
        logging::init(LogTarget::Stderr)?;
        let conn = db::init(&db_path)?;
        return cli::run(command, &conn);
    }

    logging::init(LogTarget::File(db::default_log_path()))?;
    let conn = db::init(&db_path)?;
    let settings = settings::Settings::load(&conn)?;
    let view_mode = settings::ViewMode::for_width(tui::width()?);
    log::info!(
        "starting tui theme={} format={} view={:?}",
        settings.theme,
        settings.color_format,
        view_mode
    );

    let mut app = app::App::new(conn, settings, view_mode, Box::new(app::SystemClipboard));
    if let Some(color) = cli_opts.color {
        app.set_input(&color);
    }
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
