//! Binary entry point: resolve settings, start file logging, and drive the
//! Ratatui event loop until the user quits.
use book_store_manager::ui::FAREWELL_ART;
use book_store_manager::{init_logging, run_app, App, Config, Session};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _guard = init_logging(&config)?;
    tracing::info!(books = %config.books_path.display(), "starting book store manager");

    let mut app = App::new(Session::new(), config.books_path);
    run_app(&mut app)?;

    println!("Books away, see you later!");
    println!("{FAREWELL_ART}");
    Ok(())
}
