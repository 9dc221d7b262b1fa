use carbonito::api::ApiClient;
use carbonito::app::{App, AppScreen};
use carbonito::config::{get_config, initialize_config};
use carbonito::key_handlers::handle_key;
use carbonito::logging::init_logging;
use carbonito::ui;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{error::Error, io, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    initialize_config()?;
    let config = get_config();
    let _logger = init_logging(&config.log_level, &config.log_dir)?;
    log::info!("carbonito starting, endpoint {}", config.api_url);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(ApiClient::new(config.api_url))));
    let result = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("exited with error: {}", e);
    }
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<(), Box<dyn Error>> {
    loop {
        {
            let mut guard = app.lock().await;
            guard.status_indicator.update_spinner();
            terminal.draw(|f| ui::draw(f, &mut guard))?;
            if guard.screen == AppScreen::Quit {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let mut guard = app.lock().await;
                    handle_key(key, &mut guard, &app);
                }
            }
        }
    }
}
