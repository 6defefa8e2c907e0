use std::sync::Arc;

use console::app::App;
use console::config::{self, ApiConfig};
use console::services::api::ApiClient;
use console::ui::widgets::dialogs::DialogPrompter;
use console::ui::MarcasConsole;
use console::utils::runtime::TOKIO_RT;

const WINDOW_TITLE: &str = "Gestión de Marcas";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_result = config::load_dotenv();
    let _log_guard = console::debug::init();
    if let Err(e) = dotenv_result {
        tracing::warn!(error = %e, "Failed to read .env file");
    }

    let api_config = ApiConfig::from_env()?;
    tracing::info!(
        base_url = %api_config.base_url,
        source = %api_config.source,
        "API base URL resolved"
    );
    let client = ApiClient::new(&api_config)?;

    // reqwest and the spawned flows need a Tokio context on the UI thread
    let _rt_guard = TOKIO_RT.enter();

    let prompter = Arc::new(DialogPrompter::new());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let ui_prompter = prompter.clone();
    let base_url = api_config.base_url.clone();
    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let app = App::new(Arc::new(client), ui_prompter.clone());
            Ok(Box::new(MarcasConsole::new(cc, app, ui_prompter, base_url)))
        }),
    );

    // Unblock any flow still waiting on a dialog
    prompter.dismiss_all();
    tracing::info!("Console window closed");

    result.map_err(|e| e.to_string().into())
}
