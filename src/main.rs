use block_board::BoardConfig;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    let config = match BoardConfig::from_env() {
        Some(Ok(config)) => {
            log::info!("loaded board config from ${}", block_board::config::CONFIG_ENV_VAR);
            Some(config)
        }
        Some(Err(err)) => {
            log::warn!("{err}; falling back to the stored configuration");
            None
        }
        None => None,
    };

    block_board::run_app_with(config)
}
