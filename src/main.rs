use anyhow::Result;
use cropcast::config::Config;
use cropcast::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Write a commented default config and exit
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    if config.logging.enabled {
        logger::init_file_logging()?;
    }

    ui::run_app(config).await?;

    Ok(())
}
