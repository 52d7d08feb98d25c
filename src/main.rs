use octopanel::{init_logging, load_config, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("OctoPanel {} (built {})", VERSION, BUILD_DATE);

    let config = load_config();
    octopanel_ui::gtk_app::run(config)?;

    Ok(())
}
