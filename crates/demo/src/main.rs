use anyhow::Context;

use switchyard_demo::{DemoConfig, scenario};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("failed to read demo configuration")?;
    switchyard_observability::init(config.log_format);

    tracing::info!(?config, "starting demo");

    let mut out = std::io::stdout();
    scenario::tickets(&mut out)?;
    scenario::orders(&config, &mut out)?;

    Ok(())
}
