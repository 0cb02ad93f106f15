use anyhow::Context;
use campus::domain::config::ApiConfig;
use campus::kernel::config::load_config;
use campus_logger::Logger;
use campus_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
