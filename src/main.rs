use std::io;

use tracing_subscriber::EnvFilter;

use components::catalog::config::CatalogConfig;
use components::catalog::store::CatalogStore;
use components::console::Session;

mod components;
#[cfg(test)]
mod tests;

fn main() {
    // Diagnostics go to stderr so the menu on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CatalogConfig::default();
    let store = CatalogStore::from_config(&config);

    let mut session = Session::new(&store, &config, io::stdin().lock(), io::stdout());
    let end = session.run();
    tracing::debug!(?end, "session finished");
}
