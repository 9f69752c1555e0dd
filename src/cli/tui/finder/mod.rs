/// Interactive finder implementation
pub mod app;
pub mod state;
pub mod events;
pub mod screens;
pub mod modal;
pub mod theme;

use crate::catalog::Catalog;
use crate::config::FinderConfig;
use crate::Result;

/// Entry point for the finder
pub async fn run(catalog: Catalog, config: &FinderConfig) -> Result<()> {
    let app = app::App::new(catalog, config);
    app.run().await
}
