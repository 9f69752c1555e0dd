/// Terminal User Interface module for the interactive finder
pub mod finder;

use crate::catalog::Catalog;
use crate::config::FinderConfig;
use crate::Result;

/// Run the interactive finder
pub async fn run_finder(catalog: Catalog, config: &FinderConfig) -> Result<()> {
    finder::run(catalog, config).await
}
