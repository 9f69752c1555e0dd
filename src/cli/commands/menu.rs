use super::CommandHandler;
use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::Result;
use std::fmt::Write as _;
use tracing::info;

/// Handler for the `menu` command
pub struct MenuCommand {
    pub catalog: Catalog,
    pub format: OutputFormat,
    pub currency: String,
}

impl MenuCommand {
    pub fn new(catalog: Catalog, format: OutputFormat, currency: String) -> Self {
        Self {
            catalog,
            format,
            currency,
        }
    }

    pub fn render(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.catalog)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();

        if self.catalog.is_empty() {
            out.push_str("Catalog is empty.\n");
            return out;
        }

        for store in self.catalog.stores() {
            let _ = writeln!(out, "{} ({})", store.name, store.location);
            for item in store.items_by_price() {
                let _ = writeln!(out, "  {}{:>4}  {}", self.currency, item.price, item.name);
            }
            let _ = writeln!(out);
        }

        if let Some((store, item)) = self.catalog.cheapest() {
            let _ = writeln!(
                out,
                "{} stores, {} items. Cheapest: {} at {} for {}{}",
                self.catalog.stores().len(),
                self.catalog.item_count(),
                item.name,
                store.name,
                self.currency,
                item.price
            );
        }
        out
    }
}

impl CommandHandler for MenuCommand {
    fn execute(&self) -> Result<()> {
        info!(stores = self.catalog.stores().len(), "Printing catalog");
        print!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lists_items_by_price() {
        let command = MenuCommand::new(Catalog::builtin(), OutputFormat::Text, "R".into());
        let out = command.render().unwrap();

        assert!(out.starts_with("KFC (123 Food St, City)\n  R  40  Streetwise 2\n  R  50  Zinger Burger\n"));
        assert!(out.contains("5 stores, 11 items. Cheapest: Regular Chips at Steers for R20"));
    }

    #[test]
    fn test_json_round_trips_catalog() {
        let command = MenuCommand::new(Catalog::builtin(), OutputFormat::Json, "R".into());
        let parsed: Catalog = serde_json::from_str(&command.render().unwrap()).unwrap();
        assert_eq!(parsed, Catalog::builtin());
    }

    #[test]
    fn test_empty_catalog() {
        let command = MenuCommand::new(Catalog::default(), OutputFormat::Text, "R".into());
        assert_eq!(command.render().unwrap(), "Catalog is empty.\n");
    }
}
