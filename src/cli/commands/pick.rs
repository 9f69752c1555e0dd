use super::CommandHandler;
use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::engine::{select, Budget, Selection, Summary};
use crate::Result;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, warn};

/// Handler for the `pick` command
pub struct PickCommand {
    pub catalog: Catalog,
    pub budget: Budget,
    pub format: OutputFormat,
    pub currency: String,
}

/// JSON shape printed by `pick --format json`
#[derive(Debug, Serialize)]
struct PickReport<'a> {
    budget: u32,
    selections: &'a [Selection],
    total: u32,
    remaining: u32,
}

impl PickCommand {
    pub fn new(catalog: Catalog, budget: Budget, format: OutputFormat, currency: String) -> Self {
        Self {
            catalog,
            budget,
            format,
            currency,
        }
    }

    /// Run the selector and format its output
    pub fn render(&self) -> Result<String> {
        let selections = select(&self.catalog, self.budget.amount()).inspect_err(|e| {
            warn!(budget = self.budget.amount(), error = %e, "Pick rejected");
        })?;
        let summary = Summary::of(self.budget.amount(), &selections);

        match self.format {
            OutputFormat::Json => {
                let report = PickReport {
                    budget: self.budget.amount(),
                    selections: &selections,
                    total: summary.total,
                    remaining: summary.remaining,
                };
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Text => Ok(self.render_text(&selections, &summary)),
        }
    }

    fn render_text(&self, selections: &[Selection], summary: &Summary) -> String {
        let currency = &self.currency;
        let mut out = String::new();

        if selections.is_empty() {
            let _ = writeln!(out, "No meals fit a budget of {currency}{}.", self.budget);
            return out;
        }

        let store_width = selections.iter().map(|s| s.store.chars().count()).max().unwrap_or(0);
        let item_width = selections.iter().map(|s| s.item.chars().count()).max().unwrap_or(0);

        for selection in selections {
            let _ = writeln!(
                out,
                "{:<store_width$}  {:<item_width$}  {currency}{:>4}  📍 {}",
                selection.store, selection.item, selection.price, selection.location,
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", summary.describe(currency));
        out
    }
}

impl CommandHandler for PickCommand {
    fn execute(&self) -> Result<()> {
        info!(budget = self.budget.amount(), stores = self.catalog.stores().len(), "Picking meals");
        let output = self.render()?;
        print!("{output}");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "pick"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MenuItem, Store};
    use crate::FinderError;

    fn kfc_only() -> Catalog {
        Catalog::new(vec![Store::new(
            "KFC",
            "123 Food St, City",
            vec![
                MenuItem::new("Zinger Burger", 50, "/images/kfc_zinger.jpg"),
                MenuItem::new("Streetwise 2", 40, "/images/kfc_streetwise.jpg"),
            ],
        )])
    }

    #[test]
    fn test_text_output() {
        let command = PickCommand::new(kfc_only(), Budget::new(200), OutputFormat::Text, "R".into());
        let out = command.render().unwrap();
        assert!(out.contains("KFC  Zinger Burger  R  50  📍 123 Food St, City"));
        assert!(out.ends_with("Total: R50 (R150 remaining)\n"));
    }

    #[test]
    fn test_json_output() {
        let command = PickCommand::new(kfc_only(), Budget::new(200), OutputFormat::Json, "R".into());
        let value: serde_json::Value = serde_json::from_str(&command.render().unwrap()).unwrap();
        assert_eq!(value["total"], 50);
        assert_eq!(value["remaining"], 150);
        assert_eq!(value["selections"][0]["item"], "Zinger Burger");
        assert_eq!(value["selections"][0]["image"], "/images/kfc_zinger.jpg");
    }

    #[test]
    fn test_nothing_affordable() {
        let command = PickCommand::new(kfc_only(), Budget::new(35), OutputFormat::Text, "R".into());
        assert_eq!(command.render().unwrap(), "No meals fit a budget of R35.\n");
    }

    #[test]
    fn test_too_low() {
        let command = PickCommand::new(kfc_only(), Budget::new(20), OutputFormat::Text, "R".into());
        assert!(matches!(command.render(), Err(FinderError::BudgetTooLow { .. })));
    }
}
