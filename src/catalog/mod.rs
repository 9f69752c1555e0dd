//! Store and menu catalog
//!
//! The catalog is read-only for the lifetime of a run. It is either the
//! compiled-in list from [`Catalog::builtin`] or a YAML file loaded through
//! [`loader::CatalogLoader`].

pub mod loader;

use serde::{Deserialize, Serialize};

pub use loader::CatalogLoader;

/// A priced menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
    /// Image path or URL shown next to the item
    #[serde(rename = "image", default)]
    pub image_ref: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: u32, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_ref: image_ref.into(),
        }
    }
}

/// A store with its menu, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Store {
    pub fn new(name: impl Into<String>, location: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            items,
        }
    }

    /// Items ordered by ascending price. Equal prices keep their menu order.
    pub fn items_by_price(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.iter().collect();
        items.sort_by_key(|item| item.price);
        items
    }
}

/// The full set of stores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    stores: Vec<Store>,
}

impl Catalog {
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Self {
        Self::new(vec![
            Store::new(
                "KFC",
                "123 Food St, City",
                vec![
                    MenuItem::new("Zinger Burger", 50, "/images/kfc_zinger.jpg"),
                    MenuItem::new("Streetwise 2", 40, "/images/kfc_streetwise.jpg"),
                ],
            ),
            Store::new(
                "McDonald's",
                "45 Burger Ave, City",
                vec![
                    MenuItem::new("Big Mac", 55, "/images/mcd_bigmac.jpg"),
                    MenuItem::new("McChicken", 42, "/images/mcd_mcchicken.jpg"),
                    MenuItem::new("Cheeseburger", 25, "/images/mcd_cheeseburger.jpg"),
                ],
            ),
            Store::new(
                "Steers",
                "9 Flame Rd, City",
                vec![
                    MenuItem::new("Steers Burger", 45, "/images/steers_burger.jpg"),
                    MenuItem::new("Regular Chips", 20, "/images/steers_chips.jpg"),
                ],
            ),
            Store::new(
                "Nando's",
                "77 Peri Lane, City",
                vec![
                    MenuItem::new("1/4 Chicken", 65, "/images/nandos_quarter.jpg"),
                    MenuItem::new("Peri Wrap", 50, "/images/nandos_wrap.jpg"),
                ],
            ),
            Store::new(
                "Wimpy",
                "12 Coffee Sq, City",
                vec![
                    MenuItem::new("Wimpy Burger", 60, "/images/wimpy_burger.jpg"),
                    MenuItem::new("Toasted Cheese", 35, "/images/wimpy_toastie.jpg"),
                ],
            ),
        ])
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Number of menu items across all stores
    pub fn item_count(&self) -> usize {
        self.stores.iter().map(|store| store.items.len()).sum()
    }

    /// Cheapest item anywhere in the catalog, with its store
    pub fn cheapest(&self) -> Option<(&Store, &MenuItem)> {
        self.stores
            .iter()
            .flat_map(|store| store.items.iter().map(move |item| (store, item)))
            .min_by_key(|(_, item)| item.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_starts_with_kfc() {
        let catalog = Catalog::builtin();
        let kfc = &catalog.stores()[0];
        assert_eq!(kfc.name, "KFC");
        assert_eq!(kfc.location, "123 Food St, City");
        assert_eq!(kfc.items[0], MenuItem::new("Zinger Burger", 50, "/images/kfc_zinger.jpg"));
    }

    #[test]
    fn test_items_by_price_is_stable() {
        let store = Store::new(
            "Diner",
            "1 Main St",
            vec![
                MenuItem::new("B", 40, ""),
                MenuItem::new("A", 30, ""),
                MenuItem::new("C", 40, ""),
            ],
        );
        let names: Vec<_> = store.items_by_price().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        // Source order untouched
        assert_eq!(store.items[0].name, "B");
    }

    #[test]
    fn test_cheapest_and_counts() {
        let catalog = Catalog::builtin();
        let (store, item) = catalog.cheapest().unwrap();
        assert_eq!(store.name, "Steers");
        assert_eq!(item.price, 20);
        assert_eq!(catalog.item_count(), 11);
        assert!(Catalog::default().cheapest().is_none());
        assert!(Catalog::default().is_empty());
    }
}
