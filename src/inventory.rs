//! Session 5: shop items behind a trait, with generic helpers.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::output::Output;

/// Anything the shop can list and discount.
pub trait Item: Debug {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn price(&self) -> f64;
    /// Lowers the price by `percent` percent.
    fn apply_discount(&mut self, percent: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub author: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Electronics {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub warranty_months: u32,
}

fn discounted(price: f64, percent: f64) -> f64 {
    price * (1.0 - percent / 100.0)
}

impl Item for Book {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn apply_discount(&mut self, percent: f64) {
        self.price = discounted(self.price, percent);
    }
}

impl Item for Electronics {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn apply_discount(&mut self, percent: f64) {
        self.price = discounted(self.price, percent);
    }
}

// Lets heterogeneous collections go through the generic helpers.
impl<T: Item + ?Sized> Item for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }

    fn apply_discount(&mut self, percent: f64) {
        (**self).apply_discount(percent)
    }
}

fn price_line<T: Item + ?Sized>(item: &T) -> String {
    format!("[{}] {} - ${:.2}", item.id(), item.name(), item.price())
}

pub fn apply_discount<T: Item>(mut item: T, percent: f64, out: &dyn Output) -> T {
    out.line(format!("Before discount: {}", price_line(&item)));
    item.apply_discount(percent);
    out.line(format!("After discount: {}", price_line(&item)));
    item
}

pub fn item_names<T: Item>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.name().to_string()).collect()
}

pub fn list_items<T: Item>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, price_line(item)))
        .collect()
}

pub fn list_by_id<T: Item>(items: &BTreeMap<String, T>) -> Vec<String> {
    items
        .iter()
        .map(|(id, item)| format!("ID: {} | {} - ${:.2}", id, item.name(), item.price()))
        .collect()
}

pub fn index_by_id<T: Item>(items: Vec<T>) -> BTreeMap<String, T> {
    items
        .into_iter()
        .map(|item| (item.id().to_string(), item))
        .collect()
}

/// Debug rendering of any value, the stand-in for "print anything".
pub fn describe<T: Debug + ?Sized>(value: &T) -> String {
    format!("Data: {value:?}")
}

pub fn sample_inventory() -> Vec<Box<dyn Item + Send>> {
    vec![
        Box::new(Book {
            id: "B001".into(),
            name: "The Go Programming Language".into(),
            author: "Alan A. A. Donovan".into(),
            price: 39.99,
        }),
        Box::new(Electronics {
            id: "E001".into(),
            name: "Smartphone".into(),
            brand: "TechBrand".into(),
            price: 299.99,
            warranty_months: 24,
        }),
        Box::new(Book {
            id: "B002".into(),
            name: "Introducing Go".into(),
            author: "Caleb Doxsey".into(),
            price: 29.99,
        }),
        Box::new(Electronics {
            id: "E002".into(),
            name: "Laptop".into(),
            brand: "ComputeX".into(),
            price: 899.99,
            warranty_months: 12,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Recorder;

    #[test]
    fn discount_applies_percentage() {
        let rec = Recorder::new();
        let book = Book {
            id: "B9".into(),
            name: "Rust".into(),
            author: "Ferris".into(),
            price: 50.0,
        };
        let book = apply_discount(book, 10.0, &rec);
        assert!((book.price - 45.0).abs() < 1e-9);
        assert_eq!(
            rec.lines(),
            vec!["Before discount: [B9] Rust - $50.00", "After discount: [B9] Rust - $45.00"]
        );
    }

    #[test]
    fn boxed_items_work_with_generics() {
        let items = sample_inventory();
        assert_eq!(
            item_names(&items),
            vec!["The Go Programming Language", "Smartphone", "Introducing Go", "Laptop"]
        );
        assert_eq!(list_items(&items)[1], "2. [E001] Smartphone - $299.99");
    }

    #[test]
    fn index_is_sorted_by_id() {
        let map = index_by_id(sample_inventory());
        let ids: Vec<_> = map.keys().cloned().collect();
        assert_eq!(ids, vec!["B001", "B002", "E001", "E002"]);
        assert_eq!(list_by_id(&map)[0], "ID: B001 | The Go Programming Language - $39.99");
    }

    #[test]
    fn describe_uses_debug() {
        assert_eq!(describe("hi"), "Data: \"hi\"");
        assert_eq!(describe(&12345), "Data: 12345");
    }
}
