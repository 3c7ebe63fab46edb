//! End-to-end pipelines over a small grocery fixture.

use std::cmp::Ordering;
use std::sync::Once;

use cadena::{Query, QueryError};

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GroceryItem {
    name: String,
    cents: u32,
}

impl GroceryItem {
    fn new(name: &str, cents: u32) -> Self {
        Self {
            name: name.to_string(),
            cents,
        }
    }

    fn cost(&self) -> f64 {
        f64::from(self.cents) / 100.0
    }

    // Items compare by their "name (cost)" rendering.
    fn sort_key(&self) -> String {
        format!("{} ({:.2})", self.name, self.cost())
    }
}

impl Ord for GroceryItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for GroceryItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn pantry() -> Query<GroceryItem> {
    Query::new(vec![
        GroceryItem::new("Apple", 329),
        GroceryItem::new("Cherry", 429),
        GroceryItem::new("Lemon", 99),
        GroceryItem::new("Blueberry", 429),
        GroceryItem::new("Meat", 570),
        GroceryItem::new("Meat", 299),
    ])
}

fn names(query: &Query<GroceryItem>) -> Vec<String> {
    query.select(|item| item.name.clone()).into_list()
}

#[test]
fn first_with_and_without_predicate() {
    init_tracing();
    let items = pantry();
    assert_eq!(items.first().unwrap().name, "Apple");
    let pricey = items.first_where(|item| item.cost() > 5.0).unwrap();
    assert_eq!((pricey.name.as_str(), pricey.cents), ("Meat", 570));
}

#[test]
fn order_by_cost_breaks_ties_by_original_order() {
    let items = pantry();
    let by_cost = items.order_by(|a, b| a.cents.cmp(&b.cents));
    assert_eq!(
        names(&by_cost),
        vec!["Lemon", "Meat", "Apple", "Cherry", "Blueberry", "Meat"]
    );
    // Cherry and Blueberry tie at 4.29; Cherry came first in the source.
    let costs: Vec<u32> = by_cost.select(|item| item.cents).into_list();
    assert_eq!(costs, vec![99, 299, 329, 429, 429, 570]);
}

#[test]
fn order_by_name_keeps_equal_names_in_source_order() {
    let items = pantry();
    let by_name = items.order_by(|a, b| a.name.cmp(&b.name));
    let pairs: Vec<(String, u32)> = by_name
        .select(|item| (item.name.clone(), item.cents))
        .into_list();
    assert_eq!(
        pairs,
        vec![
            ("Apple".to_string(), 329),
            ("Blueberry".to_string(), 429),
            ("Cherry".to_string(), 429),
            ("Lemon".to_string(), 99),
            ("Meat".to_string(), 570),
            ("Meat".to_string(), 299),
        ]
    );
}

#[test]
fn skip_drops_a_prefix_of_the_source_order() {
    let items = pantry();
    assert_eq!(
        names(&items.skip(2)),
        vec!["Lemon", "Blueberry", "Meat", "Meat"]
    );
}

#[test]
fn average_cost_over_the_whole_pantry() {
    let items = pantry();
    let average = items.average_by(|item| item.cost()).unwrap();
    assert!((average - 21.55 / 6.0).abs() < 1e-9);
}

#[test]
fn single_succeeds_once_and_reports_cardinality() {
    let items = pantry();
    let apple = items.single_where(|item| item.name == "Apple").unwrap();
    assert_eq!(apple.cents, 329);

    let err = items.single_where(|item| item.cost() > 4.0).unwrap_err();
    assert_eq!(
        err,
        QueryError::MultipleElements {
            op: "single",
            found: 3
        }
    );
    // The failing call must not disturb the instance.
    assert_eq!(items.count(), 6);
}

#[test]
fn except_removes_the_named_items() {
    let items = pantry();
    let removed = Query::new(vec![
        GroceryItem::new("Cherry", 429),
        GroceryItem::new("Blueberry", 429),
    ]);
    assert_eq!(
        names(&items.except(&removed)),
        vec!["Apple", "Lemon", "Meat", "Meat"]
    );
}

#[test]
fn composed_pipeline_filters_orders_and_projects() {
    let items = pantry();
    let affordable = items
        .filter(|item| item.cost() < 5.0)
        .order_by(|a, b| a.cents.cmp(&b.cents))
        .select(|item| item.name.clone());
    assert_eq!(
        affordable.into_list(),
        vec!["Lemon", "Meat", "Apple", "Cherry", "Blueberry"]
    );
    // The source instance never observes the pipeline.
    assert_eq!(items.count(), 6);
}

#[test]
fn distinct_over_a_doubled_pantry_restores_the_original() {
    let items = pantry();
    let doubled = items.concat(&items);
    assert_eq!(doubled.count(), 12);
    assert_eq!(doubled.distinct().to_list(), items.to_list());
}
