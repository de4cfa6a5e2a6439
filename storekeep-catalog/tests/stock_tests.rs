use std::sync::{Arc, Mutex};
use storekeep_catalog::{
    CategoryService, LogNotifier, Notifier, NotifyError, ProductService, StockScanner,
};
use storekeep_model::{CategoryInput, Product, ProductInput};
use storekeep_storage::DocumentStore;

/// Records every notification it receives.
#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<(String, i64)>>,
}

impl Notifier for RecordingNotifier {
    fn low_stock(&self, product: &Product) -> Result<(), NotifyError> {
        self.seen
            .lock()
            .unwrap()
            .push((product.name.clone(), product.stock));
        Ok(())
    }
}

/// Fails for one named product, records the rest.
struct FlakyNotifier {
    fail_for: String,
    seen: Mutex<Vec<String>>,
}

impl Notifier for FlakyNotifier {
    fn low_stock(&self, product: &Product) -> Result<(), NotifyError> {
        if product.name == self.fail_for {
            return Err(NotifyError("downstream unavailable".to_string()));
        }
        self.seen.lock().unwrap().push(product.name.clone());
        Ok(())
    }
}

fn setup() -> (Arc<DocumentStore>, ProductService, String) {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let categories = CategoryService::new(store.clone());
    let products = ProductService::new(store.clone());
    let category = categories
        .create(CategoryInput {
            name: Some("Audio".to_string()),
            description: Some("desc".to_string()),
            slug: Some("audio".to_string()),
            ..CategoryInput::default()
        })
        .unwrap();
    (store, products, category.id)
}

fn product(name: &str, category_id: &str, stock: i64, threshold: i64) -> ProductInput {
    ProductInput {
        name: Some(name.to_string()),
        description: Some("desc".to_string()),
        price: Some(9.99),
        category_id: Some(category_id.to_string()),
        stock: Some(stock),
        low_stock_threshold: Some(threshold),
        ..ProductInput::default()
    }
}

#[test]
fn scan_notifies_only_breached_products() {
    let (store, products, category_id) = setup();
    products
        .create(product("Headphones", &category_id, 2, 5))
        .unwrap();
    products
        .create(product("Speakers", &category_id, 10, 5))
        .unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = StockScanner::new(store, notifier.clone());

    let breaches = scanner.scan().unwrap();
    assert_eq!(breaches, 1);

    let seen = notifier.seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[("Headphones".to_string(), 2)]);
}

#[test]
fn stock_equal_to_threshold_is_a_breach() {
    let (store, products, category_id) = setup();
    products
        .create(product("Headphones", &category_id, 5, 5))
        .unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = StockScanner::new(store, notifier.clone());

    assert_eq!(scanner.scan().unwrap(), 1);
    assert_eq!(notifier.seen.lock().unwrap().len(), 1);
}

#[test]
fn inactive_products_are_skipped() {
    let (store, products, category_id) = setup();
    let mut input = product("Headphones", &category_id, 1, 5);
    input.is_active = Some(false);
    products.create(input).unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = StockScanner::new(store, notifier.clone());

    assert_eq!(scanner.scan().unwrap(), 0);
    assert!(notifier.seen.lock().unwrap().is_empty());
}

#[test]
fn scan_of_empty_store_finds_nothing() {
    let store = Arc::new(DocumentStore::open_in_memory().unwrap());
    let scanner = StockScanner::new(store, Arc::new(LogNotifier));
    assert_eq!(scanner.scan().unwrap(), 0);
}

#[test]
fn failed_notification_does_not_stop_the_scan() {
    let (store, products, category_id) = setup();
    products.create(product("Cursed", &category_id, 1, 5)).unwrap();
    products.create(product("Blessed", &category_id, 2, 5)).unwrap();

    let notifier = Arc::new(FlakyNotifier {
        fail_for: "Cursed".to_string(),
        seen: Mutex::new(Vec::new()),
    });
    let scanner = StockScanner::new(store, notifier.clone());

    // Both breaches are counted; the failure is logged and skipped.
    assert_eq!(scanner.scan().unwrap(), 2);
    assert_eq!(notifier.seen.lock().unwrap().as_slice(), &["Blessed".to_string()]);
}

#[test]
fn scan_does_not_mutate_products() {
    let (store, products, category_id) = setup();
    let created = products
        .create(product("Headphones", &category_id, 2, 5))
        .unwrap();

    let scanner = StockScanner::new(store, Arc::new(RecordingNotifier::default()));
    scanner.scan().unwrap();

    let after = products
        .list()
        .unwrap()
        .into_iter()
        .find(|p| p.id == created.id)
        .unwrap();
    assert_eq!(after, created);
}
