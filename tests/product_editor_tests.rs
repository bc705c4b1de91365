/// Product editor page tests
///
/// Exercises the page end to end against the in-memory catalog, with scripted
/// confirmation answers and a recording navigator.
/// Run with: cargo test --test product_editor_tests

use catalog_editor::prelude::page::*;
use catalog_editor::{EditorError, Fault, FaultResult};
use catalog_editor::services::CategoryServices;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

struct Harness {
    catalog: Arc<InMemoryCatalog>,
    confirmation: Arc<ScriptedConfirmation>,
    navigator: Arc<RecordingNavigator>,
}

impl Harness {
    fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalog::seeded()),
            confirmation: Arc::new(ScriptedConfirmation::new(answers)),
            navigator: Arc::new(RecordingNavigator::new()),
        }
    }

    fn without_prompts() -> Self {
        Self::new(Vec::<bool>::new())
    }

    fn services(&self) -> PageServices {
        PageServices::in_memory(
            self.catalog.clone(),
            self.confirmation.clone(),
            self.navigator.clone(),
        )
    }

    async fn open(&self, product_id: Option<i32>) -> ProductEditorPage {
        ProductEditorPage::initialize(EditorConfig::default(), self.services(), product_id)
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_initialize_without_route_parameter_starts_empty() {
    let harness = Harness::without_prompts();
    let page = harness.open(None).await;

    assert_eq!(page.product_id(), None);
    assert_eq!(page.product(), &Product::default());
    assert_eq!(page.categories().len(), 4);
    assert_eq!(page.suppliers().len(), 4);
    assert_eq!(page.feedback(), "");
}

#[tokio::test]
async fn test_initialize_loads_product_by_id() {
    let harness = Harness::without_prompts();
    let page = harness.open(Some(11)).await;

    assert_eq!(page.product_id(), Some(11));
    assert_eq!(page.product().product_name, "Queso Cabrales");
    assert_eq!(page.product().supplier_id, 5);
}

#[tokio::test]
async fn test_initialize_unknown_id_is_not_found() {
    let harness = Harness::without_prompts();
    let result =
        ProductEditorPage::initialize(EditorConfig::default(), harness.services(), Some(999)).await;
    assert!(matches!(result, Err(EditorError::NotFound(_))));
}

struct OfflineCategories;

#[async_trait]
impl CategoryServices for OfflineCategories {
    async fn list_categories(&self) -> FaultResult<Vec<Category>> {
        Err(Fault::system("category service offline"))
    }
}

#[tokio::test]
async fn test_initialize_propagates_reference_list_fault() {
    let harness = Harness::without_prompts();
    let mut services = harness.services();
    services.categories = Arc::new(OfflineCategories);

    let result = ProductEditorPage::initialize(EditorConfig::default(), services, None).await;
    match result {
        Err(EditorError::Service(fault)) => assert_eq!(fault.message(), "category service offline"),
        _ => panic!("expected service error"),
    }
}

#[tokio::test]
async fn test_create_then_update_round_trip() {
    let harness = Harness::without_prompts();
    let mut page = harness.open(None).await;

    page.edit(Product::PRODUCT_NAME, |p| p.product_name = "Widget".into());
    page.edit(Product::CATEGORY_ID, |p| p.category_id = 3);
    page.edit(Product::SUPPLIER_ID, |p| p.supplier_id = 5);
    page.edit(Product::UNIT_PRICE, |p| p.unit_price = Decimal::new(1250, 2));
    assert!(page.context().is_modified());

    let outcome = page.on_create().await;
    assert_eq!(outcome, ActionOutcome::Saved(12));
    assert_eq!(page.feedback(), "Widget (id: 12) has been saved");
    assert_eq!(page.product().product_id, Some(12));
    assert!(!page.context().is_modified());
    assert_eq!(harness.catalog.product_count().await, 4);

    page.edit(Product::UNIT_PRICE, |p| p.unit_price = Decimal::new(1300, 2));
    let outcome = page.on_update().await;
    assert_eq!(outcome, ActionOutcome::Applied(1));
    assert_eq!(page.feedback(), "Widget (id: 12) has been updated");
}

#[tokio::test]
async fn test_create_with_unselected_category_never_reaches_catalog() {
    let harness = Harness::without_prompts();
    let mut page = harness.open(None).await;
    page.edit(Product::PRODUCT_NAME, |p| p.product_name = "Widget".into());
    page.edit(Product::SUPPLIER_ID, |p| p.supplier_id = 5);

    let outcome = page.on_create().await;

    assert_eq!(outcome, ActionOutcome::RuleViolations(1));
    assert_eq!(page.feedback(), "");
    assert_eq!(harness.catalog.product_count().await, 3);
    assert_eq!(
        page.context().messages_for_field(page.messages(), Product::CATEGORY_ID),
        vec!["You must select a category".to_string()]
    );
}

#[tokio::test]
async fn test_duplicate_create_reports_data_issue() {
    let harness = Harness::without_prompts();
    let mut page = harness.open(None).await;
    page.edit(Product::PRODUCT_NAME, |p| p.product_name = "Chai".into());
    page.edit(Product::CATEGORY_ID, |p| p.category_id = 1);
    page.edit(Product::SUPPLIER_ID, |p| p.supplier_id = 1);

    let outcome = page.on_create().await;

    assert!(matches!(outcome, ActionOutcome::Faulted(_)));
    assert_eq!(page.feedback(), "Data Issue: Product Chai from supplier 1 already exists");
}

#[tokio::test]
async fn test_create_with_exhausted_id_space_reports_system_error() {
    let harness = Harness {
        catalog: Arc::new(InMemoryCatalog::seeded().with_products(vec![
            Product::new("Last").with_id(i32::MAX).category(1).supplier(1),
        ])),
        ..Harness::without_prompts()
    };
    let mut page = harness.open(None).await;
    page.edit(Product::PRODUCT_NAME, |p| p.product_name = "Ikura".into());
    page.edit(Product::CATEGORY_ID, |p| p.category_id = 2);
    page.edit(Product::SUPPLIER_ID, |p| p.supplier_id = 3);

    let outcome = page.on_create().await;

    assert!(matches!(outcome, ActionOutcome::Faulted(_)));
    assert_eq!(page.feedback(), "System Error: Product id space exhausted");
    assert_eq!(page.product().product_id, None);
    assert!(page.context().is_modified());
}

#[tokio::test]
async fn test_update_of_unsaved_product_reports_missing_data() {
    let harness = Harness::without_prompts();
    let mut page = harness.open(None).await;
    page.edit(Product::PRODUCT_NAME, |p| p.product_name = "Widget".into());
    page.edit(Product::CATEGORY_ID, |p| p.category_id = 3);
    page.edit(Product::SUPPLIER_ID, |p| p.supplier_id = 5);

    page.on_update().await;

    assert_eq!(page.feedback(), "Missing Data: Product id is required to update");
}

#[tokio::test]
async fn test_discontinue_and_activate_existing_product() {
    let harness = Harness::without_prompts();
    let mut page = harness.open(Some(2)).await;

    assert_eq!(page.on_discontinue().await, ActionOutcome::Applied(1));
    assert_eq!(page.feedback(), "Chang (id: 2) has been discontinued");
    assert!(page.product().discontinued);

    assert_eq!(page.on_activate().await, ActionOutcome::Applied(1));
    assert_eq!(page.feedback(), "Chang (id: 2) has been activated");
    assert!(!page.product().discontinued);
}

#[tokio::test]
async fn test_clear_refused_leaves_state_untouched() {
    let harness = Harness::new([false]);
    let mut page = harness.open(Some(1)).await;
    page.edit(Product::CATEGORY_ID, |p| p.category_id = 0);
    page.on_update().await;

    let context_before = page.context().id();
    let product_before = page.product().clone();
    let messages_before: Vec<String> =
        page.messages().messages().map(|(_, m)| m.to_string()).collect();
    assert_eq!(messages_before.len(), 1);

    assert!(!page.on_clear().await);

    assert_eq!(page.context().id(), context_before);
    assert_eq!(page.product(), &product_before);
    let messages_after: Vec<String> =
        page.messages().messages().map(|(_, m)| m.to_string()).collect();
    assert_eq!(messages_after, messages_before);
    assert_eq!(harness.confirmation.prompts().len(), 1);
}

#[tokio::test]
async fn test_clear_confirmed_binds_fresh_product_to_new_context() {
    let harness = Harness::new([true]);
    let mut page = harness.open(Some(1)).await;
    page.edit(Product::SUPPLIER_ID, |p| p.supplier_id = 0);
    page.on_update().await;
    let context_before = page.context().id();

    assert!(page.on_clear().await);

    assert_ne!(page.context().id(), context_before);
    assert_eq!(page.product(), &Product::default());
    assert!(!page.messages().any());
    assert_eq!(page.messages().context_id(), page.context().id());
    assert_eq!(page.feedback(), "");
    assert_eq!(
        harness.confirmation.prompts(),
        vec![EditorConfig::default().clear_prompt]
    );
}

#[tokio::test]
async fn test_go_to_search_navigates_only_when_confirmed() {
    let harness = Harness::new([false, true]);
    let mut page = harness.open(Some(1)).await;

    assert!(!page.go_to_search().await);
    assert!(harness.navigator.history().is_empty());
    assert_eq!(page.product().product_name, "Chai");

    assert!(page.go_to_search().await);
    assert_eq!(harness.navigator.history(), vec!["categoryproducts"]);
    assert_eq!(page.feedback(), "");
}

#[tokio::test]
async fn test_search_route_comes_from_config() {
    let harness = Harness::new([true]);
    let config = EditorConfig::new().search_route("productsearch");
    let mut page = ProductEditorPage::initialize(config, harness.services(), None)
        .await
        .unwrap();

    page.go_to_search().await;

    assert_eq!(harness.navigator.last_route().as_deref(), Some("productsearch"));
}
