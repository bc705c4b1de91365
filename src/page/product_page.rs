use super::config::EditorConfig;
use crate::core::{Category, EditorError, Product, ProductId, Result, Supplier};
use crate::interaction::{ConfirmationGate, Navigator};
use crate::pipeline::{ActionOutcome, ActionPipeline, EditSession, MutationKind};
use crate::services::{CategoryServices, InMemoryCatalog, ProductServices, SupplierServices};
use crate::validation::{EditContext, ValidationMessageStore, product_rules};
use std::sync::Arc;
use tracing::{debug, info};

/// Collaborators injected into a [`ProductEditorPage`].
#[derive(Clone)]
pub struct PageServices {
    pub products: Arc<dyn ProductServices>,
    pub categories: Arc<dyn CategoryServices>,
    pub suppliers: Arc<dyn SupplierServices>,
    pub confirmation: Arc<dyn ConfirmationGate>,
    pub navigator: Arc<dyn Navigator>,
}

impl PageServices {
    /// All data services backed by one in-memory catalog.
    pub fn in_memory(
        catalog: Arc<InMemoryCatalog>,
        confirmation: Arc<dyn ConfirmationGate>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            products: catalog.clone(),
            categories: catalog.clone(),
            suppliers: catalog,
            confirmation,
            navigator,
        }
    }
}

/// Editing page for one product.
///
/// Actions take `&mut self`, so at most one action runs at a time; a second
/// trigger cannot start while the first is waiting on the user or the store.
pub struct ProductEditorPage {
    config: EditorConfig,
    services: PageServices,
    product_id: Option<ProductId>,
    session: EditSession<Product>,
    categories: Vec<Category>,
    suppliers: Vec<Supplier>,
    pipeline: ActionPipeline<Product>,
}

impl ProductEditorPage {
    /// Loads the product named by the route parameter, if any, and the
    /// reference lists.
    ///
    /// Without a parameter the page starts on an empty product for create.
    pub async fn initialize(
        config: EditorConfig,
        services: PageServices,
        product_id: Option<ProductId>,
    ) -> Result<Self> {
        let product = match product_id {
            Some(id) => services
                .products
                .get_by_id(id)
                .await?
                .ok_or_else(|| EditorError::NotFound(format!("product {}", id)))?,
            None => Product::default(),
        };

        let categories = services.categories.list_categories().await?;
        let suppliers = services.suppliers.list_suppliers().await?;

        info!(
            product_id = ?product_id,
            categories = categories.len(),
            suppliers = suppliers.len(),
            "product editor initialized"
        );

        Ok(Self {
            config,
            services,
            product_id,
            session: EditSession::new(product),
            categories,
            suppliers,
            pipeline: ActionPipeline::new(product_rules()),
        })
    }

    /// Route parameter the page was opened with.
    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn session(&self) -> &EditSession<Product> {
        &self.session
    }

    pub fn product(&self) -> &Product {
        self.session.entity()
    }

    pub fn context(&self) -> &EditContext<Product> {
        self.session.context()
    }

    pub fn messages(&self) -> &ValidationMessageStore {
        self.session.messages()
    }

    pub fn feedback(&self) -> &str {
        self.session.feedback()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Applies a form edit to one field and marks it modified.
    pub fn edit(&mut self, field: &'static str, apply: impl FnOnce(&mut Product)) {
        let context = self.session.context_mut();
        apply(context.model_mut());
        context.mark_field_modified(field);
    }

    pub async fn on_create(&mut self) -> ActionOutcome<ProductId> {
        self.run(MutationKind::Create).await
    }

    pub async fn on_update(&mut self) -> ActionOutcome<ProductId> {
        self.run(MutationKind::Update).await
    }

    pub async fn on_discontinue(&mut self) -> ActionOutcome<ProductId> {
        self.run(MutationKind::Discontinue).await
    }

    pub async fn on_activate(&mut self) -> ActionOutcome<ProductId> {
        self.run(MutationKind::Activate).await
    }

    async fn run(&mut self, kind: MutationKind) -> ActionOutcome<ProductId> {
        let outcome = self
            .pipeline
            .run(kind, &mut self.session, self.services.products.as_ref())
            .await;
        if outcome.is_success() {
            self.session.context_mut().mark_as_unmodified();
        }
        outcome
    }

    /// Discards unsaved edits after confirmation.
    ///
    /// Returns whether the user agreed. On refusal nothing but the feedback
    /// line changes.
    pub async fn on_clear(&mut self) -> bool {
        self.session.reset_feedback();
        let confirmed = self
            .services
            .confirmation
            .confirm(&self.config.clear_prompt)
            .await;
        debug!(confirmed, "clear confirmation answered");

        if confirmed {
            self.session.replace_entity(Product::default());
        }
        confirmed
    }

    /// Leaves for the search view after confirmation.
    pub async fn go_to_search(&mut self) -> bool {
        self.session.reset_feedback();
        let confirmed = self
            .services
            .confirmation
            .confirm(&self.config.leave_prompt)
            .await;
        debug!(confirmed, "leave confirmation answered");

        if confirmed {
            info!(route = %self.config.search_route, "navigating away from product editor");
            self.services.navigator.navigate_to(&self.config.search_route);
        }
        confirmed
    }
}
