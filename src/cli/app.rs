use super::command::{Command, HELP};
use async_trait::async_trait;
use catalog_editor::interaction::{ConfirmationGate, RecordingNavigator};
use catalog_editor::services::InMemoryCatalog;
use catalog_editor::{ActionOutcome, EditorConfig, PageServices, ProductEditorPage, ProductId};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::warn;

type SharedInput = Arc<Mutex<Lines<BufReader<Stdin>>>>;

/// Asks confirmation questions on the terminal, reading from the same input
/// as the command loop.
struct TerminalConfirmation {
    input: SharedInput,
}

#[async_trait]
impl ConfirmationGate for TerminalConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if let Err(err) = io::stdout().flush() {
            warn!(error = %err, "could not show confirmation prompt; answering no");
            return false;
        }

        match self.input.lock().await.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "could not read confirmation answer; answering no");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub struct App {
    page: ProductEditorPage,
    input: SharedInput,
    navigator: Arc<RecordingNavigator>,
    exit: bool,
}

impl App {
    pub async fn open(
        config: EditorConfig,
        product_id: Option<ProductId>,
        seed: bool,
    ) -> catalog_editor::Result<Self> {
        let catalog = Arc::new(if seed {
            InMemoryCatalog::seeded()
        } else {
            InMemoryCatalog::new()
        });
        let input: SharedInput = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
        let navigator = Arc::new(RecordingNavigator::new());

        let services = PageServices::in_memory(
            catalog,
            Arc::new(TerminalConfirmation {
                input: input.clone(),
            }),
            navigator.clone(),
        );
        let page = ProductEditorPage::initialize(config, services, product_id).await?;

        Ok(Self {
            page,
            input,
            navigator,
            exit: false,
        })
    }

    pub async fn run(&mut self) -> io::Result<()> {
        println!("Product editor. Type 'help' for commands.");
        self.render();

        while !self.exit {
            print!("> ");
            io::stdout().flush()?;

            let line = self.input.lock().await.next_line().await?;
            let Some(line) = line else {
                break;
            };

            match line.parse::<Command>() {
                Ok(command) => self.execute(command).await,
                Err(err) => println!("{}", err),
            }
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) {
        match command {
            Command::Show => self.render(),
            Command::Set(edit) => {
                let field = edit.field();
                self.page.edit(field, |product| edit.apply(product));
                self.render();
            }
            Command::Create => {
                let outcome = self.page.on_create().await;
                self.report(outcome);
            }
            Command::Update => {
                let outcome = self.page.on_update().await;
                self.report(outcome);
            }
            Command::Discontinue => {
                let outcome = self.page.on_discontinue().await;
                self.report(outcome);
            }
            Command::Activate => {
                let outcome = self.page.on_activate().await;
                self.report(outcome);
            }
            Command::Clear => {
                if self.page.on_clear().await {
                    self.render();
                }
            }
            Command::Search => {
                if self.page.go_to_search().await {
                    if let Some(route) = self.navigator.last_route() {
                        println!("-> {}", route);
                    }
                    self.exit = true;
                }
            }
            Command::Categories => {
                for category in self.page.categories() {
                    println!("  {:>3}  {}", category.category_id, category.category_name);
                }
            }
            Command::Suppliers => {
                for supplier in self.page.suppliers() {
                    println!("  {:>3}  {}", supplier.supplier_id, supplier.company_name);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => self.exit = true,
        }
    }

    fn report(&self, outcome: ActionOutcome<ProductId>) {
        match outcome {
            ActionOutcome::SchemaRejected | ActionOutcome::RuleViolations(_) => {
                self.render_messages()
            }
            _ => println!("{}", self.page.feedback()),
        }
    }

    fn render(&self) {
        let product = self.page.product();
        let id = product
            .product_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "(new)".to_string());

        println!("Product {}", id);
        println!("  name:      {}", product.product_name);
        println!("  category:  {}", self.category_name(product.category_id));
        println!("  supplier:  {}", self.supplier_name(product.supplier_id));
        println!("  quantity:  {}", product.quantity_per_unit.as_deref().unwrap_or(""));
        println!(
            "  min-order: {}",
            product
                .minimum_order_quantity
                .map(|q| q.to_string())
                .unwrap_or_default()
        );
        println!("  price:     {}", product.formatted_unit_price());
        println!("  on-order:  {}", product.units_on_order);
        println!(
            "  status:    {}",
            if product.discontinued { "discontinued" } else { "active" }
        );
        if self.page.context().is_modified() {
            println!("  (unsaved changes)");
        }
        if !self.page.feedback().is_empty() {
            println!("{}", self.page.feedback());
        }
        self.render_messages();
    }

    fn render_messages(&self) {
        let context = self.page.context();
        for (field, message) in context.validation_messages(self.page.messages()) {
            println!("  ! {}: {}", field, message);
        }
    }

    fn category_name(&self, id: i32) -> String {
        self.page
            .categories()
            .iter()
            .find(|c| c.category_id == id)
            .map(|c| format!("{} ({})", c.category_name, id))
            .unwrap_or_else(|| "Select ...".to_string())
    }

    fn supplier_name(&self, id: i32) -> String {
        self.page
            .suppliers()
            .iter()
            .find(|s| s.supplier_id == id)
            .map(|s| format!("{} ({})", s.company_name, id))
            .unwrap_or_else(|| "Select ...".to_string())
    }
}
