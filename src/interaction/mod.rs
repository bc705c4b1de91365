//! User-facing interactions the page cannot perform itself.

mod scripted;

pub use scripted::{RecordingNavigator, ScriptedConfirmation};

use async_trait::async_trait;

/// Yes/no prompt shown before a destructive or navigational action.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Suspends until the user answers. `true` only on explicit affirmation.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Moves the user to another view.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}
