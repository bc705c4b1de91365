use super::action::MutationKind;
use super::outcome::{ActionOutcome, FeedbackCategory};
use super::session::EditSession;
use crate::core::{Editable, FaultResult};
use crate::services::EntityStore;
use crate::validation::BusinessRuleSet;
use tracing::{debug, info, warn};

/// Result of the persistence step before it is rendered into feedback.
enum Persisted<K> {
    Created(K),
    Affected(u64),
}

/// Runs one validated mutation against an [`EditSession`].
///
/// Every run resets feedback and external messages, validates the schema,
/// applies business rules, and only then calls exactly one persistence
/// operation. Faults never escape: they become feedback.
pub struct ActionPipeline<T: Editable> {
    rules: BusinessRuleSet<T>,
}

impl<T: Editable> ActionPipeline<T> {
    pub fn new(rules: BusinessRuleSet<T>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &BusinessRuleSet<T> {
        &self.rules
    }

    pub async fn run<S>(
        &self,
        kind: MutationKind,
        session: &mut EditSession<T>,
        store: &S,
    ) -> ActionOutcome<T::Key>
    where
        S: EntityStore<T> + ?Sized,
    {
        session.reset_feedback();
        let (context, messages) = session.parts_mut();
        messages.clear();

        debug!(action = %kind, context = %context.id(), "running mutation pipeline");

        if !context.validate() {
            debug!(
                action = %kind,
                errors = context.schema_messages().len(),
                "schema validation failed"
            );
            return ActionOutcome::SchemaRejected;
        }

        let violations = self.rules.evaluate(context, messages);
        if messages.any() {
            context.notify_validation_state_changed();
            debug!(action = %kind, violations, "business rules rejected entity");
            return ActionOutcome::RuleViolations(violations);
        }

        let result = Self::persist(kind, context.model_mut(), store).await;
        let entity = context.model_mut();
        let name = entity.display_name().to_string();

        let (outcome, feedback) = match result {
            Ok(Persisted::Created(key)) => {
                entity.assign_key(key);
                info!(action = %kind, key = %key, "entity created");
                (
                    ActionOutcome::Saved(key),
                    format!("{} (id: {}) has been {}", name, key, kind.participle()),
                )
            }
            Ok(Persisted::Affected(rows)) => {
                let key = entity
                    .key()
                    .map(|key| key.to_string())
                    .unwrap_or_default();
                if rows == 0 {
                    warn!(action = %kind, key = %key, "operation affected no records");
                    (
                        ActionOutcome::NotApplied,
                        format!("{} (id: {}) has not been {}", name, key, kind.participle()),
                    )
                } else {
                    info!(action = %kind, key = %key, rows, "entity changed");
                    (
                        ActionOutcome::Applied(rows),
                        format!("{} (id: {}) has been {}", name, key, kind.participle()),
                    )
                }
            }
            Err(fault) => {
                let category = FeedbackCategory::classify(&fault);
                warn!(
                    action = %kind,
                    kind = %fault.innermost().kind(),
                    error = %fault.innermost(),
                    "mutation faulted"
                );
                (ActionOutcome::Faulted(category), FeedbackCategory::render(&fault))
            }
        };

        session.set_feedback(feedback);
        outcome
    }

    async fn persist<S>(kind: MutationKind, entity: &mut T, store: &S) -> FaultResult<Persisted<T::Key>>
    where
        S: EntityStore<T> + ?Sized,
    {
        Ok(match kind {
            MutationKind::Create => Persisted::Created(store.add(entity).await?),
            MutationKind::Update => Persisted::Affected(store.update(entity).await?),
            MutationKind::Discontinue => Persisted::Affected(store.logical_delete(entity).await?),
            MutationKind::Activate => Persisted::Affected(store.activate(entity).await?),
        })
    }
}
