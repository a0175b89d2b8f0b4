//! The simulated persistence API over the question collection.

use chrono::{SecondsFormat, Utc};
use std::fmt;

use crate::api::config::ApiConfiguration;
use crate::error::ApiError;
use crate::model::{Question, QuestionId, QuestionPatch, StoredQuestion};
use crate::providers::{RandomProvider, TimeProvider};
use crate::storage::{JsonSerializer, SlotSerializer, StorageSlot};

/// Alphabet for store-assigned identifiers (base-36, 9 characters).
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 9;

/// The four operations the simulator can fail.
///
/// Carried inside [`ApiError::Injected`] so the error message identifies
/// which call was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `add_question`
    Save,
    /// `get_questions`
    Fetch,
    /// `update_question`
    Update,
    /// `delete_question`
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Save => "save question",
            Operation::Fetch => "fetch questions",
            Operation::Update => "update question",
            Operation::Delete => "delete question",
        };
        write!(f, "{name}")
    }
}

/// Simulated persistence backend for the question collection.
///
/// Every operation, independent of outcome, first sleeps a latency drawn
/// uniformly from the configured range, then rolls the injected-failure
/// probability before touching storage. The whole collection is loaded,
/// mutated, and rewritten wholesale under a single slot key; concurrent
/// writers therefore race last-writer-wins, an accepted property of the
/// simulated model.
///
/// Timing and randomness come from the provider parameters, so tests drive
/// the simulator under a paused clock with a forced or seeded randomness
/// source.
pub struct QuestionApi<T, R, S> {
    time: T,
    random: R,
    slot: S,
    serializer: JsonSerializer,
    config: ApiConfiguration,
}

impl<T, R, S> QuestionApi<T, R, S>
where
    T: TimeProvider,
    R: RandomProvider,
    S: StorageSlot,
{
    /// Create a simulator over the given providers and slot.
    pub fn new(time: T, random: R, slot: S, config: ApiConfiguration) -> Self {
        Self {
            time,
            random,
            slot,
            serializer: JsonSerializer::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ApiConfiguration {
        &self.config
    }

    /// Create a question: assign a fresh id and creation timestamp, append,
    /// persist, and return the stored record.
    pub async fn add_question(&self, question: Question) -> Result<StoredQuestion, ApiError> {
        self.simulate_call(Operation::Save).await?;

        let mut questions = self.read_collection().await?;
        let record = StoredQuestion {
            id: self.generate_id(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            question,
        };
        questions.push(record.clone());
        self.write_collection(&questions).await?;

        tracing::debug!("created question {} ({})", record.id, record.question.label);
        Ok(record)
    }

    /// List the full collection in append order.
    pub async fn get_questions(&self) -> Result<Vec<StoredQuestion>, ApiError> {
        self.simulate_call(Operation::Fetch).await?;
        self.read_collection().await
    }

    /// Shallow-merge the patch into the record with the given id, persist,
    /// and return the merged record. Fails with [`ApiError::NotFound`] when
    /// no record has that id.
    pub async fn update_question(
        &self,
        id: &QuestionId,
        patch: QuestionPatch,
    ) -> Result<StoredQuestion, ApiError> {
        self.simulate_call(Operation::Update).await?;

        let mut questions = self.read_collection().await?;
        let record = questions
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| ApiError::NotFound(id.clone()))?;

        patch.apply(&mut record.question);
        let merged = record.clone();
        self.write_collection(&questions).await?;

        tracing::debug!("updated question {}", merged.id);
        Ok(merged)
    }

    /// Remove the record with the given id. Lenient: a missing id is a
    /// successful no-op, the collection is persisted either way.
    pub async fn delete_question(&self, id: &QuestionId) -> Result<(), ApiError> {
        self.simulate_call(Operation::Delete).await?;

        let mut questions = self.read_collection().await?;
        questions.retain(|record| &record.id != id);
        self.write_collection(&questions).await?;

        tracing::debug!("deleted question {}", id);
        Ok(())
    }

    /// Shared preamble of every operation: the latency envelope, then the
    /// failure roll. Runs before storage is touched so an injected failure
    /// never leaves a partial write behind.
    async fn simulate_call(&self, operation: Operation) -> Result<(), ApiError> {
        self.time.sleep(self.random_latency()).await;

        if self.random.random_bool(self.config.failure_probability) {
            tracing::debug!("injecting fault into {}", operation);
            return Err(ApiError::Injected { operation });
        }
        Ok(())
    }

    /// Draw a latency uniformly from the configured range.
    fn random_latency(&self) -> std::time::Duration {
        let start = self.config.latency.start.as_millis() as u64;
        let end = self.config.latency.end.as_millis() as u64;
        let millis = if start >= end {
            start
        } else {
            self.random.random_range(start..end)
        };
        std::time::Duration::from_millis(millis)
    }

    /// Generate a 9-character base-36 identifier.
    fn generate_id(&self) -> QuestionId {
        let id: String = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[self.random.random_range(0..ID_ALPHABET.len())] as char)
            .collect();
        QuestionId::new(id)
    }

    async fn read_collection(&self) -> Result<Vec<StoredQuestion>, ApiError> {
        match self.slot.load(&self.config.storage_key).await? {
            Some(bytes) => Ok(self.serializer.deserialize(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write_collection(&self, questions: &[StoredQuestion]) -> Result<(), ApiError> {
        let bytes = self.serializer.serialize(&questions)?;
        self.slot.store(&self.config.storage_key, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{SeededRandomProvider, TokioTimeProvider};
    use crate::storage::MemorySlot;

    fn reliable_api() -> QuestionApi<TokioTimeProvider, SeededRandomProvider, MemorySlot> {
        QuestionApi::new(
            TokioTimeProvider::new(),
            SeededRandomProvider::new(42),
            MemorySlot::new(),
            ApiConfiguration::reliable(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn generated_ids_are_base36_and_nine_chars() {
        let api = reliable_api();
        for _ in 0..32 {
            let id = api.generate_id();
            assert_eq!(id.as_str().len(), 9);
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn latency_draw_stays_in_range() {
        let api = reliable_api();
        let range = api.config().latency.clone();
        for _ in 0..100 {
            let latency = api.random_latency();
            assert!(latency >= range.start && latency < range.end);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn empty_latency_range_uses_lower_bound() {
        let mut config = ApiConfiguration::reliable();
        config.latency = std::time::Duration::from_millis(5)..std::time::Duration::from_millis(5);
        let api = QuestionApi::new(
            TokioTimeProvider::new(),
            SeededRandomProvider::new(42),
            MemorySlot::new(),
            config,
        );

        assert_eq!(api.random_latency(), std::time::Duration::from_millis(5));
    }
}
