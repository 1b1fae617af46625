use async_trait::async_trait;
use newwork_application::FeedbackRepository;
use newwork_core::AppResult;
use newwork_domain::Feedback;
use tokio::sync::RwLock;

use crate::id_sequence::IdSequence;

/// In-memory feedback store in insertion order.
#[derive(Debug)]
pub struct InMemoryFeedbackRepository {
    items: RwLock<Vec<Feedback>>,
    ids: IdSequence,
}

impl InMemoryFeedbackRepository {
    /// Creates a repository holding `items`.
    #[must_use]
    pub fn new(items: Vec<Feedback>) -> Self {
        let ids = IdSequence::starting_after("f", items.iter().map(|item| item.id.as_str()));

        Self {
            items: RwLock::new(items),
            ids,
        }
    }
}

impl Default for InMemoryFeedbackRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn list(&self) -> AppResult<Vec<Feedback>> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, feedback_id: &str) -> AppResult<Option<Feedback>> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|item| item.id == feedback_id)
            .cloned())
    }

    async fn next_id(&self) -> AppResult<String> {
        Ok(self.ids.next_id())
    }

    async fn append(&self, feedback: Feedback) -> AppResult<()> {
        self.items.write().await.push(feedback);
        Ok(())
    }

    async fn replace(&self, feedback: Feedback) -> AppResult<bool> {
        let mut items = self.items.write().await;
        let Some(slot) = items.iter_mut().find(|item| item.id == feedback.id) else {
            return Ok(false);
        };

        *slot = feedback;
        Ok(true)
    }

    async fn remove(&self, feedback_id: &str) -> AppResult<bool> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.id == feedback_id) else {
            return Ok(false);
        };

        items.remove(index);
        Ok(true)
    }
}
