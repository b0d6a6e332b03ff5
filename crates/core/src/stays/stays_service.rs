use async_trait::async_trait;
use chrono::Local;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use zentime_ai::AiGateway;

use crate::errors::{Error, Result};
use crate::stays::{
    seed_stays, Review, Stay, BOOKING_CONFIRMED_NOTICE, FALLBACK_ADVICE, FEEDBACK_RATING,
    FEEDBACK_USER_NAME,
};

/// Trait for stay catalog operations.
#[async_trait]
pub trait StayServiceTrait: Send + Sync {
    /// Snapshot of the catalog.
    fn get_stays(&self) -> Vec<Stay>;

    fn get_stay(&self, stay_id: &str) -> Result<Stay>;

    /// Fetch AI travel advice for a stay's location.
    ///
    /// Returns `Ok(None)` when a later fetch superseded this one, so stale
    /// advice is discarded rather than overwriting a newer selection. A
    /// gateway failure degrades to the fallback advisory text.
    async fn fetch_advice(&self, stay_id: &str) -> Result<Option<String>>;

    /// Summarize a feedback comment into tags and prepend the resulting
    /// review to the stay's review list.
    async fn submit_feedback(&self, stay_id: &str, comment: &str) -> Result<Review>;

    /// Confirm a booking.
    ///
    /// Known no-op: the current behavior deducts no credits and persists
    /// nothing; it only returns the escrow confirmation notice. The escrow
    /// narrative exists in UI text only.
    fn confirm_booking(&self, stay_id: &str) -> Result<String>;
}

/// In-memory stay catalog plus the advice fetch guard.
pub struct StayService {
    gateway: Arc<dyn AiGateway>,
    stays: RwLock<Vec<Stay>>,
    advice_seq: AtomicU64,
}

impl StayService {
    /// Create a service over the fixed seed catalog.
    pub fn new(gateway: Arc<dyn AiGateway>) -> Self {
        Self::with_stays(gateway, seed_stays())
    }

    /// Create a service over an explicit catalog (tests).
    pub fn with_stays(gateway: Arc<dyn AiGateway>, stays: Vec<Stay>) -> Self {
        Self {
            gateway,
            stays: RwLock::new(stays),
            advice_seq: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl StayServiceTrait for StayService {
    fn get_stays(&self) -> Vec<Stay> {
        self.stays.read().unwrap().clone()
    }

    fn get_stay(&self, stay_id: &str) -> Result<Stay> {
        self.stays
            .read()
            .unwrap()
            .iter()
            .find(|s| s.id == stay_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("stay {}", stay_id)))
    }

    async fn fetch_advice(&self, stay_id: &str) -> Result<Option<String>> {
        let stay = self.get_stay(stay_id)?;

        // Monotonic ticket; a later fetch invalidates every earlier one.
        let ticket = self.advice_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let advice = match self.gateway.generate_travel_advice(&stay.location).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Travel advice fetch failed for {}: {}", stay.location, e);
                FALLBACK_ADVICE.to_string()
            }
        };

        if self.advice_seq.load(Ordering::SeqCst) != ticket {
            debug!("Discarding stale advice for stay {}", stay_id);
            return Ok(None);
        }
        Ok(Some(advice))
    }

    async fn submit_feedback(&self, stay_id: &str, comment: &str) -> Result<Review> {
        if comment.trim().is_empty() {
            return Err(Error::Validation("comment must not be empty".to_string()));
        }
        // Validate the target before the round trip.
        self.get_stay(stay_id)?;

        let tags = self.gateway.summarize_feedback(comment).await?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            user_name: FEEDBACK_USER_NAME.to_string(),
            rating: FEEDBACK_RATING,
            comment: comment.to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            tags,
        };

        // Replace only the matching stay; every other entry is untouched.
        let mut stays = self.stays.write().unwrap();
        *stays = stays
            .iter()
            .map(|s| {
                if s.id == stay_id {
                    let mut updated = s.clone();
                    updated.reviews.insert(0, review.clone());
                    updated
                } else {
                    s.clone()
                }
            })
            .collect();

        Ok(review)
    }

    fn confirm_booking(&self, stay_id: &str) -> Result<String> {
        let stay = self.get_stay(stay_id)?;
        debug!(
            "Booking confirmed for stay {} ({} ZT): no deduction performed",
            stay.id, stay.credit_cost
        );
        Ok(BOOKING_CONFIRMED_NOTICE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zentime_ai::{FakeAiGateway, FakeResponse};

    fn service_with(gateway: FakeAiGateway) -> StayService {
        StayService::new(Arc::new(gateway))
    }

    #[test]
    fn test_seed_catalog_shape() {
        let service = service_with(FakeAiGateway::new());
        let stays = service.get_stays();
        assert_eq!(stays.len(), 3);
        assert_eq!(stays[0].id, "s1");
        assert_eq!(stays[0].reviews.len(), 2);
        assert!(stays[2].reviews.is_empty());
    }

    #[test]
    fn test_get_stay_unknown_id() {
        let service = service_with(FakeAiGateway::new());
        assert!(matches!(
            service.get_stay("missing"),
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_advice_returns_text() {
        let gateway = FakeAiGateway::with_responses(vec![FakeResponse::Advice(
            "建議一\n建議二\n建議三".to_string(),
        )]);
        let service = service_with(gateway);

        let advice = service.fetch_advice("s1").await.unwrap();
        assert_eq!(advice.as_deref(), Some("建議一\n建議二\n建議三"));
    }

    #[tokio::test]
    async fn test_fetch_advice_degrades_to_fallback() {
        let service = service_with(FakeAiGateway::failing("timeout"));
        let advice = service.fetch_advice("s2").await.unwrap();
        assert_eq!(advice.as_deref(), Some(FALLBACK_ADVICE));
    }

    /// Gateway whose first advice call parks until released, so a test can
    /// interleave a second fetch before the first resolves.
    struct GatedGateway {
        gate: Arc<tokio::sync::Notify>,
        first_call: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl AiGateway for GatedGateway {
        async fn evaluate_glasses(
            &self,
            _description: &str,
            _image: Option<&zentime_ai::ImageAttachment>,
        ) -> std::result::Result<zentime_ai::GlassesEvaluation, zentime_ai::AiError> {
            unreachable!("not used by advice tests")
        }

        async fn generate_travel_advice(
            &self,
            location: &str,
        ) -> std::result::Result<String, zentime_ai::AiError> {
            if !self.first_call.swap(true, Ordering::SeqCst) {
                self.gate.notified().await;
            }
            Ok(format!("{} 的建議", location))
        }

        async fn summarize_feedback(
            &self,
            _comment: &str,
        ) -> std::result::Result<Vec<String>, zentime_ai::AiError> {
            unreachable!("not used by advice tests")
        }
    }

    #[tokio::test]
    async fn test_stale_advice_is_discarded() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let gateway = GatedGateway {
            gate: gate.clone(),
            first_call: std::sync::atomic::AtomicBool::new(false),
        };
        let service = Arc::new(StayService::new(Arc::new(gateway)));

        // First fetch claims its ticket, then parks inside the gateway.
        let parked = service.clone();
        let first = tokio::spawn(async move { parked.fetch_advice("s1").await });
        while service.advice_seq.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        // Second fetch completes while the first is still pending.
        let second = service.fetch_advice("s3").await.unwrap();
        assert_eq!(second.as_deref(), Some("東京 (中野當地生活) 的建議"));

        // Release the first fetch; its response is now stale and discarded.
        gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert!(first.is_none());
    }

    #[tokio::test]
    async fn test_submit_feedback_prepends_review() {
        let gateway = FakeAiGateway::with_responses(vec![FakeResponse::Tags(vec![
            "寧靜".to_string(),
            "文化體驗".to_string(),
            "放鬆".to_string(),
        ])]);
        let service = service_with(gateway);

        let review = service.submit_feedback("s1", "寧靜美好").await.unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.user_name, "您");
        assert_eq!(review.tags, vec!["寧靜", "文化體驗", "放鬆"]);

        let stay = service.get_stay("s1").unwrap();
        assert_eq!(stay.reviews.len(), 3);
        assert_eq!(stay.reviews[0].id, review.id);
        assert_eq!(stay.reviews[1].id, "r1");
    }

    #[tokio::test]
    async fn test_submit_feedback_leaves_other_stays_untouched() {
        let gateway = FakeAiGateway::with_responses(vec![FakeResponse::Tags(vec![
            "有機生活".to_string(),
        ])]);
        let service = service_with(gateway);
        let before: Vec<Stay> = service
            .get_stays()
            .into_iter()
            .filter(|s| s.id != "s2")
            .collect();

        service.submit_feedback("s2", "蔬菜很甜").await.unwrap();

        let after: Vec<Stay> = service
            .get_stays()
            .into_iter()
            .filter(|s| s.id != "s2")
            .collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_submit_feedback_empty_comment_rejected() {
        let service = service_with(FakeAiGateway::new());
        assert!(matches!(
            service.submit_feedback("s1", "  ").await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_feedback_gateway_failure_leaves_state() {
        let service = service_with(FakeAiGateway::failing("service error"));
        let before = service.get_stays();

        let result = service.submit_feedback("s1", "很棒的住宿").await;
        assert!(matches!(result, Err(Error::Gateway(_))));
        assert_eq!(service.get_stays(), before);
    }

    #[test]
    fn test_confirm_booking_is_a_no_op() {
        let service = service_with(FakeAiGateway::new());
        let before = service.get_stays();

        let notice = service.confirm_booking("s1").unwrap();
        assert_eq!(notice, BOOKING_CONFIRMED_NOTICE);
        assert_eq!(service.get_stays(), before);
    }
}
