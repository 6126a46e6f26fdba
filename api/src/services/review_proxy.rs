//! Client for the external review service.
//!
//! When `REVIEW_SERVICE_URL` is set, new reviews are pushed to it and its own
//! review listing can be read through `GET /api/apartments/{id}/reviews/external`.

use db::models::review;
use serde_json::{Value, json};
use services::{ServiceError, ServiceResult};
use std::time::Duration;
use util::config::AppConfig;

pub struct ReviewProxy {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewProxy {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Upstream(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The configured proxy, or `None` when no review service URL is set.
    pub fn from_config() -> ServiceResult<Option<Self>> {
        let (url, timeout_ms) = {
            let cfg = AppConfig::global();
            (cfg.review_service_url.clone(), cfg.review_service_timeout_ms)
        };
        url.map(|url| Self::new(url, Duration::from_millis(timeout_ms)))
            .transpose()
    }

    /// `GET {base}/reviews?apartmentId={id}`, returned as raw JSON.
    pub async fn fetch_reviews(&self, apartment_id: i64) -> ServiceResult<Value> {
        let url = format!("{}/reviews", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("apartmentId", apartment_id)])
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(format!("Review service unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(ServiceError::Upstream(format!(
                "Review service responded with {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ServiceError::Upstream(format!("Invalid review service response: {e}")))
    }

    /// `POST {base}/reviews` with the stored review.
    pub async fn forward(&self, review: &review::Model) -> ServiceResult<()> {
        let body = json!({
            "id": review.id,
            "apartmentId": review.apartment_id,
            "userId": review.user_id,
            "rating": review.rating,
            "comment": review.comment,
            "reviewedAt": review.reviewed_at.to_rfc3339(),
        });

        let response = self
            .client
            .post(format!("{}/reviews", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(format!("Review service unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(ServiceError::Upstream(format!(
                "Review service responded with {}",
                response.status()
            )));
        }
        Ok(())
    }
}

/// Pushes a new review to the review service without blocking the caller.
/// Failures are logged only.
pub fn forward_in_background(review: review::Model) {
    let proxy = match ReviewProxy::from_config() {
        Ok(Some(proxy)) => proxy,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!(error = %e, "review forwarding disabled");
            return;
        }
    };

    tokio::spawn(async move {
        if let Err(e) = proxy.forward(&review).await {
            tracing::warn!(review_id = review.id, error = %e, "failed to forward review");
        } else {
            tracing::debug!(review_id = review.id, "review forwarded");
        }
    });
}
