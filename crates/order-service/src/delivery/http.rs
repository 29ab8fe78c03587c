//! reqwest-backed [`DeliveryNotifier`].

use crate::delivery::{DeliveryError, DeliveryNotifier, DeliveryRequest};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, instrument};

/// Posts delivery requests to `{base_url}/api/delivery/create/{order_id}`.
///
/// Order details travel as query parameters; the body is empty and the response body is never
/// read.
#[derive(Debug, Clone)]
pub struct HttpDeliveryNotifier {
    client: Client,
    base_url: String,
}

impl HttpDeliveryNotifier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Builds the delivery-creation URL for `request`.
    pub fn delivery_url(&self, request: &DeliveryRequest) -> Result<Url, DeliveryError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/api/delivery/create/{}", request.order_id))
            .map_err(|e| DeliveryError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("deliveryAddress", &request.delivery_address)
            .append_pair("contact", &request.contact.to_string())
            .append_pair("totalCost", &request.total_cost.to_string());
        Ok(url)
    }
}

#[async_trait]
impl DeliveryNotifier for HttpDeliveryNotifier {
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    async fn notify_delivery(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let url = self.delivery_url(request)?;
        debug!(%url, "Posting delivery request");

        let response = self.client.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }
}
