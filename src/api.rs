use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

use gemdesk_core::protocol::{
    Appointment, AppointmentStatus, AppointmentStatusUpdate, Astrologer, AstrologerDraft, Banner,
    BlogDraft, BlogPost, Customer, NavbarOffer, OfferDraft, OrderStatus, OrderStatusUpdate,
    OrderSummary, ProductRecord, ReportsSummary,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Backend base URL. A build-time override wins; otherwise the API is
/// assumed to live under the page's own origin.
pub(crate) fn default_api_base() -> Option<String> {
    if let Some(raw) = option_env!("GEMDESK_API_BASE")
        .or(option_env!("TRUNK_PUBLIC_GEMDESK_API_BASE"))
        .or(option_env!("TRUNK_PUBLIC_API_BASE"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    let window = web_sys::window()?;
    let origin = window.location().origin().ok()?;
    if origin.trim().is_empty() {
        return None;
    }
    Some(format!("{origin}/api"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn from_env() -> Self {
        Self::with_base(default_api_base().unwrap_or_else(|| "/api".to_string()))
    }

    fn with_base(base: impl Into<String>) -> Self {
        let mut base = base.into().trim().to_string();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = gloo::net::http::Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(ensure_ok(response).await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = gloo::net::http::Request::post(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(ensure_ok(response).await?).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = gloo::net::http::Request::put(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(ensure_ok(response).await?).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        // No explicit content type: the browser supplies the multipart
        // boundary itself.
        let response = gloo::net::http::Request::post(&self.url(path))
            .body(form)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(ensure_ok(response).await?).await
    }

    async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let response = gloo::net::http::Request::put(&self.url(path))
            .body(form)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(ensure_ok(response).await?).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = gloo::net::http::Request::delete(&self.url(path))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        ensure_ok(response).await?;
        Ok(())
    }

    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        self.get_json("products").await
    }

    pub async fn create_product(&self, form: FormData) -> Result<ProductRecord, ApiError> {
        self.post_multipart("products", form).await
    }

    pub async fn update_product(
        &self,
        id: u64,
        form: FormData,
    ) -> Result<ProductRecord, ApiError> {
        self.put_multipart(&format!("products/{id}"), form).await
    }

    pub async fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("products/{id}")).await
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        self.get_json("orders").await
    }

    pub async fn update_order_status(
        &self,
        id: u64,
        status: OrderStatus,
    ) -> Result<OrderSummary, ApiError> {
        self.put_json(&format!("orders/{id}/status"), &OrderStatusUpdate { status })
            .await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get_json("customers").await
    }

    pub async fn list_banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.get_json("banners").await
    }

    pub async fn create_banner(&self, form: FormData) -> Result<Banner, ApiError> {
        self.post_multipart("banners", form).await
    }

    pub async fn delete_banner(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("banners/{id}")).await
    }

    pub async fn list_offers(&self) -> Result<Vec<NavbarOffer>, ApiError> {
        self.get_json("offers").await
    }

    pub async fn create_offer(&self, draft: &OfferDraft) -> Result<NavbarOffer, ApiError> {
        self.post_json("offers", draft).await
    }

    pub async fn update_offer(
        &self,
        id: u64,
        draft: &OfferDraft,
    ) -> Result<NavbarOffer, ApiError> {
        self.put_json(&format!("offers/{id}"), draft).await
    }

    pub async fn delete_offer(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("offers/{id}")).await
    }

    pub async fn list_astrologers(&self) -> Result<Vec<Astrologer>, ApiError> {
        self.get_json("astrologers").await
    }

    pub async fn create_astrologer(
        &self,
        draft: &AstrologerDraft,
    ) -> Result<Astrologer, ApiError> {
        self.post_json("astrologers", draft).await
    }

    pub async fn update_astrologer(
        &self,
        id: u64,
        draft: &AstrologerDraft,
    ) -> Result<Astrologer, ApiError> {
        self.put_json(&format!("astrologers/{id}"), draft).await
    }

    pub async fn delete_astrologer(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("astrologers/{id}")).await
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("appointments").await
    }

    pub async fn update_appointment_status(
        &self,
        id: u64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError> {
        self.put_json(
            &format!("appointments/{id}"),
            &AppointmentStatusUpdate { status },
        )
        .await
    }

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.get_json("blogs").await
    }

    pub async fn create_blog(&self, draft: &BlogDraft) -> Result<BlogPost, ApiError> {
        self.post_json("blogs", draft).await
    }

    pub async fn update_blog(&self, id: u64, draft: &BlogDraft) -> Result<BlogPost, ApiError> {
        self.put_json(&format!("blogs/{id}"), draft).await
    }

    pub async fn delete_blog(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("blogs/{id}")).await
    }

    pub async fn reports_summary(&self) -> Result<ReportsSummary, ApiError> {
        self.get_json("reports/summary").await
    }
}

async fn ensure_ok(response: gloo::net::http::Response) -> Result<gloo::net::http::Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => response.status_text(),
    };
    Err(ApiError::Http { status, message })
}

async fn decode_response<T: DeserializeOwned>(
    response: gloo::net::http::Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_loses_trailing_slashes() {
        let client = ApiClient::with_base("https://shop.example/api//");
        assert_eq!(client.url("products"), "https://shop.example/api/products");
    }

    #[test]
    fn url_joins_with_single_slash() {
        let client = ApiClient::with_base("https://shop.example/api");
        assert_eq!(
            client.url("/orders/7/status"),
            "https://shop.example/api/orders/7/status"
        );
    }
}
