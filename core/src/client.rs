//! Request builders, response parsers and the transport-backed API for the
//! `medicines` collection.
//!
//! # Design
//! `MedicineClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `MedicineApi` joins the two over a `Transport`, adding
//! nothing else: no validation, retry or timeout.
//!
//! Ids are opaque, so they are percent-encoded as a single path segment.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{Medicine, MedicineDetails, MedicineId};

/// Synchronous, stateless request builder and response parser.
#[derive(Debug, Clone)]
pub struct MedicineClient {
    base_url: String,
}

impl MedicineClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_medicines(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_medicine(&self, input: &MedicineDetails) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_medicine(
        &self,
        id: &MedicineId,
        input: &MedicineDetails,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(id)?,
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_medicine(&self, id: &MedicineId) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id)?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_list_medicines(&self, response: HttpResponse) -> Result<Vec<Medicine>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_medicine(&self, response: HttpResponse) -> Result<Medicine, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_medicine(&self, response: HttpResponse) -> Result<Medicine, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// The body of a delete response is not inspected.
    pub fn parse_delete_medicine(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn collection_url(&self) -> String {
        format!("{}/medicines", self.base_url)
    }

    fn item_url(&self, id: &MedicineId) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.collection_url())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .push(id.as_str());
        Ok(url.into())
    }
}

/// The four collection operations executed over a `Transport`.
#[derive(Debug, Clone)]
pub struct MedicineApi<T> {
    client: MedicineClient,
    transport: T,
}

impl<T: Transport> MedicineApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: MedicineClient::new(base_url),
            transport,
        }
    }

    pub fn list(&self) -> Result<Vec<Medicine>, ApiError> {
        let response = self.transport.execute(self.client.build_list_medicines())?;
        self.client.parse_list_medicines(response)
    }

    pub fn create(&self, input: &MedicineDetails) -> Result<Medicine, ApiError> {
        let request = self.client.build_create_medicine(input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_medicine(response)
    }

    pub fn update(&self, id: &MedicineId, input: &MedicineDetails) -> Result<Medicine, ApiError> {
        let request = self.client.build_update_medicine(id, input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_medicine(response)
    }

    pub fn delete(&self, id: &MedicineId) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_medicine(id)?)?;
        self.client.parse_delete_medicine(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &MedicineDetails) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<D: DeserializeOwned>(body: &str) -> Result<D, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
