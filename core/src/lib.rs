//! Client core for the medicine inventory service.
//!
//! # Overview
//! Three layers, each usable on its own:
//! - `http`: request/response data and the `Transport` trait, with a
//!   blocking `ureq` implementation.
//! - `client`: `MedicineClient` builds and parses the four collection calls
//!   without I/O; `MedicineApi` runs them over a `Transport`.
//! - `controller`: `MedicineController` holds the table and form state a
//!   front end displays and keeps it in step with the backend.
//!
//! # Design
//! - Transport failures and HTTP error statuses are distinct `ApiError`
//!   variants; nothing is retried.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

pub use client::{MedicineApi, MedicineClient};
pub use config::ClientConfig;
pub use controller::{DeleteOutcome, FormField, FormMode, MedicineController, Prompt, SubmitOutcome};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::{Medicine, MedicineDetails, MedicineId};
