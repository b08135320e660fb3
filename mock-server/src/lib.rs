use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub price: String,
    pub stock: String,
}

#[derive(Deserialize)]
pub struct MedicineDetails {
    pub name: String,
    pub price: String,
    pub stock: String,
}

/// Insertion-ordered store; list responses preserve creation order.
pub type Db = Arc<RwLock<Vec<Medicine>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-populated with `seed`, served in the given order.
pub fn app_with(seed: Vec<Medicine>) -> Router {
    let db: Db = Arc::new(RwLock::new(seed));
    Router::new()
        .route("/medicines", get(list_medicines).post(create_medicine))
        .route(
            "/medicines/{id}",
            get(get_medicine).put(update_medicine).delete(delete_medicine),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, seed: Vec<Medicine>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed)).await
}

async fn list_medicines(State(db): State<Db>) -> Json<Vec<Medicine>> {
    Json(db.read().await.clone())
}

async fn create_medicine(
    State(db): State<Db>,
    Json(input): Json<MedicineDetails>,
) -> (StatusCode, Json<Medicine>) {
    let medicine = Medicine {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        price: input.price,
        stock: input.stock,
    };
    tracing::debug!(id = %medicine.id, "created medicine");
    db.write().await.push(medicine.clone());
    (StatusCode::CREATED, Json(medicine))
}

async fn get_medicine(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Medicine>, StatusCode> {
    let medicines = db.read().await;
    medicines
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_medicine(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<MedicineDetails>,
) -> Result<Json<Medicine>, StatusCode> {
    let mut medicines = db.write().await;
    let medicine = medicines
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    medicine.name = input.name;
    medicine.price = input.price;
    medicine.stock = input.stock;
    tracing::debug!(%id, "updated medicine");
    Ok(Json(medicine.clone()))
}

async fn delete_medicine(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Medicine>, StatusCode> {
    let mut medicines = db.write().await;
    let pos = medicines
        .iter()
        .position(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(%id, "deleted medicine");
    Ok(Json(medicines.remove(pos)))
}
