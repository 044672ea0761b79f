//! Request handlers and the mapping from service errors to HTTP status codes.
//!
//! - geometry and name errors → 400 with the reason as plain text
//! - unknown farm ids → 404
//! - everything else → 500, logged with its error chain

use crate::farm::{FarmDetails, FarmError, FarmInput, FarmService, FarmSummary};
use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use farmgeo_geometry::{GeoJsonFeature, GeometryError};
use serde_json::{Value, json};

pub struct ApiError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for ApiError {
	fn from(err: E) -> Self {
		ApiError(err.into())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		if let Some(err) = self.0.downcast_ref::<GeometryError>() {
			log::debug!("send 400: {err}");
			return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
		}
		match self.0.downcast_ref::<FarmError>() {
			Some(err @ FarmError::NotFound { .. }) => {
				log::debug!("send 404: {err}");
				(StatusCode::NOT_FOUND, err.to_string()).into_response()
			}
			Some(err @ FarmError::NameTooLong { .. }) => {
				log::debug!("send 400: {err}");
				(StatusCode::BAD_REQUEST, err.to_string()).into_response()
			}
			None => {
				log::warn!("send 500: {:#}", self.0);
				(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
			}
		}
	}
}

type ApiResult<T> = Result<T, ApiError>;

fn not_found(id: i64) -> ApiError {
	ApiError::from(FarmError::NotFound { id })
}

pub async fn health() -> Json<Value> {
	Json(json!({ "status": "ok" }))
}

pub async fn list_farms(State(service): State<FarmService>) -> ApiResult<Json<Vec<FarmSummary>>> {
	log::debug!("list farms");
	Ok(Json(service.list().await?))
}

pub async fn create_farm(
	State(service): State<FarmService>,
	Json(input): Json<FarmInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
	log::debug!("create farm with {} vertices", input.coordinates.len());
	let farm = service.create(input).await?;
	Ok((StatusCode::CREATED, Json(json!({ "id": farm.id }))))
}

pub async fn get_farm(State(service): State<FarmService>, Path(id): Path<i64>) -> ApiResult<Json<FarmDetails>> {
	log::debug!("get farm {id}");
	let farm = service.get(id).await?.ok_or_else(|| not_found(id))?;
	Ok(Json(farm.details()))
}

pub async fn update_farm(
	State(service): State<FarmService>,
	Path(id): Path<i64>,
	Json(input): Json<FarmInput>,
) -> ApiResult<StatusCode> {
	log::debug!("update farm {id} with {} vertices", input.coordinates.len());
	service.update(id, input).await?;
	Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_farm(State(service): State<FarmService>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
	log::debug!("delete farm {id}");
	if service.delete(id).await? {
		Ok(StatusCode::NO_CONTENT)
	} else {
		Err(not_found(id))
	}
}

pub async fn export_geojson(
	State(service): State<FarmService>,
	Path(id): Path<i64>,
) -> ApiResult<Json<GeoJsonFeature>> {
	log::debug!("export farm {id} as GeoJSON");
	let feature = service.export_geojson(id).await?.ok_or_else(|| not_found(id))?;
	Ok(Json(feature))
}

pub async fn import_geojson(State(service): State<FarmService>, body: String) -> ApiResult<(StatusCode, Json<Value>)> {
	log::debug!("import farm from {} bytes of GeoJSON", body.len());
	let farm = service.import_geojson(&body).await?;
	Ok((StatusCode::CREATED, Json(json!({ "id": farm.id }))))
}
