use super::{cors::build_cors_layer, handlers::*};
use crate::{config::Cors, farm::FarmService};
use anyhow::Result;
use axum::{
	Router,
	routing::{get, post},
};

/// All farm routes plus `/health`, wrapped in the CORS layer.
pub fn build_router(service: FarmService, cors: &Cors) -> Result<Router> {
	let router = Router::new()
		.route("/health", get(health))
		.route("/api/farms", get(list_farms).post(create_farm))
		.route("/api/farms/import", post(import_geojson))
		.route("/api/farms/{id}", get(get_farm).put(update_farm).delete(delete_farm))
		.route("/api/farms/{id}/geojson", get(export_geojson))
		.with_state(service)
		.layer(build_cors_layer(cors)?);
	Ok(router)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::MemoryStore;
	use axum::{
		body::Body,
		http::{Request, StatusCode, header},
	};
	use farmgeo_geometry::Srid;
	use pretty_assertions::assert_eq;
	use serde_json::{Value, json};
	use std::sync::Arc;
	use tower::ServiceExt as _;

	fn app() -> Router {
		let service = FarmService::new(Arc::new(MemoryStore::new()), Srid::WGS84);
		build_router(service, &Cors::default()).unwrap()
	}

	async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, String) {
		let mut req = Request::builder().method(method).uri(path);
		let body = match body {
			Some(value) => {
				req = req.header(header::CONTENT_TYPE, "application/json");
				Body::from(value.to_string())
			}
			None => Body::empty(),
		};
		let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
		let status = res.status();
		let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8_lossy(&bytes).into_owned())
	}

	fn lot_a() -> Value {
		json!({
			"name": "Lot A",
			"coordinates": [
				{ "lat": 0, "lng": 0 },
				{ "lat": 1, "lng": 0 },
				{ "lat": 1, "lng": 1 },
				{ "lat": 0, "lng": 1 }
			]
		})
	}

	fn parse(body: &str) -> Value {
		serde_json::from_str(body).unwrap()
	}

	#[tokio::test]
	async fn health() {
		let (status, body) = send(&app(), "GET", "/health", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(parse(&body), json!({ "status": "ok" }));
	}

	#[tokio::test]
	async fn create_and_read_back() {
		let app = app();
		let (status, body) = send(&app, "POST", "/api/farms", Some(lot_a())).await;
		assert_eq!(status, StatusCode::CREATED);
		assert_eq!(parse(&body), json!({ "id": 1 }));

		let (status, body) = send(&app, "GET", "/api/farms/1", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(
			parse(&body),
			json!({
				"id": 1,
				"name": "Lot A",
				"coordinates": [
					{ "lat": 0.0, "lng": 0.0 },
					{ "lat": 0.0, "lng": 1.0 },
					{ "lat": 1.0, "lng": 1.0 },
					{ "lat": 1.0, "lng": 0.0 },
					{ "lat": 0.0, "lng": 0.0 }
				]
			})
		);

		let (status, body) = send(&app, "GET", "/api/farms", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(parse(&body), json!([{ "id": 1, "name": "Lot A" }]));
	}

	#[tokio::test]
	async fn rejected_boundaries() {
		let app = app();
		let two_points = json!({ "coordinates": [{ "lat": 0, "lng": 0 }, { "lat": 1, "lng": 1 }] });
		let (status, body) = send(&app, "POST", "/api/farms", Some(two_points)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "need at least 3 distinct coordinates to form a polygon, got 2");

		let (status, body) = send(&app, "POST", "/api/farms", Some(json!({ "name": "Lot C" }))).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "need at least 3 distinct coordinates to form a polygon, got 0");

		let figure_eight = json!({ "coordinates": [
			{ "lat": 0, "lng": 0 }, { "lat": 2, "lng": 2 }, { "lat": 0, "lng": 2 }, { "lat": 2, "lng": 0 }
		] });
		let (status, body) = send(&app, "POST", "/api/farms", Some(figure_eight)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body.starts_with("invalid polygon (self-intersection or other geometry error): "));

		let mut long_name = lot_a();
		long_name["name"] = json!("x".repeat(300));
		let (status, _) = send(&app, "POST", "/api/farms", Some(long_name)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);

		let (_, body) = send(&app, "GET", "/api/farms", None).await;
		assert_eq!(parse(&body), json!([]));
	}

	#[tokio::test]
	async fn unknown_ids() {
		let app = app();
		assert_eq!(send(&app, "GET", "/api/farms/7", None).await.0, StatusCode::NOT_FOUND);
		assert_eq!(send(&app, "PUT", "/api/farms/7", Some(lot_a())).await.0, StatusCode::NOT_FOUND);
		assert_eq!(send(&app, "DELETE", "/api/farms/7", None).await.0, StatusCode::NOT_FOUND);
		assert_eq!(send(&app, "GET", "/api/farms/7/geojson", None).await.0, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn update_and_delete() {
		let app = app();
		send(&app, "POST", "/api/farms", Some(lot_a())).await;

		let bigger = json!({ "coordinates": [
			{ "lat": 0, "lng": 0 }, { "lat": 2, "lng": 0 }, { "lat": 2, "lng": 2 }, { "lat": 0, "lng": 2 }
		] });
		let (status, _) = send(&app, "PUT", "/api/farms/1", Some(bigger)).await;
		assert_eq!(status, StatusCode::NO_CONTENT);

		let (_, body) = send(&app, "GET", "/api/farms/1", None).await;
		let farm = parse(&body);
		assert_eq!(farm["name"], "Lot A");
		assert_eq!(farm["coordinates"][2], json!({ "lat": 2.0, "lng": 2.0 }));

		assert_eq!(send(&app, "DELETE", "/api/farms/1", None).await.0, StatusCode::NO_CONTENT);
		assert_eq!(send(&app, "GET", "/api/farms/1", None).await.0, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn geojson_round_trip() {
		let app = app();
		let feature = json!({
			"type": "Feature",
			"properties": { "name": "Imported" },
			"geometry": { "type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]] }
		});
		let (status, body) = send(&app, "POST", "/api/farms/import", Some(feature)).await;
		assert_eq!(status, StatusCode::CREATED);
		assert_eq!(parse(&body), json!({ "id": 1 }));

		let (status, body) = send(&app, "GET", "/api/farms/1/geojson", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(
			parse(&body),
			json!({
				"type": "Feature",
				"geometry": {
					"type": "Polygon",
					"coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
				},
				"properties": { "name": "Imported" }
			})
		);

		let (status, _) = send(&app, "POST", "/api/farms/import", Some(json!({ "type": "Point", "coordinates": [0, 0] }))).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}
}
