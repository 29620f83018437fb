mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use airplane_api::database::{Airplane, AirplaneStore, DatabaseError, NewAirplane};

/// Store whose pool never hands out a connection
struct UnreachableStore;

fn pool_timeout<T>() -> Result<T, DatabaseError> {
    Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl AirplaneStore for UnreachableStore {
    async fn insert(&self, _airplane: NewAirplane) -> Result<Airplane, DatabaseError> {
        pool_timeout()
    }

    async fn list(&self) -> Result<Vec<Airplane>, DatabaseError> {
        pool_timeout()
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Airplane>, DatabaseError> {
        pool_timeout()
    }

    async fn update(&self, _airplane: Airplane) -> Result<Option<Airplane>, DatabaseError> {
        pool_timeout()
    }

    async fn delete(&self, _id: i32) -> Result<Option<Airplane>, DatabaseError> {
        pool_timeout()
    }
}

async fn create(server: &common::TestServer, body: Value) -> Result<i64> {
    let res = server.client.post(server.url("/airplanes")).json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::OK, "create failed for {}", body);
    let body = res.json::<Value>().await?;
    body["id"].as_i64().ok_or_else(|| anyhow::anyhow!("missing id in {}", body))
}

#[tokio::test]
async fn create_get_delete_roundtrip() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/airplanes"))
        .json(&json!({ "producerName": "Boeing", "modelName": "B787", "passengerCapacity": 350 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Airplane Boeing B787 was saved successfully");
    let id = body["id"].as_i64().expect("id");

    let res = server.client.get(server.url(&format!("/airplanes/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "id": id, "producerName": "Boeing", "modelName": "B787", "passengerCapacity": 350 })
    );

    let res = server.client.delete(server.url(&format!("/airplanes/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Airplane Boeing B787 was deleted successfully");

    let res = server.client.get(server.url(&format!("/airplanes/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(
        body,
        json!({ "message": format!("Airplane with identifier {} was not found or never existed", id) })
    );

    Ok(())
}

#[tokio::test]
async fn list_starts_empty_and_tracks_changes() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/airplanes")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    let a = create(&server, json!({ "producerName": "Airbus", "modelName": "A320", "passengerCapacity": 180 })).await?;
    let b = create(&server, json!({ "producerName": "Embraer", "modelName": "E195", "passengerCapacity": 120 })).await?;
    let c = create(&server, json!({ "passengerCapacity": 4 })).await?;

    server.client.delete(server.url(&format!("/airplanes/{}", b))).send().await?;
    let res = server
        .client
        .put(server.url("/airplanes"))
        .json(&json!({ "id": c, "producerName": "Cessna", "modelName": "172", "passengerCapacity": 3 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let list = server.client.get(server.url("/airplanes")).send().await?.json::<Vec<Value>>().await?;
    let mut ids: Vec<i64> = list.iter().filter_map(|v| v["id"].as_i64()).collect();
    ids.sort();
    assert_eq!(ids, vec![a, c]);

    let cessna = list.iter().find(|v| v["id"] == c).expect("updated record listed");
    assert_eq!(cessna["producerName"], "Cessna");
    assert_eq!(cessna["passengerCapacity"], 3);

    Ok(())
}

#[tokio::test]
async fn create_ignores_client_id() -> Result<()> {
    let server = common::spawn_server().await?;

    let id = create(&server, json!({ "id": 500, "producerName": "Boeing", "modelName": "B737", "passengerCapacity": 200 })).await?;
    assert_ne!(id, 500);

    let res = server.client.get(server.url("/airplanes/500")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn create_rejects_invalid_payloads() -> Result<()> {
    let server = common::spawn_server().await?;

    for body in [
        json!({ "producerName": "Boeing", "modelName": "B787" }),
        json!({ "producerName": "Boeing", "passengerCapacity": "lots" }),
        json!({ "modelName": 787, "passengerCapacity": 350 }),
        json!([{ "passengerCapacity": 350 }]),
    ] {
        let res = server.client.post(server.url("/airplanes")).json(&body).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "expected 400 for {}", body);
        let error = res.json::<Value>().await?;
        assert!(error["message"].as_str().unwrap_or_default().starts_with("Invalid data"), "{}", error);
    }

    let res = server
        .client
        .post(server.url("/airplanes"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.json::<Value>().await?["message"].is_string());

    let res = server.client.post(server.url("/airplanes")).body("plain text").send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted
    let list = server.client.get(server.url("/airplanes")).send().await?.json::<Vec<Value>>().await?;
    assert!(list.is_empty());

    Ok(())
}

#[tokio::test]
async fn get_and_delete_reject_malformed_ids() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/airplanes/abc")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "The identifier abc is invalid" }));

    let res = server.client.get(server.url("/airplanes/%20")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "The identifier is invalid" }));

    let res = server.client.delete(server.url("/airplanes/1.5")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server.client.delete(server.url("/airplanes/12")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn update_validates_and_reports_missing_records() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = create(&server, json!({ "producerName": "Boeing", "modelName": "B737", "passengerCapacity": 200 })).await?;

    // Missing id
    let res = server
        .client
        .put(server.url("/airplanes"))
        .json(&json!({ "producerName": "Boeing", "modelName": "B737", "passengerCapacity": 200 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let message = res.json::<Value>().await?["message"].as_str().unwrap_or_default().to_string();
    assert!(message.starts_with("An error occurred while updating airplane Boeing B737"), "{}", message);

    // Unknown id
    let res = server
        .client
        .put(server.url("/airplanes"))
        .json(&json!({ "id": id + 100, "producerName": "Boeing", "modelName": "B737", "passengerCapacity": 200 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Full replacement, including clearing a name
    let res = server
        .client
        .put(server.url("/airplanes"))
        .json(&json!({ "id": id, "modelName": "B737 MAX", "passengerCapacity": 210 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "message": "Airplane B737 MAX was updated successfully", "id": id })
    );

    let stored = server.client.get(server.url(&format!("/airplanes/{}", id))).send().await?.json::<Value>().await?;
    assert_eq!(
        stored,
        json!({ "id": id, "producerName": null, "modelName": "B737 MAX", "passengerCapacity": 210 })
    );

    Ok(())
}

#[tokio::test]
async fn undecodable_ids_are_invalid_identifiers() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/airplanes/%FF")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "The identifier is invalid" }));

    let res = server.client.delete(server.url("/airplanes/%C3%28")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "The identifier is invalid" }));

    Ok(())
}

#[tokio::test]
async fn unmatched_routes_answer_with_message_bodies() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/airplanes/")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "No route for GET /airplanes/" }));

    let res = server.client.patch(server.url("/airplanes")).json(&json!({})).send().await?;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "message": "Method PATCH is not allowed on /airplanes" })
    );

    let res = server.client.post(server.url("/airplanes/1")).send().await?;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(res.json::<Value>().await?["message"].is_string());

    Ok(())
}

#[tokio::test]
async fn unreachable_database_answers_503() -> Result<()> {
    let server = common::spawn_server_with(Arc::new(UnreachableStore)).await?;
    let unavailable = json!({ "message": "Database temporarily unavailable" });

    let res = server.client.get(server.url("/airplanes")).send().await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.json::<Value>().await?, unavailable);

    let res = server.client.get(server.url("/airplanes/1")).send().await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.json::<Value>().await?, unavailable);

    let res = server
        .client
        .post(server.url("/airplanes"))
        .json(&json!({ "producerName": "Boeing", "modelName": "B787", "passengerCapacity": 350 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.json::<Value>().await?, unavailable);

    Ok(())
}
