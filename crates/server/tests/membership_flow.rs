mod common;

use axum::http::{Method, StatusCode};
use models::Member;
use serde_json::json;
use server::membership;
use service::storage::MemoryStore;
use uuid::Uuid;

use common::{config, send};

fn app() -> axum::Router {
    membership::app(&config("Development", "MembershipDb"), MemoryStore::<Member>::new("MembershipDb"))
}

#[tokio::test]
async fn member_lifecycle() -> anyhow::Result<()> {
    let app = app();

    let created = send(&app, Method::POST, "/members", Some(json!({"name": "Bob"}))).await?;
    assert_eq!(created.status, StatusCode::CREATED);
    let body = created.json();
    let id = body["memberId"].as_str().expect("memberId").to_string();
    assert_eq!(created.location(), Some(format!("/members/{id}").as_str()));

    let fetched = send(&app, Method::GET, &format!("/members/{id}"), None).await?;
    assert_eq!(fetched.json(), body);

    let put = send(&app, Method::PUT, &format!("/members/{id}"), Some(json!({"memberId": Uuid::new_v4(), "name": "Robert"}))).await?;
    assert_eq!(put.status, StatusCode::NO_CONTENT);
    let fetched = send(&app, Method::GET, &format!("/members/{id}"), None).await?.json();
    assert_eq!(fetched, json!({"memberId": id, "name": "Robert"}));

    let deleted = send(&app, Method::DELETE, &format!("/members/{id}"), None).await?;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json()["name"], "Robert");

    assert_eq!(send(&app, Method::GET, &format!("/members/{id}"), None).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, Method::DELETE, &format!("/members/{id}"), None).await?.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn omitted_name_defaults_to_empty() -> anyhow::Result<()> {
    let app = app();
    let created = send(&app, Method::POST, "/members", Some(json!({}))).await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.json()["name"], "");
    Ok(())
}

#[tokio::test]
async fn unknown_member_is_not_found() -> anyhow::Result<()> {
    let app = app();
    let uri = format!("/members/{}", Uuid::new_v4());
    assert_eq!(send(&app, Method::GET, &uri, None).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, Method::PUT, &uri, Some(json!({"name": "x"}))).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, Method::DELETE, &uri, None).await?.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_after_creates_and_deletes() -> anyhow::Result<()> {
    let app = app();
    let mut ids = Vec::new();
    for i in 0..6 {
        let v = send(&app, Method::POST, "/members", Some(json!({"name": format!("m{i}")}))).await?.json();
        ids.push(v["memberId"].as_str().unwrap().to_string());
    }
    for id in [&ids[0], &ids[5]] {
        assert_eq!(send(&app, Method::DELETE, &format!("/members/{id}"), None).await?.status, StatusCode::OK);
    }
    let listed = send(&app, Method::GET, "/members", None).await?.json();
    let names: Vec<&str> = listed.as_array().unwrap().iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["m1", "m2", "m3", "m4"]);
    Ok(())
}

#[tokio::test]
async fn membership_docs_describe_members() -> anyhow::Result<()> {
    let app = app();
    let doc = send(&app, Method::GET, "/swagger/v1/swagger.json", None).await?;
    assert_eq!(doc.status, StatusCode::OK);
    let v = doc.json();
    assert_eq!(v["info"]["title"], "Membership Api");
    assert_eq!(v["paths"]["/members"]["post"]["operationId"], "CreateMember");
    assert!(v["paths"]["/users"].is_null());
    Ok(())
}
