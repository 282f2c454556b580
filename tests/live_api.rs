//! Live end-to-end test against the real Foody service
//!
//! Ignored by default. Run with:
//!
//! ```text
//! FOODY_TOKEN=<jwt> cargo test --test live_api -- --ignored
//! ```
//!
//! `FOODY_BASE_URL` overrides the default endpoint. The steps run in one
//! function so their order, and the id handed from create to edit and
//! delete, is explicit.

use foody::api::{CreateRequest, EditOperation};
use foody::testing::builtin::{
    DELETE_FAILED, DELETE_SUCCESS, EDIT_NOT_FOUND, EDIT_SUCCESS, FAKE_FOOD_ID,
};
use foody::{Config, Session};

#[tokio::test]
#[ignore = "talks to the live Foody API; needs FOODY_TOKEN"]
async fn test_foody_crud_live() {
    let config = Config::load()
        .expect("Failed to load config")
        .apply_env();
    let mut session = Session::open(&config).expect("Failed to open session");

    // 1. Create with required fields
    let reply = session
        .client()
        .create(
            &CreateRequest::new("Test Food", "This is a test food description.").with_url(""),
        )
        .await
        .expect("create request failed");
    assert_eq!(reply.status.as_u16(), 201, "body: {}", reply.body);
    let id = reply
        .json()
        .expect("create response is not JSON")
        .entity_id
        .filter(|id| !id.is_empty())
        .expect("create response has no foodId");
    session.capture(id);

    let id = session.last_created_id().unwrap().to_string();

    // 2. Edit title
    let reply = session
        .client()
        .edit(&id, &[EditOperation::replace("/name", "Updated Test Food")])
        .await
        .expect("edit request failed");
    assert_eq!(reply.status.as_u16(), 200, "body: {}", reply.body);
    assert_eq!(reply.json().unwrap().message.as_deref(), Some(EDIT_SUCCESS));

    // 3. List all
    let reply = session.client().list().await.expect("list request failed");
    assert_eq!(reply.status.as_u16(), 200, "body: {}", reply.body);
    assert!(reply.body.contains("name"), "body: {}", reply.body);

    // 4. Delete
    let reply = session.client().delete(&id).await.expect("delete request failed");
    assert_eq!(reply.status.as_u16(), 200, "body: {}", reply.body);
    assert_eq!(reply.json().unwrap().message.as_deref(), Some(DELETE_SUCCESS));

    // 5. Create without required fields
    let reply = session
        .client()
        .create(&CreateRequest::new("", ""))
        .await
        .expect("create request failed");
    assert_eq!(reply.status.as_u16(), 400, "body: {}", reply.body);

    // 6. Edit non-existing food
    let reply = session
        .client()
        .edit(
            FAKE_FOOD_ID,
            &[EditOperation::replace("/name", "Fake Food Name")],
        )
        .await
        .expect("edit request failed");
    assert_eq!(reply.status.as_u16(), 404, "body: {}", reply.body);
    assert_eq!(reply.json().unwrap().message.as_deref(), Some(EDIT_NOT_FOUND));

    // 7. Delete non-existing food
    let reply = session
        .client()
        .delete(FAKE_FOOD_ID)
        .await
        .expect("delete request failed");
    assert_eq!(reply.status.as_u16(), 400, "body: {}", reply.body);
    assert_eq!(reply.json().unwrap().message.as_deref(), Some(DELETE_FAILED));

    session.close();
}
