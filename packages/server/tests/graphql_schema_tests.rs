//! GraphQL schema tests executed in-process, without an HTTP server.

use std::sync::Arc;

use juniper::Variables;
use server_core::domains::auth::JwtService;
use server_core::kernel::{MemoryAccountStore, ServerDeps};
use server_core::server::graphql::{create_schema, GraphQLContext};
use uuid::Uuid;

fn test_context() -> GraphQLContext {
    let store = Arc::new(MemoryAccountStore::new());
    let jwt_service = Arc::new(JwtService::new(
        "test_secret_key",
        "test_issuer".to_string(),
    ));
    GraphQLContext::new(ServerDeps::new(store, jwt_service))
}

const CREATE_ALICE: &str = r#"mutation {
    createUser(userInput: {
        name: "Alice",
        email: "alice@example.com",
        password: "hunter2!"
    }) {
        id
        name
        email
    }
}"#;

#[tokio::test]
async fn test_create_user_and_read_back() {
    let ctx = test_context();
    let schema = create_schema();

    let (value, errors) = juniper::execute(CREATE_ALICE, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();
    assert!(errors.is_empty());

    let created = value
        .as_object_value()
        .and_then(|o| o.get_field_value("createUser"))
        .and_then(|v| v.as_object_value())
        .expect("createUser should return an object");
    assert_eq!(
        created.get_field_value("name").and_then(|v| v.as_string_value()),
        Some("Alice")
    );

    let (value, errors) = juniper::execute(
        r#"{ readOneUserEmail(email: "alice@example.com") { name email } }"#,
        None,
        &schema,
        &Variables::new(),
        &ctx,
    )
    .await
    .unwrap();
    assert!(errors.is_empty());

    let found = value
        .as_object_value()
        .and_then(|o| o.get_field_value("readOneUserEmail"))
        .and_then(|v| v.as_object_value())
        .expect("readOneUserEmail should return an object");
    assert_eq!(
        found.get_field_value("email").and_then(|v| v.as_string_value()),
        Some("alice@example.com")
    );
}

#[tokio::test]
async fn test_read_one_user_id_absent_is_null() {
    let ctx = test_context();
    let schema = create_schema();

    let query = format!(r#"{{ readOneUserID(id: "{}") {{ name }} }}"#, Uuid::new_v4());
    let (value, errors) = juniper::execute(&query, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();

    assert!(errors.is_empty());
    let field = value
        .as_object_value()
        .and_then(|o| o.get_field_value("readOneUserID"))
        .expect("field should be present");
    assert!(field.is_null());
}

#[tokio::test]
async fn test_duplicate_user_surfaces_error_message() {
    let ctx = test_context();
    let schema = create_schema();

    let (_, errors) = juniper::execute(CREATE_ALICE, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();
    assert!(errors.is_empty());

    let (_, errors) = juniper::execute(CREATE_ALICE, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();
    assert!(!errors.is_empty());
    assert!(format!("{:?}", errors).contains("user already exists"));
}

#[tokio::test]
async fn test_create_session_returns_bearer_token() {
    let ctx = test_context();
    let schema = create_schema();

    juniper::execute(CREATE_ALICE, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();

    let (value, errors) = juniper::execute(
        r#"mutation {
            createSession(createSessionInput: {
                email: "alice@example.com",
                password: "hunter2!"
            }) {
                token
                name
                email
            }
        }"#,
        None,
        &schema,
        &Variables::new(),
        &ctx,
    )
    .await
    .unwrap();
    assert!(errors.is_empty());

    let session = value
        .as_object_value()
        .and_then(|o| o.get_field_value("createSession"))
        .and_then(|v| v.as_object_value())
        .expect("createSession should return an object");

    let token = session
        .get_field_value("token")
        .and_then(|v| v.as_string_value())
        .expect("session should carry a token");
    assert!(token.starts_with("Bearer "));
    assert_eq!(
        session.get_field_value("name").and_then(|v| v.as_string_value()),
        Some("Alice")
    );
}

#[tokio::test]
async fn test_bad_credentials_share_one_message() {
    let ctx = test_context();
    let schema = create_schema();

    juniper::execute(CREATE_ALICE, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();

    let wrong_password = r#"mutation {
        createSession(createSessionInput: {
            email: "alice@example.com",
            password: "not_the_password"
        }) { token }
    }"#;
    let unknown_email = r#"mutation {
        createSession(createSessionInput: {
            email: "nobody@example.com",
            password: "hunter2!"
        }) { token }
    }"#;

    let (_, first) = juniper::execute(wrong_password, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();
    let (_, second) = juniper::execute(unknown_email, None, &schema, &Variables::new(), &ctx)
        .await
        .unwrap();

    assert!(!first.is_empty());
    assert!(!second.is_empty());
    assert!(format!("{:?}", first).contains("e-mail or password may be incorrect"));
    assert!(format!("{:?}", second).contains("e-mail or password may be incorrect"));
}
