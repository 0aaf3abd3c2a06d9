use anyhow::Result;
use mockito::Matcher;
use serde_json::json;
use test_utils::login_fixture;
use test_utils::matches_fixture;

use super::FoodFriend;
use crate::domain::models::Backend;
use crate::domain::models::Outcome;

impl FoodFriend {
    fn with_url(url: String) -> FoodFriend {
        return FoodFriend {
            url,
            timeout: "200".to_string(),
        };
    }
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users")
        .with_status(200)
        .with_body(r#"{"success":true,"users":[]}"#)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users")
        .with_status(500)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.health_check().await;

    insta::assert_snapshot!(res.unwrap_err().to_string(), @"Food-Friend API health check failed");
    mock.assert_async().await;
}

#[tokio::test]
async fn it_logs_in() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "Sam"})))
        .with_status(200)
        .with_body(login_fixture())
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.login("Sam").await?;

    match res {
        Outcome::Success(profile) => {
            assert_eq!(
                profile.food_choices,
                vec![
                    "sushi".to_string(),
                    "tacos".to_string(),
                    "sushi".to_string()
                ]
            );
            assert!(!profile.is_new);
        }
        _ => panic!("Expected a successful login"),
    }
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_logs_in_new_users_without_foods() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .with_status(200)
        .with_body(r#"{"success":true,"isNew":true,"user":{"name":"Sam"}}"#)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.login("Sam").await?;

    match res {
        Outcome::Success(profile) => {
            assert!(profile.food_choices.is_empty());
            assert!(profile.is_new);
        }
        _ => panic!("Expected a successful login"),
    }
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_reads_refusals_from_error_statuses() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .with_status(400)
        .with_body(r#"{"error":"Name is required"}"#)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.login("Sam").await?;

    assert_eq!(res, Outcome::Rejected(Some("Name is required".to_string())));
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_unreadable_bodies() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.login("Sam").await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_when_unreachable() {
    let backend = FoodFriend::with_url("http://127.0.0.1:1".to_string());

    assert!(backend.login("Sam").await.is_err());
    assert!(backend.update_foods("Sam", &[]).await.is_err());
}

#[tokio::test]
async fn it_updates_the_full_food_list() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/update-foods")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"name": "Sam", "foodChoices": ["a", "a", "b"]}),
        ))
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    backend
        .update_foods(
            "Sam",
            &["a".to_string(), "a".to_string(), "b".to_string()],
        )
        .await?;
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_fails_food_updates_on_error_statuses() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/update-foods")
        .with_status(404)
        .with_body(r#"{"error":"User not found"}"#)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.update_foods("Sam", &["a".to_string()]).await;

    insta::assert_snapshot!(res.unwrap_err().to_string(), @"Failed to update foods on the Food-Friend API");
    mock.assert_async().await;
}

#[tokio::test]
async fn it_calculates_matches_in_served_order() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/calculate-matches")
        .match_body(Matcher::Json(json!({"name": "Sam"})))
        .with_status(200)
        .with_body(matches_fixture())
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.calculate_matches("Sam").await?;

    match res {
        Outcome::Success(matches) => {
            let names = matches
                .iter()
                .map(|e| return e.name.to_string())
                .collect::<Vec<String>>();
            assert_eq!(names, vec!["Priya", "Marco", "Lena"]);
            assert_eq!(matches[1].score, 67.5);
            assert_eq!(matches[2].shared_foods, None);
        }
        _ => panic!("Expected matches"),
    }
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_reports_match_refusals() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/calculate-matches")
        .with_status(400)
        .with_body(r#"{"error":"No food preferences set"}"#)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.calculate_matches("Sam").await?;

    assert_eq!(
        res,
        Outcome::Rejected(Some("No food preferences set".to_string()))
    );
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_extracts_foods() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/extract-foods")
        .match_body(Matcher::Json(json!({"description": "I love ramen"})))
        .with_status(200)
        .with_body(r#"{"success":true,"foodChoices":["ramen"]}"#)
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.extract_foods("I love ramen").await?;

    assert_eq!(res, Outcome::Success(vec!["ramen".to_string()]));
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_lists_users() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users")
        .with_status(200)
        .with_body(
            r#"{"success":true,"users":[{"name":"Priya","foodChoices":["ramen"]},{"name":"Lena"}]}"#,
        )
        .create_async()
        .await;

    let backend = FoodFriend::with_url(server.url());
    let res = backend.list_users().await?;

    match res {
        Outcome::Success(users) => {
            assert_eq!(users.len(), 2);
            assert_eq!(users[0].name, "Priya");
            assert_eq!(users[0].food_choices, vec!["ramen".to_string()]);
            assert!(users[1].food_choices.is_empty());
        }
        _ => panic!("Expected users"),
    }
    mock.assert_async().await;

    return Ok(());
}
