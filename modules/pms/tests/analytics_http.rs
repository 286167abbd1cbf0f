//! HTTP analytics adapter against a mock server.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use url::Url;

use pms::domain::analytics::{AnalyticsService, AnalyticsSummary, Trend};
use pms::domain::ports::AnalyticsSource;
use pms::infra::analytics::HttpAnalyticsClient;

fn adapter(server: &MockServer) -> HttpAnalyticsClient {
    let base = Url::parse(&server.base_url()).unwrap();
    HttpAnalyticsClient::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn load_fetches_all_three_resources() {
    let server = MockServer::start_async().await;

    let employees = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([
                {"employeeId": "e1", "name": "Sarah Johnson", "role": "employee", "department": "Engineering"},
                {"employeeId": "e2", "name": "Michael Chen", "role": "employee", "department": "Product"},
                {"employeeId": "m1", "name": "Emily Davis", "role": "supervisor", "department": "Design"}
            ]));
        })
        .await;
    let reviews = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews");
            then.status(200).json_body(json!([
                {"employeeId": "e1", "status": "completed", "score": 4.5},
                {"employeeId": "e2", "status": "completed", "score": 3.7, "employeeName": "Mike"},
                {"employeeId": "e2", "status": "draft", "score": 5}
            ]));
        })
        .await;
    let goals = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/goals");
            then.status(200)
                .json_body(json!([{"status": "completed"}, {"status": "open"}, {}, {"status": "completed"}]));
        })
        .await;

    let service = AnalyticsService::new(Arc::new(adapter(&server)));
    let summary = service.load().await;

    employees.assert_async().await;
    reviews.assert_async().await;
    goals.assert_async().await;

    assert_eq!(summary.avg_performance, 4.1);
    assert_eq!(summary.reviews_completed, 100);
    assert_eq!(summary.goal_achievement, 50);
    assert_eq!(summary.employee_satisfaction, 3.3);

    let depts: Vec<(&str, Trend)> = summary
        .department_performance
        .iter()
        .map(|d| (d.department.as_str(), d.trend))
        .collect();
    assert_eq!(
        depts,
        vec![
            ("Engineering", Trend::Up),
            ("Product", Trend::Stable),
            ("Design", Trend::Down)
        ]
    );

    let names: Vec<&str> = summary.top_performers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Johnson", "Mike"]);
}

#[tokio::test]
async fn server_error_degrades_to_zeroed_summary() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/goals");
            then.status(200).json_body(json!([]));
        })
        .await;

    let adapter = adapter(&server);
    let err = adapter.reviews().await.unwrap_err();
    assert!(err.to_string().contains("HTTP 500"));

    let summary = AnalyticsService::new(Arc::new(adapter)).load().await;
    assert_eq!(summary, AnalyticsSummary::default());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/goals");
            then.status(200).body("{\"not\": \"an array\"}");
        })
        .await;

    let err = adapter(&server).goals().await.unwrap_err();
    assert!(err.to_string().contains("decoding /api/goals"));
}

#[tokio::test]
async fn base_url_with_path_prefix_is_kept() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pms/api/employees");
            then.status(200).json_body(json!([]));
        })
        .await;

    let base = Url::parse(&format!("{}/pms/", server.base_url())).unwrap();
    let adapter = HttpAnalyticsClient::new(base, Duration::from_secs(5)).unwrap();
    assert!(adapter.employees().await.unwrap().is_empty());
    mock.assert_async().await;
}
