use httpmock::prelude::*;
use pressure::driver::run;
use pressure::model::RunConfig;
use pressure::request::RequestError;
use std::time::Duration;

fn config(url: String, workers: i64, requests: i64) -> RunConfig {
    RunConfig::new(url, workers, requests).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn every_request_succeeds() {
    let server = MockServer::start_async().await;
    let ok = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("hello");
        })
        .await;

    let summary = run(&config(server.url("/"), 3, 5)).await;

    assert_eq!(ok.hits_async().await, 15);
    assert_eq!(summary.reports.len(), 3);
    assert_eq!(summary.failed_workers(), 0);
    assert_eq!(summary.requests_sent(), 15);
    assert_eq!(summary.requests_succeeded(), 15);
    let ids: Vec<_> = summary.reports.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert!(summary.finished_at >= summary.started_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn non_ok_response_stops_each_worker_after_one_request() {
    let server = MockServer::start_async().await;
    let failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(500);
        })
        .await;

    let summary = run(&config(server.url("/"), 4, 10)).await;

    assert_eq!(failing.hits_async().await, 4);
    assert_eq!(summary.failed_workers(), 4);
    for report in &summary.reports {
        assert_eq!(report.sent, 1);
        assert_eq!(report.succeeded, 0);
        match &report.failure {
            Some(RequestError::NonOk(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("unexpected failure: {other:?}"),
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn only_200_counts_as_success() {
    let server = MockServer::start_async().await;
    let created = server
        .mock_async(|when, then| {
            when.method(GET).path("/created");
            then.status(201);
        })
        .await;

    let summary = run(&config(server.url("/created"), 1, 3)).await;

    assert_eq!(created.hits_async().await, 1);
    assert!(matches!(
        summary.reports[0].failure,
        Some(RequestError::NonOk(status)) if status.as_u16() == 201
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_fault_stops_the_worker() {
    // bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let summary = run(&config(format!("http://{addr}/"), 2, 50)).await;

    assert_eq!(summary.failed_workers(), 2);
    for report in &summary.reports {
        assert_eq!(report.sent, 1);
        assert!(matches!(report.failure, Some(RequestError::Transport(_))));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn workers_run_in_parallel() {
    let server = MockServer::start_async().await;
    let slow = server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_millis(100));
        })
        .await;

    let summary = run(&config(server.url("/slow"), 8, 2)).await;

    assert_eq!(slow.hits_async().await, 16);
    assert_eq!(summary.failed_workers(), 0);
    // two sequential requests per worker bound it below; 16 serial requests take 1.6s
    assert!(summary.elapsed >= Duration::from_millis(200));
    assert!(summary.elapsed < Duration::from_millis(1600));
}

#[tokio::test(flavor = "multi_thread")]
async fn worker_requests_do_not_overlap() {
    let server = MockServer::start_async().await;
    let slow = server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_millis(100));
        })
        .await;

    let summary = run(&config(server.url("/slow"), 1, 3)).await;

    assert_eq!(slow.hits_async().await, 3);
    assert_eq!(summary.reports[0].succeeded, 3);
    assert!(summary.elapsed >= Duration::from_millis(300));
}
