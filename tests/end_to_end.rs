//! End-to-end scans against a local mock HTTP server.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bbpscraper::models::{Config, ScanHit};
use bbpscraper::pipeline::{run_scanner, write_summary};
use bbpscraper::services::HitReporter;
use bbpscraper::utils::input::read_path_file;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct Collect(Mutex<Vec<ScanHit>>);

impl HitReporter for Collect {
    fn report(&self, hit: &ScanHit) {
        self.0.lock().unwrap().push(hit.clone());
    }
}

fn config(stop_count: usize, timeout_secs: u64) -> Arc<Config> {
    let mut config = Config::default();
    config.scan.stop_count = stop_count;
    config.scan.min_matches = 2;
    config.scan.timeout_secs = timeout_secs;
    Arc::new(config)
}

#[tokio::test]
async fn security_txt_is_found_and_summarized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/security.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Our bugbounty@test.com offers reward"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Call us on weekdays"))
        .expect(0)
        .mount(&server)
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let path_file = tmp.path().join("paths.txt");
    let mut file = std::fs::File::create(&path_file).unwrap();
    writeln!(file, "security.txt\n\ncontact").unwrap();

    let paths = read_path_file(&path_file).await.unwrap();
    let reporter = Arc::new(Collect::default());
    let outcome = run_scanner(config(1, 5), paths, vec![server.uri()], reporter.clone())
        .await
        .unwrap();

    let hits = reporter.0.lock().unwrap().clone();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].to_string(),
        format!(
            r#"{}/security.txt ["bugbounty@test.com", "reward"]"#,
            server.uri()
        )
    );

    let summary_file = tmp.path().join("summary.txt");
    write_summary(&summary_file, &outcome.summary).await.unwrap();
    let written = std::fs::read_to_string(&summary_file).unwrap();
    assert_eq!(written, "/security.txt [count: 1]\n");
}

#[tokio::test]
async fn error_pages_are_still_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bounty"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("Not found. Our bug bounty scope moved."),
        )
        .mount(&server)
        .await;

    let reporter = Arc::new(Collect::default());
    let outcome = run_scanner(
        config(0, 5),
        vec!["bounty".to_string()],
        vec![server.uri()],
        reporter.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.hit_total, 1);
    assert_eq!(outcome.summary.get("/bounty"), Some(&1));
}

#[tokio::test]
async fn timed_out_paths_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("bounty reward scope")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("bounty reward"))
        .mount(&server)
        .await;

    let reporter = Arc::new(Collect::default());
    let outcome = run_scanner(
        config(1, 1),
        vec!["slow".to_string(), "fast".to_string()],
        vec![server.uri()],
        reporter.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.fetch_failures, 1);
    assert_eq!(outcome.summary.get("/slow"), None);
    assert_eq!(outcome.summary.get("/fast"), Some(&1));
}

#[tokio::test]
async fn same_path_on_different_domains_shares_a_key() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    for server in [&first, &second] {
        Mock::given(method("GET"))
            .and(path("/.well-known/security.txt"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("Contact: security@corp.io\nPolicy: bounty"),
            )
            .mount(server)
            .await;
    }

    let reporter = Arc::new(Collect::default());
    let outcome = run_scanner(
        config(1, 5),
        vec!["/.well-known/security.txt".to_string()],
        vec![first.uri(), format!("{}/", second.uri())],
        reporter.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.summary.len(), 1);
    assert_eq!(outcome.summary.get("/.well-known/security.txt"), Some(&2));
}

#[tokio::test]
async fn unreachable_domain_yields_no_results() {
    let reporter = Arc::new(Collect::default());
    let outcome = run_scanner(
        config(1, 2),
        vec!["security.txt".to_string()],
        vec!["http://127.0.0.1:1".to_string()],
        reporter.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.request_total, 1);
    assert_eq!(outcome.fetch_failures, 1);
    assert!(outcome.summary.is_empty());
    assert!(reporter.0.lock().unwrap().is_empty());
}
