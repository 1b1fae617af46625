use std::time::Duration;

use newwork_application::{EnhancementFailure, EnhancementOutcome, FeedbackEnhancer};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::GeminiFeedbackEnhancer;

/// Serves exactly one HTTP response and returns the raw request it received.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
    delay: Duration,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|_| unreachable!());
    let address = listener
        .local_addr()
        .unwrap_or_else(|_| unreachable!());

    let handle = tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return String::new();
        };

        let mut request = Vec::new();
        let mut buffer = [0_u8; 4096];
        loop {
            let Ok(read) = stream.read(&mut buffer).await else {
                break;
            };
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..read]);
            if request_complete(&request) {
                break;
            }
        }

        tokio::time::sleep(delay).await;
        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{address}/generate"), handle)
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };

    let content_length = text[..header_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    request.len() >= header_end + 4 + content_length
}

fn enhancer(endpoint: String, timeout: Duration) -> GeminiFeedbackEnhancer {
    GeminiFeedbackEnhancer::new(reqwest::Client::new(), "test-key", endpoint, timeout)
}

#[tokio::test]
async fn successful_response_yields_trimmed_text() {
    let (endpoint, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"  Clear, constructive feedback.\n"}]}}]}"#,
        Duration::ZERO,
    )
    .await;

    let outcome = enhancer(endpoint, Duration::from_secs(5))
        .enhance("you were late", Some("Michael Chen"))
        .await;
    assert_eq!(
        outcome,
        EnhancementOutcome::Enhanced("Clear, constructive feedback.".to_owned())
    );

    let request = server.await.unwrap_or_default();
    assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains("\"contents\":[{\"parts\":[{\"text\":"));
    assert!(request.contains("Michael Chen"));
}

#[tokio::test]
async fn error_status_falls_back() {
    let (endpoint, _server) = serve_once(
        "HTTP/1.1 503 Service Unavailable",
        r#"{"error":"overloaded"}"#,
        Duration::ZERO,
    )
    .await;

    let outcome = enhancer(endpoint, Duration::from_secs(5))
        .enhance("original", None)
        .await;
    assert_eq!(
        outcome,
        EnhancementOutcome::fallback("original", EnhancementFailure::Status(503))
    );
}

#[tokio::test]
async fn empty_candidates_fall_back() {
    let (endpoint, _server) =
        serve_once("HTTP/1.1 200 OK", r#"{"candidates":[]}"#, Duration::ZERO).await;

    let outcome = enhancer(endpoint, Duration::from_secs(5))
        .enhance("original", None)
        .await;
    assert_eq!(
        outcome,
        EnhancementOutcome::fallback("original", EnhancementFailure::MissingContent)
    );
}

#[tokio::test]
async fn malformed_payload_falls_back() {
    let (endpoint, _server) = serve_once("HTTP/1.1 200 OK", "not json", Duration::ZERO).await;

    let outcome = enhancer(endpoint, Duration::from_secs(5))
        .enhance("original", None)
        .await;
    assert!(matches!(
        outcome,
        EnhancementOutcome::Fallback {
            original,
            reason: EnhancementFailure::MalformedPayload(_),
        } if original == "original"
    ));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let (endpoint, _server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"candidates":[]}"#,
        Duration::from_secs(2),
    )
    .await;

    let outcome = enhancer(endpoint, Duration::from_millis(100))
        .enhance("original", None)
        .await;
    assert_eq!(
        outcome,
        EnhancementOutcome::fallback("original", EnhancementFailure::Timeout)
    );
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|_| unreachable!());
    let address = listener
        .local_addr()
        .unwrap_or_else(|_| unreachable!());
    drop(listener);

    let outcome = enhancer(format!("http://{address}/generate"), Duration::from_secs(5))
        .enhance("original", None)
        .await;
    assert!(matches!(
        outcome,
        EnhancementOutcome::Fallback {
            reason: EnhancementFailure::Transport(_),
            ..
        }
    ));
}
