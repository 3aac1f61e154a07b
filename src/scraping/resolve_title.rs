use reqwest::Client;

use crate::rows::TitleOutcome;
use crate::scraping::{extract_title, fetch_page};

/// Resolves one URL to a title outcome. Never fails: every failure path
/// ends up as a `NetworkError` or `UnexpectedError` outcome, so resolving
/// a row can never abort the batch.
pub async fn resolve_title(client: &Client, url: &str) -> TitleOutcome {
    match fetch_page(client, url).await {
        Ok(body) => match extract_title(&body) {
            Some(title) => TitleOutcome::Found(title),
            None => TitleOutcome::Missing,
        },
        // A reqwest error anywhere in the chain means the network tier failed.
        Err(error) if error.downcast_ref::<reqwest::Error>().is_some() => {
            TitleOutcome::NetworkError(format!("{:#}", error))
        }
        Err(error) => TitleOutcome::UnexpectedError(format!("{:#}", error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraping::fetch_page::build_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> Client {
        build_client("csv_add_titles test", 5).unwrap()
    }

    #[tokio::test]
    async fn resolves_a_page_title() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_bytes(
                        b"<html><head><title> Example Page </title></head></html>".to_vec(),
                    ),
            )
            .mount(&mock_server)
            .await;

        let outcome = resolve_title(&test_client(), &mock_server.uri()).await;
        assert_eq!(outcome, TitleOutcome::Found("Example Page".to_string()));
    }

    #[tokio::test]
    async fn missing_title_yields_the_sentinel_outcome() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_bytes(b"<html><body><p>no title here</p></body></html>".to_vec()),
            )
            .mount(&mock_server)
            .await;

        let outcome = resolve_title(&test_client(), &mock_server.uri()).await;
        assert_eq!(outcome, TitleOutcome::Missing);
    }

    #[tokio::test]
    async fn http_error_status_is_a_network_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let outcome = resolve_title(&test_client(), &mock_server.uri()).await;
        match outcome {
            TitleOutcome::NetworkError(detail) => assert!(detail.contains("500")),
            other => panic!("expected NetworkError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Port 1 on loopback: connection refused without touching the network.
        let outcome = resolve_title(&test_client(), "http://127.0.0.1:1/").await;
        assert!(matches!(outcome, TitleOutcome::NetworkError(_)));
        assert!(outcome.to_string().starts_with("error: "));
    }

    #[tokio::test]
    async fn malformed_url_is_a_network_error() {
        let outcome = resolve_title(&test_client(), "not a url").await;
        assert!(matches!(outcome, TitleOutcome::NetworkError(_)));
    }

    #[tokio::test]
    async fn shift_jis_body_without_charset_still_decodes() {
        let body = "<html><head><title>今日の占い</title></head><body>\
                    星座占いのページです。今日の運勢を毎朝更新しています。\
                    </body></html>";
        let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(body);

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_bytes(bytes.to_vec()),
            )
            .mount(&mock_server)
            .await;

        let outcome = resolve_title(&test_client(), &mock_server.uri()).await;
        assert_eq!(outcome, TitleOutcome::Found("今日の占い".to_string()));
    }
}
