//! End-to-end tests for the translate pipeline
//!
//! These run `TranslateService` on top of the real `DeepTranslateProvider`,
//! pointed at a local stub that answers like the provider does.
//!
//! # Running against the live API
//!
//! ```bash
//! export RAPIDAPI_KEY=...
//! cargo test -p quicktranslate integration_tests -- --ignored --nocapture
//! ```

#[cfg(test)]
mod tests {
    use crate::*;
    use axum::{Router, http::StatusCode, routing::post};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Start a stub provider that always answers with `status` and `body`.
    /// Returns its base URL and a counter of requests received.
    async fn stub_provider(status: StatusCode, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new().route(
            "/language/translate/v2",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), hits)
    }

    fn service_for(base_url: &str) -> TranslateService {
        let provider = DeepTranslateProvider::new("test-key".to_string(), DEFAULT_API_HOST.to_string())
            .unwrap()
            .with_base_url(base_url);
        TranslateService::new(Arc::new(provider))
    }

    fn raw(text: &str, source: &str, target: &str) -> RawTranslateRequest {
        RawTranslateRequest {
            text: Some(text.to_string()),
            source_lang: Some(source.to_string()),
            target_lang: Some(target.to_string()),
        }
    }

    #[tokio::test]
    async fn test_e2e_english_to_spanish() {
        let (url, hits) = stub_provider(
            StatusCode::OK,
            r#"{"data":{"translations":{"translatedText":"hola"}}}"#,
        )
        .await;
        let service = service_for(&url);

        let response = service.handle(raw("hello", "en", "es")).await.unwrap();
        assert_eq!(response.translated_text, "hola");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let history = service.history().list();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].original, "hello");
        assert_eq!(history[0].translated, "hola");
        assert_eq!(history[0].target, "Spanish");
    }

    #[tokio::test]
    async fn test_e2e_list_shape_normalized() {
        let (url, _) = stub_provider(
            StatusCode::OK,
            r#"{"data":{"translations":[{"translatedText":"bonjour"}]}}"#,
        )
        .await;
        let service = service_for(&url);

        let response = service.handle(raw("hello", "en", "fr")).await.unwrap();
        assert_eq!(response.translated_text, "bonjour");
    }

    #[tokio::test]
    async fn test_e2e_arabic_target_transliterated() {
        let (url, _) = stub_provider(
            StatusCode::OK,
            r#"{"data":{"translations":{"translatedText":"مرحبا"}}}"#,
        )
        .await;
        let service = service_for(&url);

        let response = service.handle(raw("hello", "en", "ar")).await.unwrap();
        assert_eq!(response.translated_text, transliterate("مرحبا"));
        assert_eq!(response.original_api_text, "مرحبا");
        assert_eq!(
            service.history().list()[0].translated,
            transliterate("مرحبا")
        );
    }

    #[tokio::test]
    async fn test_e2e_upstream_error_not_recorded() {
        let (url, hits) = stub_provider(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"message":"Too many requests"}"#,
        )
        .await;
        let service = service_for(&url);

        match service.handle(raw("hello", "en", "es")).await {
            Err(TranslateError::Upstream { status, body }) => {
                assert_eq!(status, 429);
                assert!(body.contains("Too many requests"));
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
        // Single attempt, no retry
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn test_e2e_validation_short_circuits() {
        let (url, hits) = stub_provider(StatusCode::OK, "{}").await;
        let service = service_for(&url);

        assert!(matches!(
            service.handle(raw("   ", "en", "es")).await,
            Err(TranslateError::Validation(_))
        ));
        assert!(matches!(
            service.handle(raw("hello", "en", "tlh")).await,
            Err(TranslateError::Validation(_))
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_e2e_concurrent_requests_all_recorded() {
        let (url, _) = stub_provider(
            StatusCode::OK,
            r#"{"data":{"translations":{"translatedText":"ok"}}}"#,
        )
        .await;
        let service = Arc::new(service_for(&url));

        let tasks: Vec<_> = (0..4)
            .map(|n| {
                let service = service.clone();
                tokio::spawn(async move { service.handle(raw(&format!("t{}", n), "en", "de")).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(service.history().len(), 4);
    }

    #[tokio::test]
    #[ignore]
    async fn test_e2e_live_provider() {
        if std::env::var("RAPIDAPI_KEY").is_err() {
            eprintln!("⚠️  Skipping: RAPIDAPI_KEY not set");
            return;
        }

        let provider = DeepTranslateProvider::from_env().unwrap();
        let service = TranslateService::new(Arc::new(provider));
        let response = service.handle(raw("Good morning", "en", "ar")).await.unwrap();
        println!(
            "{} → {} ({})",
            "Good morning", response.translated_text, response.original_api_text
        );
        assert!(!response.translated_text.is_empty());
    }
}
