use crate::errors::FetchError;
use crate::models::{RawSalesRecord, SalesPayload, SalesSnapshot, SalesView};
use crate::notify::{Notices, Notification};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info, warn};

#[async_trait]
pub trait SalesSource: Send + Sync {
    async fn fetch_sales(&self) -> Result<SalesSnapshot, FetchError>;
}

/// Single GET against the sales workflow endpoint. No retries, no timeout
/// beyond what the transport applies.
#[derive(Clone)]
pub struct HttpSalesSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSalesSource {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sales-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SalesSource for HttpSalesSource {
    async fn fetch_sales(&self) -> Result<SalesSnapshot, FetchError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.bytes().await?;
        snapshot_from_body(&body)
    }
}

/// Serves a fixed snapshot, or fails every time when built with `failing`.
pub struct StaticSalesSource {
    snapshot: Option<SalesSnapshot>,
}

impl StaticSalesSource {
    pub fn new(snapshot: SalesSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn failing() -> Self {
        Self { snapshot: None }
    }
}

#[async_trait]
impl SalesSource for StaticSalesSource {
    async fn fetch_sales(&self) -> Result<SalesSnapshot, FetchError> {
        match &self.snapshot {
            Some(snapshot) => Ok(snapshot.clone()),
            None => Err(FetchError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}

/// Invalid JSON is an error; valid JSON of the wrong shape is an empty
/// snapshot.
pub fn snapshot_from_body(body: &[u8]) -> Result<SalesSnapshot, FetchError> {
    let value: Value = serde_json::from_slice(body)?;
    let payload: SalesPayload = serde_json::from_value(value).unwrap_or_default();

    let Some(data) = payload.data else {
        warn!("sales payload has no data field");
        return Ok(SalesSnapshot::new());
    };

    match serde_json::from_value::<Vec<RawSalesRecord>>(data) {
        Ok(records) => Ok(records),
        Err(err) => {
            warn!("sales payload data has an unexpected shape: {err}");
            Ok(SalesSnapshot::new())
        }
    }
}

/// Runs one fetch cycle. Failures never escape: the view gets an empty
/// snapshot with `failed` set.
pub async fn fetch_view(source: &dyn SalesSource) -> SalesView {
    let mut view = SalesView {
        loading: true,
        ..SalesView::default()
    };

    match source.fetch_sales().await {
        Ok(snapshot) => {
            info!(records = snapshot.len(), "sales snapshot loaded");
            view.snapshot = snapshot;
        }
        Err(err) => {
            error!("failed to fetch sales data: {err}");
            view.failed = true;
        }
    }

    view.loading = false;
    view
}

/// Fetch cycle for a rendered page: a failure also queues one error toast for
/// that page to show.
pub async fn load_sales(source: &dyn SalesSource, notices: &Notices) -> SalesView {
    let view = fetch_view(source).await;
    if view.failed {
        notices.push(Notification::fetch_failed()).await;
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Variant;
    use axum::{http::StatusCode, routing::get, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/sales")
    }

    #[test]
    fn body_with_records_is_parsed_in_order() {
        let body = br#"{"data": [{"SKU": "100", "sum": "5000000"}, {"SKU": "200", "sum": "3000000"}]}"#;
        let snapshot = snapshot_from_body(body).unwrap();
        assert_eq!(
            snapshot,
            vec![
                RawSalesRecord::new("100", "5000000"),
                RawSalesRecord::new("200", "3000000"),
            ]
        );
    }

    #[test]
    fn wrong_shapes_become_empty_snapshots() {
        let bodies: [&[u8]; 5] = [
            br#"{}"#,
            br#"{"data": null}"#,
            br#"{"data": "nope"}"#,
            br#"{"data": [1, 2]}"#,
            br#"[{"SKU": "1", "sum": "1"}]"#,
        ];
        for body in bodies {
            assert!(snapshot_from_body(body).unwrap().is_empty());
        }
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(snapshot_from_body(b"<html>"), Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn failed_fetch_yields_empty_view_and_one_toast() {
        let notices = Notices::new();
        let view = load_sales(&StaticSalesSource::failing(), &notices).await;

        assert!(!view.loading);
        assert!(view.failed);
        assert!(view.snapshot.is_empty());

        let toasts = notices.drain().await;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, Variant::Destructive);
        assert_eq!(toasts[0].description, "Failed to fetch sales data");
    }

    #[tokio::test]
    async fn fetch_view_marks_failure_without_queueing() {
        let notices = Notices::new();
        for _ in 0..3 {
            let view = fetch_view(&StaticSalesSource::failing()).await;
            assert!(view.failed);
            assert!(!view.loading);
            assert!(view.snapshot.is_empty());
        }

        let view = load_sales(&StaticSalesSource::failing(), &notices).await;
        assert!(view.failed);
        assert_eq!(notices.drain().await.len(), 1);
    }

    #[tokio::test]
    async fn successful_fetch_is_silent() {
        let notices = Notices::new();
        let source = StaticSalesSource::new(vec![RawSalesRecord::new("1", "10")]);
        let view = load_sales(&source, &notices).await;

        assert!(!view.loading);
        assert!(!view.failed);
        assert_eq!(view.snapshot.len(), 1);
        assert!(notices.drain().await.is_empty());
    }

    #[tokio::test]
    async fn http_source_reads_endpoint() {
        let url = serve(Router::new().route(
            "/sales",
            get(|| async { r#"{"data":[{"SKU":"9","sum":"12"}]}"# }),
        ))
        .await;

        let source = HttpSalesSource::new(url).unwrap();
        let snapshot = source.fetch_sales().await.unwrap();
        assert_eq!(snapshot, vec![RawSalesRecord::new("9", "12")]);
    }

    #[tokio::test]
    async fn http_source_rejects_error_status() {
        let url = serve(Router::new().route(
            "/sales",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        ))
        .await;

        let source = HttpSalesSource::new(url).unwrap();
        let err = source.fetch_sales().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status == StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let source = HttpSalesSource::new(format!("http://127.0.0.1:{port}/sales")).unwrap();
        assert!(matches!(source.fetch_sales().await, Err(FetchError::Http(_))));
    }
}
