use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::domain::Record;
use crate::services::error_handling::{FetchError, LogHelper};

/// Where the dashboard's records come from. One call returns the whole
/// collection; there is no paging on the wire.
#[automock]
#[async_trait(?Send)]
pub trait RecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError>;
}

/// Reads the collection with a single `GET` against a JSON endpoint.
#[derive(Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        let mut source = Self::new(config.endpoint.clone());
        source.timeout = config.request_timeout();
        source
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn network_error(&self, error: reqwest::Error) -> FetchError {
        match self.timeout {
            Some(timeout) if error.is_timeout() => FetchError::Timeout {
                endpoint: self.endpoint.clone(),
                duration_secs: timeout.as_secs_f64().ceil() as u64,
            },
            _ => FetchError::Network {
                endpoint: self.endpoint.clone(),
                message: error.to_string(),
            },
        }
    }

    async fn request(&self) -> Result<Vec<Record>, FetchError> {
        let mut request = self.client.get(&self.endpoint);
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.network_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.network_error(e))?;
        serde_json::from_str::<Vec<Record>>(&body).map_err(|e| FetchError::Decode {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl RecordSource for HttpRecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        LogHelper::log_fetch_started(&self.endpoint);
        let outcome = self.request().await;
        match &outcome {
            Ok(records) => LogHelper::log_fetch_completed(&self.endpoint, records.len()),
            Err(error) => LogHelper::log_fetch_failed(error),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error_handling::UserErrorFormatter;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and returns the URL to reach it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/comments")
    }

    #[tokio::test]
    async fn test_fetch_decodes_records() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"postId":1,"id":1,"name":"a","email":"a@x","body":"b"},
                {"postId":1,"id":2,"name":"c","email":"c@x","body":"d"}]"#,
        )
        .await;

        let records = HttpRecordSource::new(url).fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].display_name, "c");
    }

    #[tokio::test]
    async fn test_http_error_status_is_reported() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;

        let err = HttpRecordSource::new(url).fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_a_decode_error() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"comments": []}"#).await;

        let err = HttpRecordSource::new(url).fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let err = HttpRecordSource::new(format!("http://{addr}/comments"))
            .with_timeout(Duration::from_millis(200))
            .fetch_all()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout { duration_secs: 1, .. }));
        assert!(UserErrorFormatter::format_fetch_error(&err).contains("within 1 second."));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpRecordSource::new(format!("http://{addr}/comments"))
            .fetch_all()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
    }
}
