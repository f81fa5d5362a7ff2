use crate::domain::constants::{LOG_PATH, RUN_DATE_PATH, RUN_PATH, SUBMIT_PATH};
use crate::domain::models::{ClusterResult, DateRequest, PatientRecord, SubmitResult};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Requests the client issues against the clustering service.
pub trait ClusterApi: Send + Sync {
    fn run(&self) -> Result<ClusterResult, ApiError>;
    fn run_for_date(&self, data_ref: &str) -> Result<ClusterResult, ApiError>;
    fn submit(&self, record: &PatientRecord) -> Result<SubmitResult, ApiError>;
    fn script_output(&self) -> Result<String, ApiError>;
}

pub struct HttpClusterApi {
    base: String,
    client: reqwest::blocking::Client,
}

impl HttpClusterApi {
    pub fn new(base: &str, timeout_ms: u64) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// The server answers 4xx/5xx with an `erro` envelope, so the status code
/// does not decide success; only the body does.
fn decode_envelope<T: DeserializeOwned>(
    resp: reqwest::blocking::Response,
) -> Result<T, ApiError> {
    let status = resp.status().as_u16();
    let body = resp.text()?;
    debug!(status, bytes = body.len(), "envelope received");
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { status, source })
}

impl ClusterApi for HttpClusterApi {
    fn run(&self) -> Result<ClusterResult, ApiError> {
        let url = self.url(RUN_PATH);
        debug!(%url, "GET");
        decode_envelope(self.client.get(url).send()?)
    }

    fn run_for_date(&self, data_ref: &str) -> Result<ClusterResult, ApiError> {
        let url = self.url(RUN_DATE_PATH);
        debug!(%url, data_ref, "POST");
        let resp = self
            .client
            .post(url)
            .json(&DateRequest { data_ref })
            .send()?;
        decode_envelope(resp)
    }

    fn submit(&self, record: &PatientRecord) -> Result<SubmitResult, ApiError> {
        let url = self.url(SUBMIT_PATH);
        debug!(%url, bairro = %record.bairro, "POST");
        decode_envelope(self.client.post(url).json(record).send()?)
    }

    fn script_output(&self) -> Result<String, ApiError> {
        let url = self.url(LOG_PATH);
        debug!(%url, "GET");
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned response and hands back the raw request it got.
    fn one_shot(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap();
                }
                head.push_str(&line);
                if line == "\r\n" {
                    break;
                }
            }
            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();
            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            head + &String::from_utf8(body).unwrap()
        });
        (base, handle)
    }

    #[test]
    fn run_decodes_saida_envelope() {
        let (base, handle) = one_shot("200 OK", r#"{"saida":"12 clusters found"}"#);
        let api = HttpClusterApi::new(&base, 2000).unwrap();
        let result = api.run().unwrap();
        assert_eq!(result.message(), "12 clusters found");
        let request = handle.join().unwrap();
        assert!(request.starts_with("GET /rodar_dbscan HTTP/1.1"));
    }

    #[test]
    fn run_for_date_posts_data_ref_json() {
        let (base, handle) = one_shot("200 OK", r#"{"saida":"ok"}"#);
        let api = HttpClusterApi::new(&format!("{}/", base), 2000).unwrap();
        api.run_for_date("2024-01-01").unwrap();
        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /rodar_dbscan_data HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"data_ref":"2024-01-01"}"#));
    }

    #[test]
    fn error_status_still_yields_erro_envelope() {
        let (base, handle) = one_shot("500 Internal Server Error", r#"{"erro":"boom"}"#);
        let api = HttpClusterApi::new(&base, 2000).unwrap();
        let result = api.run().unwrap();
        assert_eq!(result.message(), "boom");
        assert!(result.is_error());
        handle.join().unwrap();
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let (base, handle) = one_shot("404 Not Found", "Mapa ainda não gerado.");
        let api = HttpClusterApi::new(&base, 2000).unwrap();
        let err = api.run().unwrap_err();
        assert!(matches!(err, ApiError::Decode { status: 404, .. }));
        handle.join().unwrap();
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let api = HttpClusterApi::new(&base, 1000).unwrap();
        assert!(matches!(api.run(), Err(ApiError::Transport(_))));
    }
}
