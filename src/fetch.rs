use std::fs;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::info;
use url::Url;

/// Failure to obtain the input document. Both variants end the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error downloading file: {0}")]
    Download(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Fetch the whole document behind `url` and decode it as UTF-8, dropping
/// invalid sequences.
pub fn download_text(url: &str) -> Result<String, FetchError> {
    let start_time = Instant::now();
    info!(action = "start", component = "download", url = url, "Fetching access log");

    let parsed = Url::parse(url)
        .map_err(|e| FetchError::Unexpected(format!("invalid url '{}': {}", url, e)))?;

    let bytes = match parsed.scheme() {
        "file" => read_file(&parsed)?,
        "http" | "https" => read_http(&parsed)?,
        other => {
            return Err(FetchError::Download(format!(
                "unknown url type: {}",
                other
            )))
        }
    };

    let text = decode_utf8_ignoring_errors(&bytes);
    info!(
        action = "complete",
        component = "download",
        bytes = bytes.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Access log fetched"
    );
    Ok(text)
}

fn decode_utf8_ignoring_errors(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn read_file(url: &Url) -> Result<Vec<u8>, FetchError> {
    let path = url
        .to_file_path()
        .map_err(|_| FetchError::Download(format!("not a local file url: {}", url)))?;
    info!(action = "read", component = "download", path = ?path, "Reading local file");
    fs::read(&path).map_err(|e| FetchError::Download(format!("{}: {}", path.display(), e)))
}

/// Blocking client without the default request timeout.
fn http_client() -> Result<Client, FetchError> {
    Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| FetchError::Unexpected(e.to_string()))
}

fn read_http(url: &Url) -> Result<Vec<u8>, FetchError> {
    let response = http_client()?
        .get(url.as_str())
        .send()
        .and_then(|res| res.error_for_status())
        .map_err(|e| FetchError::Download(e.to_string()))?;
    info!(action = "response", component = "download", status = %response.status(), "Received response");

    response
        .bytes()
        .map(|body| body.to_vec())
        .map_err(|e| FetchError::Unexpected(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_local_file_urls() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"/a.jpg,01/01/2020 10:00:00,Firefox\n").unwrap();
        let url = Url::from_file_path(file.path()).unwrap();

        let text = download_text(url.as_str()).unwrap();
        assert_eq!(text, "/a.jpg,01/01/2020 10:00:00,Firefox\n");
    }

    #[test]
    fn invalid_utf8_bytes_are_dropped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"/a.jpg\xff,01/01/2020 10:00:00,Fire\xc3fox\n").unwrap();
        let url = Url::from_file_path(file.path()).unwrap();

        let text = download_text(url.as_str()).unwrap();
        assert_eq!(text, "/a.jpg,01/01/2020 10:00:00,Firefox\n");
    }

    #[test]
    fn decoding_keeps_valid_multibyte_text() {
        assert_eq!(decode_utf8_ignoring_errors("/caf\u{e9}.png".as_bytes()), "/caf\u{e9}.png");
        assert_eq!(decode_utf8_ignoring_errors(b"\xe2\x82/x"), "/x");
    }

    #[test]
    fn http_client_has_no_request_timeout() {
        // reqwest's blocking client otherwise gives up after 30 seconds.
        assert!(http_client().is_ok());
    }

    #[test]
    fn missing_file_is_a_download_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(dir.path().join("missing.csv")).unwrap();

        let err = download_text(url.as_str()).unwrap_err();
        assert!(matches!(err, FetchError::Download(_)));
        assert!(err.to_string().starts_with("Error downloading file: "));
    }

    #[test]
    fn unparsable_url_is_unexpected() {
        let err = download_text("not a url").unwrap_err();
        assert!(matches!(err, FetchError::Unexpected(_)));
        assert!(err.to_string().starts_with("Unexpected error: "));
    }

    #[test]
    fn unsupported_scheme_is_a_download_error() {
        let err = download_text("ftp://example.com/log.csv").unwrap_err();
        assert_eq!(err.to_string(), "Error downloading file: unknown url type: ftp");
    }
}
