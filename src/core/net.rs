// src/core/net.rs
// Blocking HTTP GET with a fixed identity header and a bounded timeout.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::TransportError;

/// Raw page as returned by the server. Status is not judged here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can GET a page. The pipeline holds one of these.
pub trait Transport {
    fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError> {
        (**self).fetch(url)
    }
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError> {
        let t = std::time::Instant::now();
        let resp = self.client.get(url).send()?;
        let status = resp.status();

        // An error page is judged by its status alone; a broken body must not hide it.
        let body = if status.is_success() {
            resp.text()?
        } else {
            resp.text().unwrap_or_else(|e| {
                logd!("GET {url} -> {status}: body unreadable: {e}");
                s!()
            })
        };
        logd!("GET {url} -> {status} ({} bytes) in {:?}", body.len(), t.elapsed());
        Ok(FetchResponse { status: status.as_u16(), body })
    }
}
