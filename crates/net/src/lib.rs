//! Asynchronous POST primitive backing [`form_submit::PostTransport`].
//!
//! URL-encodes [`SubmissionData`] and ships it with reqwest. The success
//! callback fires only on a 2xx response; everything else is logged and
//! dropped, matching the success-only callback contract of browser-style
//! form posting.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

use anyhow::{Context as _, Error};
use form_submit::{PostCallback, PostResponse, PostTransport, ResponseFormat, SubmissionData};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tokio::runtime::Handle;
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode submission data as an `application/x-www-form-urlencoded` body.
/// A multi-valued name repeats its key once per value, in encounter order.
pub fn encode_urlencoded(data: &SubmissionData) -> String {
    let mut body = String::new();
    for (name, value) in data.iter() {
        for item in value.values() {
            if !body.is_empty() {
                body.push('&');
            }
            body.push_str(&urlencoding::encode(name));
            body.push('=');
            body.push_str(&urlencoding::encode(item));
        }
    }
    body
}

/// POST `data` to `url` and collect the response.
///
/// # Errors
///
/// Invalid URL or transport failure; a non-2xx response is not an error
/// here, it comes back with `ok == false`.
pub async fn post(
    client: &Client,
    url: &str,
    data: &SubmissionData,
    format: ResponseFormat,
) -> Result<PostResponse, Error> {
    let parsed = Url::parse(url).with_context(|| format!("invalid post url: {url}"))?;
    let body = encode_urlencoded(data);

    let resp = client
        .post(parsed)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(body)
        .send()
        .await
        .context("post request failed")?;

    let status = resp.status().as_u16();
    let status_text = resp.status().canonical_reason().unwrap_or("").to_owned();
    let ok = (200..300).contains(&status);
    let body_text = resp.text().await.context("failed to read post response")?;

    let json = if ok && format == ResponseFormat::Json {
        match serde_json::from_str(&body_text) {
            Ok(value) => Some(value),
            Err(parse_err) => {
                // A malformed body is the endpoint's bug; surface the text.
                log::warn!("post response is not valid json: {parse_err}");
                None
            }
        }
    } else {
        None
    };

    Ok(PostResponse {
        status,
        status_text,
        ok,
        body_text,
        json,
    })
}

/// HTTP transport for form submission. Requests run on the supplied tokio
/// runtime handle; the caller's thread never blocks.
#[derive(Debug, Clone)]
pub struct HttpPoster {
    client: Client,
    handle: Handle,
}

impl HttpPoster {
    pub fn new(handle: Handle) -> Self {
        Self {
            client: Client::new(),
            handle,
        }
    }
}

impl PostTransport for HttpPoster {
    fn post(
        &self,
        url: &str,
        data: SubmissionData,
        callback: Option<PostCallback>,
        format: ResponseFormat,
    ) {
        let client = self.client.clone();
        let url = url.to_owned();
        self.handle.spawn(async move {
            match post(&client, &url, &data, format).await {
                Ok(response) if response.ok => {
                    if let Some(callback) = callback {
                        callback(response);
                    }
                }
                Ok(response) => {
                    log::warn!("post to {url} answered {}: dropped", response.status);
                }
                Err(send_err) => {
                    log::warn!("post to {url} failed: {send_err}");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::mpsc;

    /// Read one full request (headers plus content-length body) so the
    /// client never sees its upload cut short.
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let count = stream.read(&mut chunk).await.unwrap();
            if count == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..count]);
            let text = String::from_utf8_lossy(&buf).into_owned();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.trim().eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Minimal form endpoint: 500 for posts to `/fail`, 200 with a json
    /// body for everything else. One connection per request.
    async fn spawn_form_endpoint() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let request = read_request(&mut stream).await;
                    let (status_line, body) = if request.starts_with("POST /fail") {
                        ("HTTP/1.1 500 Internal Server Error", "backend exploded")
                    } else {
                        ("HTTP/1.1 200 OK", r#"{"saved":true}"#)
                    };
                    let response = format!(
                        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    stream.write_all(response.as_bytes()).await.unwrap();
                    stream.shutdown().await.unwrap();
                });
            }
        });
        addr
    }

    fn sample_data() -> SubmissionData {
        let mut data = SubmissionData::new();
        data.add("user", "ada lovelace");
        data.add("color", "red");
        data.add("color", "blue");
        data.add("note", "a&b=c");
        data
    }

    #[test]
    fn test_encode_repeats_multi_valued_keys() {
        let body = encode_urlencoded(&sample_data());
        assert_eq!(
            body,
            "user=ada%20lovelace&color=red&color=blue&note=a%26b%3Dc"
        );
    }

    #[test]
    fn test_encode_empty_data() {
        assert_eq!(encode_urlencoded(&SubmissionData::new()), "");
    }

    #[test]
    fn test_encode_keeps_empty_values() {
        let mut data = SubmissionData::new();
        data.add("empty", "");
        data.add("x", "1");
        assert_eq!(encode_urlencoded(&data), "empty=&x=1");
    }

    #[tokio::test]
    async fn test_post_collects_status_and_parses_json() {
        let addr = spawn_form_endpoint().await;
        let client = Client::new();
        let mut data = SubmissionData::new();
        data.add("user", "ada");

        let accepted = post(
            &client,
            &format!("http://{addr}/submit"),
            &data,
            ResponseFormat::Json,
        )
        .await
        .unwrap();
        assert!(accepted.ok);
        assert_eq!(accepted.status, 200);
        assert_eq!(accepted.json, Some(serde_json::json!({ "saved": true })));

        // A non-2xx answer is not a transport error; it comes back with
        // ok == false and no parsed body.
        let refused = post(
            &client,
            &format!("http://{addr}/fail"),
            &data,
            ResponseFormat::Json,
        )
        .await
        .unwrap();
        assert!(!refused.ok);
        assert_eq!(refused.status, 500);
        assert_eq!(refused.json, None);
        assert_eq!(refused.body_text, "backend exploded");
    }

    #[tokio::test]
    async fn test_poster_callback_fires_only_on_success() {
        let addr = spawn_form_endpoint().await;
        let poster = HttpPoster::new(Handle::current());
        let (sender, mut receiver) = mpsc::unbounded_channel::<&'static str>();
        let mut data = SubmissionData::new();
        data.add("user", "ada");

        let fail_sender = sender.clone();
        poster.post(
            &format!("http://{addr}/fail"),
            data.clone(),
            Some(Box::new(move |_| {
                fail_sender.send("fail").unwrap();
            })),
            ResponseFormat::Text,
        );

        let ok_sender = sender.clone();
        poster.post(
            &format!("http://{addr}/submit"),
            data,
            Some(Box::new(move |response| {
                ok_sender.send(if response.ok { "submit" } else { "submit-not-ok" }).unwrap();
            })),
            ResponseFormat::Text,
        );

        // Only the 2xx submission may invoke its callback.
        assert_eq!(receiver.recv().await, Some("submit"));

        // The failing request was issued first; give it ample time to
        // finish before checking its callback stayed silent.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(receiver.try_recv().is_err());
    }
}
