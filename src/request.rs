use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("received non-OK response ({})", .0.as_u16())]
    NonOk(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Sends one GET and classifies it. Only an exact 200 with a fully read body
/// counts as success; the failure is printed before it is returned.
pub async fn issue_request(client: &reqwest::Client, url: &str) -> Result<(), RequestError> {
    let res = send(client, url).await;
    if let Err(e) = &res {
        println!("{e}");
    }
    res
}

async fn send(client: &reqwest::Client, url: &str) -> Result<(), RequestError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!(%url, %status, "response received");
    if status != StatusCode::OK {
        return Err(RequestError::NonOk(status));
    }

    // drain so the connection can be reused
    response.bytes().await?;
    Ok(())
}
