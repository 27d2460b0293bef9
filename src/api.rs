// src/api.rs
#![allow(async_fn_in_trait)]

use gloo_net::http::{Request, Response};
use urlencoding::encode;

use crate::error::ApiError;
use crate::model::{ActivityCatalog, DetailBody, MessageBody};

/// The three backend calls the board makes.
///
/// Mutations resolve to the server's success `message`; a rejection comes
/// back as [`ApiError::Status`] carrying the server's `detail`.
pub trait ActivityApi {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ApiError>;

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub fn catalog_url(base: &str) -> String {
    format!("{}/activities", trim_base(base))
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        trim_base(base),
        encode(activity),
        encode(email)
    )
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/unregister?email={}",
        trim_base(base),
        encode(activity),
        encode(email)
    )
}

/// Turns a signup/unregister response into the message to show.
///
/// The body is read as JSON whatever the status; a body that isn't JSON is a
/// decode error, not a rejection.
pub fn decode_mutation(ok: bool, status: u16, body: &str) -> Result<String, ApiError> {
    if ok {
        let parsed: MessageBody = serde_json::from_str(body)?;
        Ok(parsed.message)
    } else {
        let parsed: DetailBody = serde_json::from_str(body)?;
        Err(ApiError::Status {
            status,
            detail: parsed.text(),
        })
    }
}

/// Browser fetch client. `base` is prefixed to every path; empty means
/// same-origin.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn read_mutation(resp: Response) -> Result<String, ApiError> {
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await?;
        decode_mutation(ok, status, &body)
    }
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ApiError> {
        let resp = Request::get(&catalog_url(&self.base)).send().await?;
        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                detail: None,
            });
        }
        Ok(resp.json::<ActivityCatalog>().await?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = signup_url(&self.base, activity, email);
        let resp = Request::post(&url).send().await?;
        Self::read_mutation(resp).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = unregister_url(&self.base, activity, email);
        let resp = Request::delete(&url).send().await?;
        Self::read_mutation(resp).await
    }
}
