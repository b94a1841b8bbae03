//! Typed calls to the dashboard backend.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::session::CurrentUser;
use crate::summary::DashboardSummary;

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn check_status(response: &Response, url: &str) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        })
    }
}

/// `None` when the backend reports no active session.
pub async fn fetch_current_user(url: &str) -> Result<Option<CurrentUser>, ApiError> {
    let response = Request::get(url).send().await?;
    if response.status() == 401 {
        return Ok(None);
    }
    check_status(&response, url)?;
    decode(response, url).await.map(Some)
}

pub async fn logout(url: &str) -> Result<(), ApiError> {
    let response = Request::post(url).send().await?;
    check_status(&response, url)
}

pub async fn fetch_dashboard_summary(url: &str) -> Result<DashboardSummary, ApiError> {
    let response = Request::get(url).send().await?;
    check_status(&response, url)?;
    decode(response, url).await
}
