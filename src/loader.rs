use std::time::Duration;

use spdlog::{error, info, warn};

use crate::config::Backend;
use crate::user::User;

pub const STATUS_OK: u16 = 200;
pub const STATUS_LOAD_FAILED: u16 = 500;

/// Outcome of fetching the user list.
///
/// `users` is the complete list when `status_code` is 200 and empty otherwise.
#[derive(PartialEq, Debug)]
pub struct LoadResult {
    pub status_code: u16,
    pub users: Vec<User>,
}

impl LoadResult {
    pub fn loaded(users: Vec<User>) -> Self {
        LoadResult {
            status_code: STATUS_OK,
            users,
        }
    }

    pub fn failed(status_code: u16) -> Self {
        LoadResult {
            status_code,
            users: vec![],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }

    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Vec<User>>(body) {
            Ok(users) => LoadResult::loaded(users),
            Err(e) => {
                error!("Error decoding user list: {}", e);
                LoadResult::failed(STATUS_LOAD_FAILED)
            }
        }
    }
}

// Content-Length can be missing, so the received size is checked again
fn decode_body(body: &[u8], max_body_bytes: usize) -> LoadResult {
    if body.len() > max_body_bytes {
        error!("User list of {} bytes exceeds the limit of {} bytes", body.len(), max_body_bytes);
        return LoadResult::failed(STATUS_LOAD_FAILED);
    }
    LoadResult::from_body(body)
}

/// Fetches the complete user list from `backend.users_url` with a single GET
pub async fn load_users(backend: &Backend) -> LoadResult {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(backend.timeout_secs))
        .build() {
        Ok(client) => client,
        Err(e) => {
            error!("Error creating HTTP client: {}", e);
            return LoadResult::failed(STATUS_LOAD_FAILED);
        }
    };

    let response = match client.get(backend.users_url.as_str()).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Error fetching users from {}: {}", backend.users_url, e);
            return LoadResult::failed(STATUS_LOAD_FAILED);
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("Backend {} answered with status {}", backend.users_url, status);
        return LoadResult::failed(status.as_u16());
    }

    if let Some(len) = response.content_length() {
        if len > backend.max_body_bytes as u64 {
            error!("User list of {} bytes exceeds the limit of {} bytes", len, backend.max_body_bytes);
            return LoadResult::failed(STATUS_LOAD_FAILED);
        }
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            error!("Error reading user list body: {}", e);
            return LoadResult::failed(STATUS_LOAD_FAILED);
        }
    };

    let result = decode_body(&body, backend.max_body_bytes);
    if result.is_ok() {
        info!("Loaded {} users from {}", result.users.len(), backend.users_url);
    }
    result
}
