use serde::Deserialize;

/// One user row as returned by the backend `/users` endpoint
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct User {
    pub id: u64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
