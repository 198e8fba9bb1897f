use log::debug;
use serde::{Deserialize, Serialize};

/// One user as returned by the `/users` listing endpoint.
///
/// Only the fields the list view needs are kept. `phone` is on the wire but
/// is dropped during decoding, like every other field not declared here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserRecord {
    /// `None` only when the server omits the id. Such records are never
    /// matched by an exclusion.
    pub id: Option<i64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub website: Option<String>,
    pub company: Option<Company>,
}

impl UserRecord {
    /// Name shown in the list: `name`, then `username`, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("(unnamed)")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: Option<Geo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Geo {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Company {
    pub name: Option<String>,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

/// Ordered users, in the order they are shown.
pub type UserList = Vec<UserRecord>;

/// Decodes a listing response body.
///
/// An empty body or a literal `null` is an empty list, not an error.
/// `null` entries inside the array are skipped.
pub fn decode_user_list(body: &[u8]) -> Result<UserList, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let raw: Option<Vec<Option<UserRecord>>> = serde_json::from_slice(body)?;
    let raw = raw.unwrap_or_default();
    let total = raw.len();
    let users: UserList = raw.into_iter().flatten().collect();
    if users.len() != total {
        debug!("Skipped {} null entries in user listing", total - users.len());
    }
    Ok(users)
}
