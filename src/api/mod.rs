pub mod client;
pub mod source;
pub mod types;

pub use client::HttpUserSource;
pub use source::{FetchError, UserSource, fetch_users};
pub use types::{Address, Company, Geo, UserList, UserRecord, decode_user_list};
