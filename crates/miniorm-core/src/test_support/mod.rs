//! Shared record fixtures for core tests.

use crate::value::Value;
use miniorm_derive::Record;

///
/// Item
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

///
/// Audit
/// Embedded into other fixtures with `flatten`; never registered itself.
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Audit {
    pub created_by: String,
    pub revision: i32,
    #[column(rename = "Audit_Note")]
    pub note: Option<String>,
}

///
/// Account
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Account {
    pub user_id: u64,
    pub nickname: Option<String>,
    pub last_login: Option<i64>,
    #[column(flatten)]
    pub audit: Audit,
    #[column(skip)]
    pub session_cache: Vec<u8>,
    pub(crate) password_hash: String,
}

///
/// Renamed
/// Two fields claiming the same key; the later one wins.
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
#[allow(non_snake_case)]
pub struct Renamed {
    pub UserId: i64,
    #[column(rename = "user_id")]
    pub legacy_user: i64,
    pub r#type: String,
    pub payload: Value,
}
