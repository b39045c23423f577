//! Frontend Models
//!
//! Rows returned by the list endpoints.

use serde::Deserialize;

/// Something a list table can render
pub trait TableRow {
    /// Column headers, in display order
    fn headers() -> &'static [&'static str];
    /// Cell text, same order as `headers`
    fn cells(&self) -> Vec<String>;
    /// Stable key for keyed rendering
    fn key(&self) -> String;
}

/// Row identifier; Mongo-style rows send `_id`, sometimes alongside an `id` virtual
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RowId {
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl RowId {
    /// Prefer `_id`, fall back to `id`
    pub fn value(&self) -> String {
        self.mongo_id
            .as_ref()
            .or(self.id.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub id: RowId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Phone", "Agent", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            opt(&self.phone),
            opt(&self.agent_name),
            opt(&self.created_at),
        ]
    }

    fn key(&self) -> String {
        self.id.value()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(flatten)]
    pub id: RowId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub commission_rate: Option<f64>,
    #[serde(default)]
    pub user_count: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TableRow for Agent {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Commission %", "Users", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.commission_rate.map(money).unwrap_or_else(|| "-".to_string()),
            self.user_count.to_string(),
            opt(&self.created_at),
        ]
    }

    fn key(&self) -> String {
        self.id.value()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(flatten)]
    pub id: RowId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TableRow for Admin {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone(), opt(&self.created_at)]
    }

    fn key(&self) -> String {
        self.id.value()
    }
}

/// Ad platform an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdPlatform {
    Facebook,
    Google,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdAccount {
    #[serde(flatten)]
    pub id: RowId,
    pub account_name: String,
    #[serde(default)]
    pub account_id: Option<String>,
    pub platform: AdPlatform,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub balance: f64,
}

impl TableRow for AdAccount {
    fn headers() -> &'static [&'static str] {
        &["Account", "Account ID", "Owner", "Status", "Balance"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.account_name.clone(),
            opt(&self.account_id),
            opt(&self.owner_email),
            opt(&self.status),
            money(self.balance),
        ]
    }

    fn key(&self) -> String {
        self.id.value()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(flatten)]
    pub id: RowId,
    pub owner_email: String,
    pub balance: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TableRow for Wallet {
    fn headers() -> &'static [&'static str] {
        &["Owner", "Balance", "Currency", "Updated"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.owner_email.clone(),
            money(self.balance),
            opt(&self.currency),
            opt(&self.updated_at),
        ]
    }

    fn key(&self) -> String {
        self.id.value()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    #[serde(flatten)]
    pub id: RowId,
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TableRow for Deposit {
    fn headers() -> &'static [&'static str] {
        &["User", "Amount", "Method", "Status", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.user_email),
            money(self.amount),
            opt(&self.method),
            opt(&self.status),
            opt(&self.created_at),
        ]
    }

    fn key(&self) -> String {
        self.id.value()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLog {
    #[serde(flatten)]
    pub id: RowId,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TableRow for TransactionLog {
    fn headers() -> &'static [&'static str] {
        &["Type", "User", "Amount", "Description", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.clone(),
            opt(&self.user_email),
            money(self.amount),
            opt(&self.description),
            opt(&self.created_at),
        ]
    }

    fn key(&self) -> String {
        self.id.value()
    }
}
