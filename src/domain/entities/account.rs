use serde::{Deserialize, Deserializer, Serialize};

pub const CHECKBOX_ID_PREFIX: &str = "check";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        AccountId(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        AccountId(value)
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        AccountId(value.to_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The backend hands out integer primary keys but the review endpoints
// receive them back as strings.
impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(value) => AccountId::from(value),
            RawId::Text(value) => AccountId(value),
        })
    }
}

/// Element id of the checkbox rendered for an account, e.g. `check-7`.
pub fn checkbox_element_id(id: &AccountId) -> String {
    format!("{CHECKBOX_ID_PREFIX}-{}", id.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingAccount {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewDecision {
    Pass,
    Fail,
}

impl ReviewDecision {
    pub fn success_message(self) -> &'static str {
        match self {
            ReviewDecision::Pass => "帳號已通過審核",
            ReviewDecision::Fail => "帳號未通過審核",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ReviewDecision::Pass => "帳號審核通過",
            ReviewDecision::Fail => "帳號審核未通過",
        }
    }
}

/// The accounts whose checkboxes were checked when an action button was clicked, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSelection {
    ids: Vec<AccountId>,
}

impl AccountSelection {
    pub fn ids(&self) -> &[AccountId] {
        &self.ids
    }

    pub fn contains(&self, id: &AccountId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<AccountId> for AccountSelection {
    fn from_iter<T: IntoIterator<Item = AccountId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewPayload<'a> {
    pub ids: &'a [AccountId],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApprovalResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
