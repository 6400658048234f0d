// src/entity/variant.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SyazaiError;

/// Who the apology is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recipient {
    #[default]
    Client,
    Boss,
    Customer,
    Friend,
}

impl Recipient {
    pub const ALL: [Recipient; 4] = [
        Recipient::Client,
        Recipient::Boss,
        Recipient::Customer,
        Recipient::Friend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Recipient::Client => "取引先",
            Recipient::Boss => "上司",
            Recipient::Customer => "顧客",
            Recipient::Friend => "友人",
        }
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recipient::Client => write!(f, "client"),
            Recipient::Boss => write!(f, "boss"),
            Recipient::Customer => write!(f, "customer"),
            Recipient::Friend => write!(f, "friend"),
        }
    }
}

impl std::str::FromStr for Recipient {
    type Err = SyazaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Recipient::Client),
            "boss" => Ok(Recipient::Boss),
            "customer" => Ok(Recipient::Customer),
            "friend" => Ok(Recipient::Friend),
            _ => Err(SyazaiError::invalid_argument(
                "recipient",
                s,
                &["client", "boss", "customer", "friend"],
            )),
        }
    }
}

/// Delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Email,
    Chat,
    Phone,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Email, Method::Chat, Method::Phone];

    pub fn label(&self) -> &'static str {
        match self {
            Method::Email => "メール",
            Method::Chat => "チャット",
            Method::Phone => "電話台本",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Email => write!(f, "email"),
            Method::Chat => write!(f, "chat"),
            Method::Phone => write!(f, "phone"),
        }
    }
}

impl std::str::FromStr for Method {
    type Err = SyazaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Method::Email),
            "chat" => Ok(Method::Chat),
            "phone" => Ok(Method::Phone),
            _ => Err(SyazaiError::invalid_argument(
                "method",
                s,
                &["email", "chat", "phone"],
            )),
        }
    }
}

/// Reason given alongside the apology. "No excuse" is modelled as `Option::None`
/// at the call sites rather than as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Excuse {
    Health,
    System,
    Traffic,
    Family,
}

impl Excuse {
    pub const ALL: [Excuse; 4] = [
        Excuse::Health,
        Excuse::System,
        Excuse::Traffic,
        Excuse::Family,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Excuse::Health => "体調不良",
            Excuse::System => "システム障害",
            Excuse::Traffic => "交通機関の遅延",
            Excuse::Family => "家庭の事情",
        }
    }

    /// Parse an excuse selection where `"none"` means no excuse.
    pub fn parse_choice(s: &str) -> Result<Option<Excuse>, SyazaiError> {
        if s == "none" {
            return Ok(None);
        }
        s.parse().map(Some).map_err(|_| {
            SyazaiError::invalid_argument(
                "excuse",
                s,
                &["none", "health", "system", "traffic", "family"],
            )
        })
    }
}

impl std::fmt::Display for Excuse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Excuse::Health => write!(f, "health"),
            Excuse::System => write!(f, "system"),
            Excuse::Traffic => write!(f, "traffic"),
            Excuse::Family => write!(f, "family"),
        }
    }
}

impl std::str::FromStr for Excuse {
    type Err = SyazaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" => Ok(Excuse::Health),
            "system" => Ok(Excuse::System),
            "traffic" => Ok(Excuse::Traffic),
            "family" => Ok(Excuse::Family),
            _ => Err(SyazaiError::invalid_argument(
                "excuse",
                s,
                &["health", "system", "traffic", "family"],
            )),
        }
    }
}

/// Method-shaped text payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBody {
    /// Subject line candidates, email only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    pub body: String,
    /// Phone script greeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<String>,
    /// Phone script sign-off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<String>,
}

impl ContentBody {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            subjects: None,
            body: body.into(),
            opening: None,
            closing: None,
        }
    }
}

/// Partial content laid over a base [`ContentBody`]. Only fields that are
/// present replace the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<String>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        self.subjects.is_none()
            && self.body.is_none()
            && self.opening.is_none()
            && self.closing.is_none()
    }

    /// Merge this patch over `base`, returning a new value. `base` is untouched.
    pub fn apply(&self, base: &ContentBody) -> ContentBody {
        ContentBody {
            subjects: self.subjects.clone().or_else(|| base.subjects.clone()),
            body: self.body.clone().unwrap_or_else(|| base.body.clone()),
            opening: self.opening.clone().or_else(|| base.opening.clone()),
            closing: self.closing.clone().or_else(|| base.closing.clone()),
        }
    }
}

/// Content authored for one (recipient, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApologyVariant {
    pub recipient: Recipient,
    pub method: Method,
    pub content: ContentBody,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub excuse_overrides: BTreeMap<Excuse, ContentPatch>,
}

impl ApologyVariant {
    pub fn new(recipient: Recipient, method: Method, content: ContentBody) -> Self {
        Self {
            recipient,
            method,
            content,
            excuse_overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, excuse: Excuse, patch: ContentPatch) -> Self {
        self.excuse_overrides.insert(excuse, patch);
        self
    }

    pub fn matches(&self, recipient: Recipient, method: Method) -> bool {
        self.recipient == recipient && self.method == method
    }
}
