use serde::{Deserialize, Serialize};

/// Organization roster entry consumed by the assign mutator. The roster is
/// seeded by the presentation layer; the core never creates or edits it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrgMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl OrgMember {
    pub fn new(id: &str, name: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            avatar: None,
        }
    }
}
