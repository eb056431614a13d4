use crate::domain::models::lead::Lead;
use crate::domain::models::member::OrgMember;
use crate::domain::models::user::{Role, User};

/// Accounts written to the store on first run.
pub fn default_users() -> Vec<User> {
    vec![
        User::new("user1", "admin", "admin123", Role::Admin, "Anand Kumar"),
        User::new("user2", "user", "user123", Role::Member, "Olivia Rhye"),
        User::new("user3", "demo", "demo123", Role::Member, "Phoenix Baker"),
    ]
}

/// Roster the assign mutator resolves against. Seeded here for convenience;
/// its lifecycle is owned by the presentation layer, not the core.
pub fn default_org_members() -> Vec<OrgMember> {
    vec![
        OrgMember::new("user1", "Anand Kumar", "Admin"),
        OrgMember::new("user2", "Olivia Rhye", "Member"),
        OrgMember::new("user3", "Phoenix Baker", "Member"),
    ]
}

fn recepto_lead(id: &str, name: &str, locked: bool, cost: &str) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        location: "Mumbai, India".to_string(),
        description: "Looking for recommendations on product analytics tools for our B2B SaaS platform. Currently evaluating options for a team of 50 ...".to_string(),
        group: None,
        organization: None,
        time_posted: None,
        found_time: Some("2 hour ago".to_string()),
        is_recep_net: true,
        score: "99".to_string(),
        is_locked: locked,
        unlock_cost: Some(cost.to_string()),
        contacted: false,
        liked_by: Vec::new(),
        disliked_by: Vec::new(),
        assigned_to: None,
    }
}

fn org_lead(id: &str, name: &str, time_posted: &str, locked: bool, cost: Option<&str>) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        location: "Mumbai, India".to_string(),
        description: "A team from \"company name mentioned\" is seeking a highly motivated Business Development Executive to outreach and secure business opportunities...".to_string(),
        group: Some("Group name".to_string()),
        organization: Some("Org's Network".to_string()),
        time_posted: Some(time_posted.to_string()),
        found_time: None,
        is_recep_net: false,
        score: "74".to_string(),
        is_locked: locked,
        unlock_cost: cost.map(str::to_string),
        contacted: false,
        liked_by: Vec::new(),
        disliked_by: Vec::new(),
        assigned_to: None,
    }
}

/// Fixed collection used whenever no `leads` document exists yet.
pub fn default_leads() -> Vec<Lead> {
    vec![
        recepto_lead("lead1", "Jen", true, "3"),
        org_lead("lead2", "Jennifer Markus", "3 hours ago", false, None),
        recepto_lead("lead3", "Jen", false, "0"),
        org_lead("lead4", "Jennifer Markus", "Today", true, Some("3")),
        org_lead("lead5", "Jennifer Markus", "3 hours ago", false, None),
        org_lead("lead6", "Elizabeth", "3 hours ago", false, None),
        org_lead("lead7", "Natasha", "3 hours ago", false, None),
    ]
}
