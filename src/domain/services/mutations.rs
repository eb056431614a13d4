//! Pure lead transformations. Every function takes the collection by
//! reference and returns a fresh one (copy-on-write), so observers holding
//! the prior collection keep a consistent snapshot. Failure never partially
//! applies: the caller either gets the full transformation or an error with
//! the source collection untouched.

use crate::domain::models::lead::{AssignedMember, Lead};
use crate::domain::models::member::OrgMember;
use crate::error::AppError;

fn position_of(leads: &[Lead], lead_id: &str) -> Result<usize, AppError> {
    leads
        .iter()
        .position(|l| l.id == lead_id)
        .ok_or_else(|| AppError::NotFound(format!("lead {lead_id}")))
}

/// Spends credits to flip a ReceptoNet lead open. Returns the new collection
/// and the cost the caller must deduct from the actor's balance; the core
/// never owns that balance. Unlocking an already-unlocked lead is a safe
/// no-op with cost 0, so repeated calls cannot double-charge.
pub fn unlock(
    leads: &[Lead],
    lead_id: &str,
    available_credits: u32,
) -> Result<(Vec<Lead>, u32), AppError> {
    let idx = position_of(leads, lead_id)?;
    if !leads[idx].is_locked {
        return Ok((leads.to_vec(), 0));
    }

    let cost = leads[idx].unlock_cost_value();
    if available_credits < cost {
        return Err(AppError::InsufficientCredits {
            required: cost,
            available: available_credits,
        });
    }

    let mut next = leads.to_vec();
    next[idx].is_locked = false;
    Ok((next, cost))
}

/// Toggles `user_id` in the lead's likedBy set. The same update removes the
/// user from dislikedBy, so a user is never in both sets at once.
pub fn like(leads: &[Lead], lead_id: &str, user_id: &str) -> Result<Vec<Lead>, AppError> {
    let idx = position_of(leads, lead_id)?;
    let mut next = leads.to_vec();
    let lead = &mut next[idx];

    if lead.is_liked_by(user_id) {
        lead.liked_by.retain(|id| id != user_id);
    } else {
        lead.liked_by.push(user_id.to_string());
    }
    lead.disliked_by.retain(|id| id != user_id);
    Ok(next)
}

/// Mirror of [`like`] for the dislikedBy set.
pub fn dislike(leads: &[Lead], lead_id: &str, user_id: &str) -> Result<Vec<Lead>, AppError> {
    let idx = position_of(leads, lead_id)?;
    let mut next = leads.to_vec();
    let lead = &mut next[idx];

    if lead.is_disliked_by(user_id) {
        lead.disliked_by.retain(|id| id != user_id);
    } else {
        lead.disliked_by.push(user_id.to_string());
    }
    lead.liked_by.retain(|id| id != user_id);
    Ok(next)
}

/// Attaches a roster member as the responsible party. What gets stored is a
/// snapshot copy of the roster entry, so later roster edits leave historic
/// assignments untouched. One-way: there is no unassign.
pub fn assign(
    leads: &[Lead],
    lead_id: &str,
    member_id: &str,
    roster: &[OrgMember],
) -> Result<Vec<Lead>, AppError> {
    let idx = position_of(leads, lead_id)?;
    let member = roster
        .iter()
        .find(|m| m.id == member_id)
        .ok_or_else(|| AppError::UnknownUser(member_id.to_string()))?;

    let mut next = leads.to_vec();
    next[idx].assigned_to = Some(AssignedMember::from(member));
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::defaults::{default_leads, default_org_members};

    #[test]
    fn unlock_deducts_cost_and_opens_lead() {
        let leads = default_leads();
        let (next, cost) = unlock(&leads, "lead1", 10).unwrap();
        assert_eq!(cost, 3);
        assert!(!next.iter().find(|l| l.id == "lead1").unwrap().is_locked);
        // input untouched
        assert!(leads.iter().find(|l| l.id == "lead1").unwrap().is_locked);
    }

    #[test]
    fn unlock_rejects_when_balance_is_short() {
        let leads = default_leads();
        let err = unlock(&leads, "lead1", 2).unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientCredits { required: 3, available: 2 }
        ));
    }

    #[test]
    fn unlock_is_idempotent_once_applied() {
        let leads = default_leads();
        let (next, _) = unlock(&leads, "lead1", 10).unwrap();
        let (again, cost) = unlock(&next, "lead1", 0).unwrap();
        assert_eq!(cost, 0);
        assert_eq!(again, next);
    }

    #[test]
    fn like_then_dislike_swaps_sets() {
        let leads = default_leads();
        let liked = like(&leads, "lead2", "user1").unwrap();
        assert!(liked[1].is_liked_by("user1"));

        let disliked = dislike(&liked, "lead2", "user1").unwrap();
        assert!(!disliked[1].is_liked_by("user1"));
        assert!(disliked[1].is_disliked_by("user1"));
    }

    #[test]
    fn like_toggles_off_on_second_call() {
        let leads = default_leads();
        let once = like(&leads, "lead2", "user1").unwrap();
        let twice = like(&once, "lead2", "user1").unwrap();
        assert!(!twice[1].is_liked_by("user1"));
        assert!(!twice[1].is_disliked_by("user1"));
    }

    #[test]
    fn assign_requires_known_roster_member() {
        let leads = default_leads();
        let roster = default_org_members();
        let err = assign(&leads, "lead2", "ghost", &roster).unwrap_err();
        assert!(matches!(err, AppError::UnknownUser(id) if id == "ghost"));
    }

    #[test]
    fn assign_stores_a_snapshot_not_a_reference() {
        let leads = default_leads();
        let mut roster = default_org_members();
        roster[1].name = "Alice".to_string();

        let assigned = assign(&leads, "lead2", "user2", &roster).unwrap();
        roster[1].name = "Alicia".to_string();

        let snapshot = assigned[1].assigned_to.as_ref().unwrap();
        assert_eq!(snapshot.name, "Alice");
    }

    #[test]
    fn unknown_lead_is_reported_and_nothing_changes() {
        let leads = default_leads();
        assert!(matches!(
            like(&leads, "lead99", "user1"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(leads, default_leads());
    }
}
