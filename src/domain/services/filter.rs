use crate::domain::models::filter::FilterSpec;
use crate::domain::models::lead::Lead;

/// Whether one lead passes the filter. A score that does not parse as an
/// integer cannot fall outside the range, so it passes; this matches the
/// source dashboard's behavior for malformed scores.
pub fn matches(lead: &Lead, spec: &FilterSpec) -> bool {
    if !spec.locations.is_empty() && !spec.locations.contains(lead.country()) {
        return false;
    }

    if let Some(score) = lead.score_value() {
        let (min, max) = spec.score;
        if score < min || score > max {
            return false;
        }
    }

    true
}

/// Visible subset of the collection. Stable: source order is preserved, and
/// the output is fully determined by the inputs.
pub fn apply(leads: &[Lead], spec: &FilterSpec) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| matches(lead, spec))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::defaults::default_leads;

    fn fixture() -> Vec<Lead> {
        let mut leads = default_leads();
        leads.truncate(2);
        leads[1].location = "London, United Kingdom".to_string();
        leads[1].score = "50".to_string();
        leads
    }

    #[test]
    fn match_all_returns_the_collection_unchanged() {
        let leads = default_leads();
        assert_eq!(apply(&leads, &FilterSpec::match_all()), leads);
    }

    #[test]
    fn country_filter_keeps_only_matching_leads() {
        let leads = fixture();
        let spec = FilterSpec::new(["India"], 0, 100).unwrap();
        let visible = apply(&leads, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "lead1");
    }

    #[test]
    fn score_range_is_inclusive() {
        let leads = fixture(); // scores 99 and 50
        let spec = FilterSpec::new::<[&str; 0]>([], 60, 100).unwrap();
        let visible = apply(&leads, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].score, "99");

        let at_bound = FilterSpec::new::<[&str; 0]>([], 50, 99).unwrap();
        assert_eq!(apply(&leads, &at_bound).len(), 2);
    }

    #[test]
    fn location_without_comma_is_its_own_country() {
        let mut leads = fixture();
        leads[0].location = "Singapore".to_string();
        let spec = FilterSpec::new(["Singapore"], 0, 100).unwrap();
        assert_eq!(apply(&leads, &spec).len(), 1);
    }

    #[test]
    fn unparseable_score_passes_the_range_check() {
        let mut leads = fixture();
        leads[0].score = "unknown".to_string();
        let spec = FilterSpec::new::<[&str; 0]>([], 90, 100).unwrap();
        let visible = apply(&leads, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "lead1");
    }

    #[test]
    fn invalid_range_is_rejected_at_construction() {
        assert!(FilterSpec::new(["India"], 60, 40).is_err());
        assert!(FilterSpec::new(["India"], -1, 50).is_err());
        assert!(FilterSpec::new(["India"], 0, 101).is_err());
    }
}
