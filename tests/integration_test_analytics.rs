mod common;

use common::TestApp;
use recepto_leads::domain::services::analytics_service::aggregate;
use recepto_leads::domain::services::defaults::default_org_members;

#[test]
fn snapshot_tracks_mutations_and_is_cached() {
    let app = TestApp::new();

    let snapshot = app.state.analytics_service.refresh().unwrap();
    assert_eq!(snapshot.recepto_net_leads.total, 2);
    assert_eq!(snapshot.recepto_net_leads.yet_to_unlock, 1);
    assert_eq!(snapshot.org_network_leads.total, 5);
    assert_eq!(snapshot.org_network_leads.yet_to_contact, 5);

    app.state.lead_service.unlock("lead1", 10).unwrap();
    app.state.lead_service.like("lead2", "user1").unwrap();
    app.state
        .lead_service
        .assign("lead2", "user2", &default_org_members())
        .unwrap();

    let snapshot = app.state.analytics_service.refresh().unwrap();
    assert_eq!(snapshot.recepto_net_leads.unlocked, 2);
    assert_eq!(snapshot.recepto_net_leads.yet_to_unlock, 0);
    assert_eq!(snapshot.org_network_leads.liked, 1);
    assert_eq!(snapshot.org_network_leads.assigned, 1);

    // Cached copy serves reads until the next refresh.
    let reloaded = app.reload();
    assert_eq!(reloaded.analytics_service.snapshot().unwrap(), snapshot);
}

#[test]
fn totals_equal_the_sum_of_their_exclusive_sub_counts() {
    let app = TestApp::new();
    let svc = &app.state.lead_service;

    // Scramble the collection with an arbitrary action sequence.
    svc.unlock("lead1", 10).unwrap();
    for (lead, user) in [("lead2", "user1"), ("lead5", "user2"), ("lead6", "user3")] {
        svc.like(lead, user).unwrap();
    }
    svc.dislike("lead7", "user1").unwrap();

    let snapshot = aggregate(&svc.leads().unwrap());
    let r = &snapshot.recepto_net_leads;
    assert_eq!(r.unlocked + r.yet_to_unlock, r.total);
    let o = &snapshot.org_network_leads;
    assert_eq!(o.contacted + o.yet_to_contact, o.total);
}

#[test]
fn empty_collection_produces_zero_ratios() {
    let app = TestApp::new();
    app.state.lead_repo.save(&[]).unwrap();

    let snapshot = app.state.analytics_service.refresh().unwrap();
    assert_eq!(snapshot.recepto_net_leads.total, 0);
    assert_eq!(snapshot.recepto_net_leads.unlocked_ratio(), 0.0);
    assert_eq!(snapshot.org_network_leads.contacted_ratio(), 0.0);
}

#[test]
fn trend_series_is_generated_once_and_replayed() {
    let app = TestApp::new();

    let first = app.state.analytics_service.trend_series().unwrap();
    assert_eq!(first.len(), 12);
    assert_eq!(first[0].name, "Jan");

    // Same process and a fresh process both replay the persisted values.
    assert_eq!(app.state.analytics_service.trend_series().unwrap(), first);
    let reloaded = app.reload();
    assert_eq!(reloaded.analytics_service.trend_series().unwrap(), first);
}

#[test]
fn corrupt_caches_recompute_instead_of_failing() {
    let app = TestApp::new();
    app.state.analytics_service.refresh().unwrap();
    app.corrupt_document("analytics_stats", "oops");
    app.corrupt_document("lead_generation_data", "[1, 2,");

    let snapshot = app.state.analytics_service.snapshot().unwrap();
    assert_eq!(snapshot.recepto_net_leads.total, 2);
    assert_eq!(app.state.analytics_service.trend_series().unwrap().len(), 12);
}
