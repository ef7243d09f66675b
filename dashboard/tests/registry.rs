mod common;

use common::{function, harness, Call, FakeGateway};
use dashboard::registry::{Reconciliation, SortKey};
use std::rc::Rc;

#[tokio::test]
async fn test_poll_keeps_selected_handle() {
    let h = harness(FakeGateway::with_functions(vec![
        function("f1", ""),
        function("f2", ""),
    ]));
    h.dashboard.refresh_functions().await.unwrap();
    let selected = h.dashboard.select_function("f1").unwrap();

    {
        let mut functions = h.dashboard.gateway().functions.borrow_mut();
        functions[0].replicas = 4;
        functions[0].invocation_count = 17.;
    }
    let outcome = h.dashboard.refresh_functions().await.unwrap();

    assert_eq!(outcome, Reconciliation::Patched { patched: 2 });
    assert!(Rc::ptr_eq(&selected, &h.dashboard.selected().unwrap()));
    assert_eq!(selected.borrow().replicas, 4);
    assert_eq!(selected.borrow().invocation_count, 17.);
}

#[tokio::test]
async fn test_poll_drops_removed_selection() {
    let h = harness(FakeGateway::with_functions(vec![
        function("f1", ""),
        function("f2", ""),
    ]));
    h.dashboard.refresh_functions().await.unwrap();
    h.dashboard.select_function("f1").unwrap();

    h.dashboard
        .gateway()
        .functions
        .borrow_mut()
        .retain(|f| f.name != "f1");
    let outcome = h.dashboard.refresh_functions().await.unwrap();

    assert_eq!(
        outcome,
        Reconciliation::Replaced {
            selection_cleared: true
        }
    );
    assert!(h.dashboard.selected().is_none());
    let names: Vec<String> = h
        .dashboard
        .visible("", SortKey::Name)
        .iter()
        .map(|r| r.borrow().name.clone())
        .collect();
    assert_eq!(names, vec!["f2"]);
}

#[tokio::test]
async fn test_status_poll_sets_readiness() {
    let mut ready = function("f1", "");
    ready.available_replicas = 1;
    let h = harness(FakeGateway::with_functions(vec![ready]));
    h.dashboard.refresh_functions().await.unwrap();

    // nothing selected, nothing queried
    h.dashboard.refresh_selected().await;
    assert!(!h
        .dashboard
        .gateway()
        .calls()
        .iter()
        .any(|c| matches!(c, Call::Get(..))));

    let selected = h.dashboard.select_function("f1").unwrap();
    assert!(!selected.borrow().ready);
    h.dashboard.refresh_selected().await;
    assert!(selected.borrow().ready);
    assert_eq!(selected.borrow().available_replicas, 1);

    h.dashboard.gateway().functions.borrow_mut()[0].available_replicas = 0;
    h.dashboard.refresh_selected().await;
    assert!(!selected.borrow().ready);
}

#[tokio::test]
async fn test_status_poll_failure_is_ignored() {
    let mut ready = function("f1", "");
    ready.available_replicas = 2;
    let h = harness(FakeGateway::with_functions(vec![ready]));
    h.dashboard.refresh_functions().await.unwrap();
    let selected = h.dashboard.select_function("f1").unwrap();
    h.dashboard.refresh_selected().await;

    h.dashboard.gateway().fail_status.set(true);
    h.dashboard.refresh_selected().await;

    assert!(selected.borrow().ready);
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_set_namespace_refetches_scoped_set() {
    let mut gateway = FakeGateway::with_functions(vec![
        function("f1", ""),
        function("api", "dev"),
        function("worker", "dev"),
    ]);
    gateway.namespaces = vec!["dev".to_string(), "prod".to_string()];
    let h = harness(gateway);

    h.dashboard.load_namespaces().await.unwrap();
    assert_eq!(h.dashboard.session().namespace().all(), &["dev", "prod"]);

    h.dashboard.refresh_functions().await.unwrap();
    h.dashboard.select_function("f1").unwrap();

    let outcome = h.dashboard.set_namespace("dev").await.unwrap();

    assert_eq!(
        outcome,
        Reconciliation::Replaced {
            selection_cleared: false
        }
    );
    assert!(h.dashboard.selected().is_none());
    assert_eq!(h.dashboard.session().selected_namespace(), "dev");
    assert_eq!(h.dashboard.registry().functions().len(), 2);
    assert_eq!(
        h.dashboard.gateway().calls().last(),
        Some(&Call::List("dev".to_string()))
    );
}

#[tokio::test]
async fn test_overlapping_refresh_last_completion_wins() {
    let gateway = FakeGateway::with_functions(vec![function("f1", "")]);
    gateway.list_delays.borrow_mut().extend(vec![3, 0]);
    let h = harness(gateway);

    let (slow, fast) = tokio::join!(h.dashboard.refresh_functions(), async {
        h.dashboard
            .gateway()
            .functions
            .borrow_mut()
            .push(function("f2", ""));
        h.dashboard.refresh_functions().await
    });

    assert_eq!(
        fast.unwrap(),
        Reconciliation::Replaced {
            selection_cleared: false
        }
    );
    assert_eq!(
        slow.unwrap(),
        Reconciliation::Replaced {
            selection_cleared: false
        }
    );
    let names: Vec<String> = h
        .dashboard
        .visible("", SortKey::Name)
        .iter()
        .map(|r| r.borrow().name.clone())
        .collect();
    assert_eq!(names, vec!["f1"]);
}
