mod common;

use common::{function, harness, Call, FakeGateway, FakeStore};
use dashboard::session::DeployTab;
use dashboard::store::{StoreCatalog, STORE_UNREACHABLE};
use std::collections::HashMap;
use utility::store::StoreFunction;
use utility::Error;

fn store() -> Vec<StoreFunction> {
    let mut images = HashMap::new();
    images.insert("x86_64".to_string(), "functions/figlet:0.13.0".to_string());
    images.insert("armhf".to_string(), "functions/figlet:0.13.0-armhf".to_string());
    let mut arm_only = HashMap::new();
    arm_only.insert("armhf".to_string(), "alexellis/pi-temp:latest".to_string());
    vec![
        StoreFunction {
            name: "figlet".to_string(),
            title: "Figlet".to_string(),
            description: "Generate ASCII logos".to_string(),
            fprocess: "figlet".to_string(),
            images,
            ..Default::default()
        },
        StoreFunction {
            name: "pi-temp".to_string(),
            title: "Pi temperature".to_string(),
            images: arm_only,
            ..Default::default()
        },
    ]
}

#[tokio::test]
async fn test_create_from_store() {
    let mut gateway = FakeGateway::default();
    gateway.namespaces = vec!["openfaas-fn".to_string()];
    let h = harness(gateway);

    let catalog = StoreCatalog::load(&FakeStore(Some(store())), "store.json", "x86_64").await;
    assert_eq!(catalog.entries().len(), 1);

    let mut dialog = h.dashboard.open_create_dialog().await;
    assert_eq!(dialog.tab(), DeployTab::Store);
    assert_eq!(
        h.dashboard.session().namespace().all(),
        &["openfaas-fn".to_string()]
    );
    dialog.from_store(&catalog.search("ascii")[0]);

    h.dashboard.create_function(&mut dialog).await.unwrap();

    assert!(!dialog.is_open());
    assert_eq!(dialog.service, "");
    assert_eq!(h.notifier.messages(), vec!["Function created"]);
    let created = h
        .dashboard
        .gateway()
        .calls()
        .into_iter()
        .find_map(|c| match c {
            Call::Create(d) => Some(d),
            _ => None,
        })
        .unwrap();
    assert_eq!(created.service, "figlet");
    assert_eq!(created.image, "functions/figlet:0.13.0");
    assert_eq!(created.env_process, "figlet");
}

#[tokio::test]
async fn test_validation_error_switches_to_manual() {
    let gateway = FakeGateway::default();
    *gateway.create_error.borrow_mut() = Some(Error::Status {
        code: 400,
        body: "image: Required value".to_string(),
    });
    let h = harness(gateway);

    let mut dialog = h.dashboard.open_create_dialog().await;
    dialog.service = "no-image".to_string();

    assert!(h.dashboard.create_function(&mut dialog).await.is_err());

    assert!(dialog.is_open());
    assert_eq!(dialog.tab(), DeployTab::Manual);
    assert_eq!(dialog.validation_error(), Some("image: Required value"));
    assert_eq!(dialog.service, "no-image");
    assert_eq!(h.notifier.messages(), vec!["Error"]);
    // the next dialog opens where this one left off
    assert_eq!(h.dashboard.open_create_dialog().await.tab(), DeployTab::Manual);
}

#[tokio::test]
async fn test_unreachable_store() {
    let catalog = StoreCatalog::load(&FakeStore(None), "store.json", "x86_64").await;
    assert!(catalog.entries().is_empty());
    assert_eq!(catalog.message(), Some(STORE_UNREACHABLE));
}

#[tokio::test]
async fn test_clone_selected_function() {
    let mut source = function("figlet", "");
    source.env_process = "figlet".to_string();
    source.network = "func_functions".to_string();
    source.labels.insert("team".to_string(), "web".to_string());
    source.env_vars.insert("write_debug".to_string(), "true".to_string());
    source.secrets = vec!["api-key".to_string()];
    let h = harness(FakeGateway::with_functions(vec![source]));
    h.dashboard.refresh_functions().await.unwrap();

    assert!(h.dashboard.open_clone_dialog().await.is_none());
    h.dashboard.select_function("figlet").unwrap();
    let mut dialog = h.dashboard.open_clone_dialog().await.unwrap();

    assert_eq!(dialog.tab(), DeployTab::Manual);
    assert_eq!(dialog.service, "figlet");
    assert_eq!(dialog.image, "functions/figlet:latest");
    dialog.service = "figlet-copy".to_string();

    h.dashboard.create_function(&mut dialog).await.unwrap();

    let created = h
        .dashboard
        .gateway()
        .calls()
        .into_iter()
        .find_map(|c| match c {
            Call::Create(d) => Some(d),
            _ => None,
        })
        .unwrap();
    assert_eq!(created.service, "figlet-copy");
    assert_eq!(created.image, "functions/figlet:latest");
    assert_eq!(created.env_process, "figlet");
    assert_eq!(created.network, "func_functions");
    assert_eq!(created.labels.get("team").map(String::as_str), Some("web"));
    assert_eq!(
        created.env_vars.get("write_debug").map(String::as_str),
        Some("true")
    );
    assert_eq!(created.secrets, vec!["api-key"]);
    assert!(created.annotations.is_empty());
}
