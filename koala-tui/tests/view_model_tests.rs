mod common;

use common::{api_for, count_method, envelope, requests};
use koala_core::{CreateGlobalServiceRequest, CreateWarehouseRequest, DomainRequest};
use koala_tui::messages;
use koala_tui::notifications::{NotificationLevel, Notifications};
use koala_tui::state::{
    AgentsPage, AiDocumentsPage, Confirmation, DocumentPage, DomainsPage, GlobalDomainsPage,
    RepositoryPage, WarehousesPage,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, verb: &str, route: &str, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_domain_list(server: &MockServer) {
    mount_json(
        server,
        "GET",
        "/api/v1/warehouses/w1/domains",
        envelope(json!([
            {"id": "d1", "name": "Order", "code": "order"},
            {"id": "d2", "name": "User", "code": "user"},
            {"id": "d3", "name": "Pay", "code": "pay"}
        ])),
    )
    .await;
}

fn service(id: &str) -> Value {
    json!({"id": id, "serviceId": format!("{id}-svc"), "serviceName": id.to_uppercase()})
}

#[tokio::test]
async fn absent_data_loads_as_empty_list() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/api/v1/agents", json!({"code": 200, "message": "ok"})).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = AgentsPage::new();
    page.load(&api, &mut notes).await;

    assert!(page.agents.is_empty());
    assert!(page.selected.is_none());
    assert!(!page.loading);
    assert!(notes.is_empty());
}

#[tokio::test]
async fn domains_fan_out_one_detail_call_per_domain() {
    let server = MockServer::start().await;
    mount_domain_list(&server).await;
    for id in ["d1", "d2", "d3"] {
        let services = if id == "d2" { json!([service("s1"), service("s2")]) } else { json!([]) };
        mount_json(
            &server,
            "GET",
            &format!("/api/v1/warehouses/w1/domains/{id}"),
            envelope(json!({"id": id, "services": services})),
        )
        .await;
    }

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = DomainsPage::new("w1".to_string());
    page.load(&api, &mut notes).await;

    assert_eq!(count_method(&server, "GET").await, 4);
    assert_eq!(page.domains.len(), 3);
    assert_eq!(page.domains[1].services.len(), 2);
    assert_eq!(page.domains[1].services[1].service_name, "S2");
    assert!(page.domains[0].services.is_empty());
    assert_eq!(page.rows().len(), 5);
    assert!(notes.is_empty());
}

#[tokio::test]
async fn one_failed_detail_fails_the_whole_load() {
    let server = MockServer::start().await;
    mount_domain_list(&server).await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/domains/d1", envelope(json!({"id": "d1"}))).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/warehouses/w1/domains/d2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/domains/d3", envelope(json!({"id": "d3"}))).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = DomainsPage::new("w1".to_string());
    page.load(&api, &mut notes).await;

    assert!(page.domains.is_empty());
    assert!(!page.loading);
    assert_eq!(notes.count(NotificationLevel::Error), 1);
    assert_eq!(
        notes.latest().map(|n| n.message.as_str()),
        Some(messages::DOMAIN_LIST_LOAD_FAILED)
    );
}

#[tokio::test]
async fn empty_domain_list_skips_fan_out() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/domains", envelope(json!([]))).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = DomainsPage::new("w1".to_string());
    page.load(&api, &mut notes).await;

    assert_eq!(requests(&server).await.len(), 1);
    assert!(page.domains.is_empty());
}

#[tokio::test]
async fn dismissed_delete_touches_nothing() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = WarehousesPage::new(10);

    page.delete(&api, &mut notes, "w1", Confirmation::Dismissed).await;

    assert!(requests(&server).await.is_empty());
    assert!(notes.is_empty());
}

#[tokio::test]
async fn accepted_delete_then_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/warehouses/w1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(Value::Null)))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        "/api/v1/warehouses",
        envelope(json!({"items": [{"id": "w2", "name": "other"}], "total": 1})),
    )
    .await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = WarehousesPage::new(10);
    page.delete(&api, &mut notes, "w1", Confirmation::Accepted).await;

    assert_eq!(count_method(&server, "DELETE").await, 1);
    assert_eq!(count_method(&server, "GET").await, 1);
    assert_eq!(page.warehouses.len(), 1);
    assert_eq!(page.selected.as_deref(), Some("w2"));
    assert_eq!(notes.latest().map(|n| n.level), Some(NotificationLevel::Success));
}

#[tokio::test]
async fn failed_delete_reports_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"code": 404, "message": "missing"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = WarehousesPage::new(10);
    page.delete(&api, &mut notes, "w1", Confirmation::Accepted).await;

    assert_eq!(count_method(&server, "GET").await, 0);
    assert_eq!(notes.latest().map(|n| n.message.as_str()), Some(messages::DELETE_FAILED));
}

#[tokio::test]
async fn created_domain_appears_after_reload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/warehouses/w1/domains"))
        .and(body_json(json!({"name": "A", "code": "a", "description": "d"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"id": "d9"}))))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        "/api/v1/warehouses/w1/domains",
        envelope(json!([{"id": "d9", "name": "A", "code": "a", "description": "d"}])),
    )
    .await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/domains/d9", envelope(json!({"id": "d9"}))).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = DomainsPage::new("w1".to_string());
    page.open_create_domain();
    let request = DomainRequest {
        name: "A".to_string(),
        code: "a".to_string(),
        description: "d".to_string(),
    };
    page.create_domain(&api, &mut notes, request).await;

    assert!(page.dialog.is_none());
    assert_eq!(page.domains.len(), 1);
    assert_eq!(page.domains[0].code, "a");
    assert_eq!(notes.latest().map(|n| n.message.as_str()), Some(messages::CREATED));
}

#[tokio::test]
async fn service_dialog_normalizes_globs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/warehouses/w1/domains/d1/services"))
        .and(body_json(json!({
            "serviceId": "order-api",
            "serviceName": "Order API",
            "description": "",
            "sourceGlobs": ["src/order/**", "docs/*.md"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/domains", envelope(json!([]))).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = DomainsPage::new("w1".to_string());
    page.domains = serde_json::from_value(json!([{"id": "d1", "name": "Order"}])).unwrap();
    page.open_add_service();
    {
        let form = page.form_mut().unwrap();
        form.set("serviceId", "order-api");
        form.set("serviceName", "Order API");
        form.set("sourceGlobs", "  src/order/**\r\n\n\ndocs/*.md  \n");
    }
    page.submit_dialog(&api, &mut notes).await;

    assert!(page.dialog.is_none());
    assert_eq!(notes.count(NotificationLevel::Success), 1);
}

#[tokio::test]
async fn validation_failures_never_reach_the_network() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    let mut notes = Notifications::new();

    let mut warehouses = WarehousesPage::new(10);
    warehouses
        .create(
            &api,
            &mut notes,
            CreateWarehouseRequest {
                address: "   ".to_string(),
                branch: String::new(),
            },
        )
        .await;

    let mut domains = DomainsPage::new("w1".to_string());
    domains
        .create_domain(&api, &mut notes, DomainRequest::default())
        .await;

    let mut global = GlobalDomainsPage::new();
    global
        .create_domain(
            &api,
            &mut notes,
            DomainRequest {
                name: "Order".to_string(),
                ..DomainRequest::default()
            },
        )
        .await;
    global
        .create_service(
            &api,
            &mut notes,
            "d1",
            CreateGlobalServiceRequest {
                service_id: "svc".to_string(),
                service_name: "Svc".to_string(),
                ..CreateGlobalServiceRequest::default()
            },
        )
        .await;

    assert!(requests(&server).await.is_empty());
    let warnings: Vec<&str> = notes.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        warnings,
        vec![
            messages::ADDRESS_REQUIRED,
            messages::DOMAIN_NAME_REQUIRED,
            messages::NAME_AND_CODE_REQUIRED,
            messages::REQUIRED_FIELDS,
        ]
    );
    assert_eq!(notes.count(NotificationLevel::Warning), 4);
}

#[tokio::test]
async fn blank_branch_defaults_to_master() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/warehouses"))
        .and(body_json(json!({"address": "https://github.com/a/b", "branch": "master"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "GET", "/api/v1/warehouses", envelope(json!({"items": [], "total": 0}))).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = WarehousesPage::new(10);
    page.create(
        &api,
        &mut notes,
        CreateWarehouseRequest {
            address: "https://github.com/a/b".to_string(),
            branch: " ".to_string(),
        },
    )
    .await;

    assert_eq!(notes.latest().map(|n| n.message.as_str()), Some(messages::ADDED));
}

#[tokio::test]
async fn global_domains_resolve_warehouse_names() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/api/v1/domains", envelope(json!([{"id": "g1", "name": "Billing"}]))).await;
    mount_json(
        &server,
        "GET",
        "/api/v1/domains/warehouses",
        envelope(json!([{"id": "w1", "name": "koala"}])),
    )
    .await;
    mount_json(
        &server,
        "GET",
        "/api/v1/domains/g1",
        envelope(json!({
            "id": "g1",
            "services": [
                {"id": "s1", "serviceId": "bill", "serviceName": "Bill", "warehouseId": "w1"},
                {"id": "s2", "serviceId": "ghost", "serviceName": "Ghost", "warehouseId": "w404"}
            ]
        })),
    )
    .await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = GlobalDomainsPage::new();
    page.load(&api, &mut notes).await;

    assert_eq!(page.domains[0].services.len(), 2);
    assert_eq!(page.warehouse_name("w1"), "koala");
    assert_eq!(page.warehouse_name("w404"), "w404");
    assert!(notes.is_empty());
}

#[tokio::test]
async fn global_service_doc_uses_record_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/domains/g1/services/s1/generate-doc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "GET", "/api/v1/domains", envelope(json!([]))).await;
    mount_json(&server, "GET", "/api/v1/domains/warehouses", envelope(json!([]))).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = GlobalDomainsPage::new();
    page.domains = serde_json::from_value(json!([{
        "id": "g1",
        "services": [{"id": "s1", "serviceId": "bill", "serviceName": "Bill"}]
    }]))
    .unwrap();
    page.select_next();
    page.generate_selected(&api, &mut notes).await;

    assert!(page.generating.is_none());
    assert_eq!(
        notes.latest().map(|n| n.message.as_str()),
        Some(messages::SERVICE_DOC_GENERATED)
    );
}

#[tokio::test]
async fn repository_fails_jointly() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1", envelope(json!({"id": "w1", "name": "koala"}))).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/warehouses/w1/catalog"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = RepositoryPage::new("w1".to_string());
    page.load(&api, &mut notes).await;

    assert!(page.warehouse.is_none());
    assert!(page.catalog.is_empty());
    assert_eq!(notes.latest().map(|n| n.message.as_str()), Some(messages::LOAD_FAILED));
}

#[tokio::test]
async fn document_without_path_makes_no_request() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = DocumentPage::new("w1".to_string(), String::new());
    page.load(&api, &mut notes).await;

    assert!(requests(&server).await.is_empty());
    assert!(page.content.is_empty());
    assert!(notes.is_empty());
}

#[tokio::test]
async fn null_and_absent_data_render_empty_everywhere() {
    let server = MockServer::start().await;
    let null_data = json!({"code": 200, "message": "ok", "data": null});
    let no_data = json!({"code": 200, "message": "ok"});
    mount_json(&server, "GET", "/api/v1/warehouses", null_data.clone()).await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/ai-documents", no_data.clone()).await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/domains", null_data.clone()).await;
    mount_json(&server, "GET", "/api/v1/domains", no_data.clone()).await;
    mount_json(&server, "GET", "/api/v1/domains/warehouses", null_data.clone()).await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1", no_data.clone()).await;
    mount_json(&server, "GET", "/api/v1/warehouses/w1/catalog", null_data).await;

    let api = api_for(&server);
    let mut notes = Notifications::new();

    let mut warehouses = WarehousesPage::new(10);
    warehouses.load(&api, &mut notes).await;
    assert!(warehouses.warehouses.is_empty());
    assert_eq!(warehouses.total, 0);
    assert_eq!(warehouses.total_pages(), 1);

    let mut ai_documents = AiDocumentsPage::new("w1".to_string());
    ai_documents.load(&api, &mut notes).await;
    assert!(ai_documents.documents.is_empty());

    let mut domains = DomainsPage::new("w1".to_string());
    domains.load(&api, &mut notes).await;
    assert!(domains.domains.is_empty());
    assert!(domains.rows().is_empty());

    let mut global = GlobalDomainsPage::new();
    global.load(&api, &mut notes).await;
    assert!(global.domains.is_empty());
    assert!(global.warehouses.is_empty());

    let mut repository = RepositoryPage::new("w1".to_string());
    repository.load(&api, &mut notes).await;
    assert!(repository.warehouse.is_none());
    assert!(repository.catalog.is_empty());
    assert!(repository.rows().is_empty());

    assert!(notes.is_empty());
}

#[tokio::test]
async fn null_fields_inside_rows_still_load() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "GET",
        "/api/v1/warehouses",
        envelope(json!({
            "items": [{"id": "w1", "name": null, "address": null, "status": null}],
            "total": 1, "page": 1, "pageSize": 10, "totalPages": null
        })),
    )
    .await;
    mount_json(
        &server,
        "GET",
        "/api/v1/warehouses/w1/domains",
        envelope(json!([{"id": "d1", "name": "Order", "code": null}])),
    )
    .await;
    mount_json(
        &server,
        "GET",
        "/api/v1/warehouses/w1/domains/d1",
        envelope(json!({"id": "d1", "code": null, "services": [
            {"id": "s1", "serviceId": "pay", "serviceName": null, "sourceGlobs": null}
        ]})),
    )
    .await;

    let api = api_for(&server);
    let mut notes = Notifications::new();

    let mut warehouses = WarehousesPage::new(10);
    warehouses.load(&api, &mut notes).await;
    assert_eq!(warehouses.warehouses.len(), 1);
    assert_eq!(warehouses.warehouses[0].name, "");

    let mut domains = DomainsPage::new("w1".to_string());
    domains.load(&api, &mut notes).await;
    assert_eq!(domains.domains.len(), 1);
    assert_eq!(domains.domains[0].code, "");
    assert!(domains.domains[0].services[0].source_globs.is_empty());

    assert!(notes.is_empty());
}

#[tokio::test]
async fn failed_page_turn_keeps_the_current_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/warehouses"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "items": [{"id": "w1", "name": "koala"}],
            "total": 25, "page": 1, "pageSize": 10, "totalPages": 3
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/warehouses"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut notes = Notifications::new();
    let mut page = WarehousesPage::new(10);
    page.load(&api, &mut notes).await;
    assert_eq!(page.total_pages(), 3);

    assert!(!page.next_page(&api, &mut notes).await);
    assert_eq!(page.query.page, 1);
    assert_eq!(page.warehouses[0].id, "w1");
    assert_eq!(notes.latest().map(|n| n.message.as_str()), Some(messages::LOAD_FAILED));

    // a failed search keeps the old keyword too
    Mock::given(method("GET"))
        .and(path("/api/v1/warehouses"))
        .and(query_param("keyword", "zzz"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    assert!(!page.search(&api, &mut notes, "zzz".to_string()).await);
    assert_eq!(page.query.keyword, "");
    assert_eq!(page.query.page, 1);
}
