#![allow(clippy::unwrap_used)]
// Integration tests for `Client` using wiremock.
//
// Every environment is routed to one mock server under a distinct prefix
// (`/retail/v3/`, `/pl/v3/`, `/us/v3/`) so discovery order is observable.

use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use getresponse_api::multipart;
use getresponse_api::{
    AccountType, ApiResponse, Blob, Client, ClientConfig, DateRange, Endpoints, Error, Query,
    QueryParams, Region, Resolution, SortOrder, WorkflowStatus,
};

const KEY: &str = "test-api-key";
const HTML_PAGE: &str = "<!DOCTYPE html><html><body>Page not found</body></html>";

// ── Helpers ─────────────────────────────────────────────────────────

fn endpoints(server: &MockServer) -> Endpoints {
    let base = |prefix: &str| Url::parse(&format!("{}/{prefix}/v3", server.uri())).unwrap();
    Endpoints::new(base("retail"), base("pl"), base("us"))
}

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client =
        Client::new(ClientConfig::retail(KEY).with_endpoints(endpoints(&server))).unwrap();
    (server, client)
}

async fn setup_enterprise(region: Option<Region>) -> (MockServer, Client) {
    let server = MockServer::start().await;
    let mut config = ClientConfig::enterprise(KEY, "example.com").with_endpoints(endpoints(&server));
    if let Some(region) = region {
        config = config.with_region(region);
    }
    let client = Client::new(config).unwrap();
    (server, client)
}

async fn last_request(server: &MockServer) -> wiremock::Request {
    server
        .received_requests()
        .await
        .unwrap()
        .pop()
        .expect("at least one request")
}

// ── Authentication headers ──────────────────────────────────────────

#[tokio::test]
async fn test_retail_sends_token_without_domain() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/accounts/"))
        .and(header("x-auth-token", "api-key test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accountId": "A1"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.get_account(&[]).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<Value>().unwrap()["accountId"], "A1");

    let req = last_request(&server).await;
    assert!(req.headers.get("x-domain").is_none());
    assert_eq!(
        req.headers.get("content-type").unwrap().to_str().unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_enterprise_with_region_sends_domain_and_skips_discovery() {
    let (server, client) = setup_enterprise(Some(Region::Pl)).await;

    Mock::given(method("GET"))
        .and(path("/pl/v3/tags/"))
        .and(header("x-auth-token", "api-key test-api-key"))
        .and(header("x-domain", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.get_tags(Query::None).await.unwrap();
    assert!(resp.is_success());

    let discovery_calls = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path().ends_with("/accounts"))
        .count();
    assert_eq!(discovery_calls, 0);
}

// ── Environment discovery ───────────────────────────────────────────

#[tokio::test]
async fn test_discovery_skips_html_host_and_caches_match() {
    let (server, client) = setup_enterprise(None).await;

    Mock::given(method("GET"))
        .and(path("/pl/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HTML_PAGE))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/us/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accountId": "US1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/us/v3/campaigns/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    assert!(client.environment().is_none());

    client.get_campaigns(Query::None).await.unwrap();
    client.get_campaigns(Query::None).await.unwrap();

    assert_eq!(client.region(), Some(&Region::Us));
    assert!(
        client
            .base_url()
            .unwrap()
            .as_str()
            .ends_with("/us/v3/")
    );
}

#[tokio::test]
async fn test_discovery_moves_past_rejected_credentials() {
    let (server, client) = setup_enterprise(Some(Region::Unknown("de".into()))).await;

    Mock::given(method("GET"))
        .and(path("/pl/v3/accounts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"httpStatus": 401})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/us/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let resolution = client.resolve().await.unwrap();
    let env = resolution.environment().unwrap();
    assert_eq!(env.account_type, AccountType::Enterprise);
    assert_eq!(env.region, Some(Region::Us));
}

#[tokio::test]
async fn test_concurrent_first_calls_discover_once() {
    let (server, client) = setup_enterprise(None).await;

    Mock::given(method("GET"))
        .and(path("/pl/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pl/v3/tags/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let (a, b) = tokio::join!(client.get_tags(Query::None), client.get_tags(Query::None));
    assert!(a.unwrap().is_success());
    assert!(b.unwrap().is_success());
}

#[tokio::test]
async fn test_no_matching_environment_is_returned_as_data() {
    let (server, client) = setup_enterprise(None).await;

    Mock::given(method("GET"))
        .and(path("/pl/v3/accounts"))
        .respond_with(ResponseTemplate::new(404).set_body_string(HTML_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/us/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HTML_PAGE))
        .mount(&server)
        .await;

    let resolution = client.resolve().await.unwrap();
    assert!(matches!(resolution, Resolution::Unmatched(_)));

    let resp = client.get_contacts(Query::None).await.unwrap();
    let desc = resp.error_descriptor().unwrap();
    assert!(desc.is_no_matching_environment());
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().unwrap();
    assert_eq!(
        body,
        json!({
            "error": true,
            "code": "0",
            "httpStatus": 404,
            "message": "No matching environment: probably an SMB account or just wrong credentials"
        })
    );

    // No request ever reached a resource path.
    let stray = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path().contains("contacts"))
        .count();
    assert_eq!(stray, 0);
    assert!(client.environment().is_none());
}

#[tokio::test]
async fn test_no_match_is_cached_for_the_client_lifetime() {
    let (server, client) = setup_enterprise(None).await;

    Mock::given(method("GET"))
        .and(path("/pl/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HTML_PAGE))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/us/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HTML_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    for _ in 0..3 {
        let resp = client.get_contacts(Query::None).await.unwrap();
        assert!(resp.error_descriptor().unwrap().is_no_matching_environment());
    }
    let resp = client.upload_file(&Blob::new("a.txt", "text/plain", "x")).await.unwrap();
    assert!(resp.error_descriptor().unwrap().is_no_matching_environment());
    assert!(matches!(client.resolve().await.unwrap(), Resolution::Unmatched(_)));

    // One request per candidate, then nothing else goes out
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_html_page_becomes_incorrect_environment() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HTML_PAGE))
        .mount(&server)
        .await;

    let resp = client.get_contacts(Query::None).await.unwrap();
    assert!(resp.is_environment_error());
    assert!(!resp.is_success());
    assert!(resp.text().contains("Incorrect environment"));
}

// ── Request shaping ─────────────────────────────────────────────────

#[tokio::test]
async fn test_get_normalizes_path_and_appends_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let params = QueryParams::new()
        .date_range(
            getresponse_api::DateField::CreatedOn,
            DateRange::between("2018-01-01", "2018-03-01"),
        )
        .query("origin", "api")
        .sort("createdOn", SortOrder::Desc)
        .per_page(1000)
        .page(1);

    client.get("contacts", params).await.unwrap();
    assert_eq!(
        last_request(&server).await.url.query(),
        Some(
            "query[createdOn][from]=2018-01-01&query[createdOn][to]=2018-03-01\
             &query[origin]=api&sort[createdOn]=desc&perPage=1000&page=1&"
        )
    );

    client.get("contacts/", "?perPage=5").await.unwrap();
    assert_eq!(last_request(&server).await.url.query(), Some("perPage=5"));
}

#[tokio::test]
async fn test_raw_query_hash_is_sent_inside_the_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.get("contacts", "?query[name]=a#b&page=2").await.unwrap();
    let request = last_request(&server).await;
    assert_eq!(request.url.query(), Some("query[name]=a%23b&page=2"));
    assert_eq!(request.url.fragment(), None);
}

#[tokio::test]
async fn test_post_sends_path_verbatim_with_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/retail/v3/contacts"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "jane@example.com", "campaign": {"campaignId": "C1"}})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_contact(&json!({"email": "jane@example.com", "campaign": {"campaignId": "C1"}}))
        .await
        .unwrap();
    assert_eq!(resp.status(), 202);
}

#[tokio::test]
async fn test_post_empty_sends_no_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/retail/v3/from-fields/F1/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.set_from_field_as_default("F1").await.unwrap();
    assert!(last_request(&server).await.body.is_empty());
}

#[tokio::test]
async fn test_delete_carries_query() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/retail/v3/from-fields/F1/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.delete_from_field("F1", Some("F2")).await.unwrap();
    assert_eq!(resp.status(), 204);
    assert_eq!(
        last_request(&server).await.url.query(),
        Some("fromFieldIdToReplaceWith=F2&")
    );
}

#[tokio::test]
async fn test_remote_errors_pass_through() {
    let (server, client) = setup().await;

    let error_body = json!({
        "httpStatus": 400,
        "code": 1000,
        "codeDescription": "General error of validation process",
        "message": "Custom field invalid"
    });
    Mock::given(method("POST"))
        .and(path("/retail/v3/contacts/K1/custom-fields"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body.clone()))
        .mount(&server)
        .await;

    let resp = client
        .update_contact_customs("K1", &json!([{"customFieldId": "X", "value": ["a"]}]))
        .await
        .unwrap();
    assert!(matches!(resp, ApiResponse::Raw(_)));
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json::<Value>().unwrap(), error_body);

    let sent: Value = serde_json::from_slice(&last_request(&server).await.body).unwrap();
    assert_eq!(
        sent,
        json!({"customFieldValues": [{"customFieldId": "X", "value": ["a"]}]})
    );
}

#[tokio::test]
async fn test_pagination_headers_are_exposed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/multimedia/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("TotalCount", "250")
                .insert_header("TotalPages", "3")
                .insert_header("CurrentPage", "2")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let resp = client.get_files(Some(2), Some(100)).await.unwrap();
    assert_eq!(resp.total_count(), Some(250));
    assert_eq!(resp.total_pages(), Some(3));
    assert_eq!(resp.current_page(), Some(2));
    assert_eq!(
        last_request(&server).await.url.query(),
        Some("perPage=100&page=2&")
    );
}

#[tokio::test]
async fn test_unparseable_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/accounts/badge/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let resp = client.get_account_badge().await.unwrap();
    let result = resp.json::<Value>();
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let server = MockServer::builder().start().await;
    let endpoints = endpoints(&server);
    drop(server);

    let client = Client::new(ClientConfig::retail(KEY).with_endpoints(endpoints)).unwrap();
    let err = client.get_tags(Query::None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_connect());
}

// ── Upload ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_sends_multipart_body() {
    let (server, client) = setup_enterprise(Some(Region::Us)).await;

    Mock::given(method("POST"))
        .and(path("/us/v3/multimedia/"))
        .and(header("content-type", "multipart/form-data; boundary=labnol"))
        .and(header("x-domain", "example.com"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"imageId": "I1", "name": "logo.png"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let blob = Blob::new("logo.png", "image/png", &b"\x89PNG\r\n"[..]);
    let resp = client.upload_file(&blob).await.unwrap();
    assert_eq!(resp.status(), 201);
    assert_eq!(last_request(&server).await.body, multipart::encode_body(&blob));
}

// ── Resource bindings ───────────────────────────────────────────────

#[tokio::test]
async fn test_single_resource_reads_send_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/contacts/K1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contactId": "K1"})))
        .mount(&server)
        .await;

    client.get_contact("K1", &["email", "name"]).await.unwrap();
    assert_eq!(
        last_request(&server).await.url.query(),
        Some("fields=email%2Cname&")
    );
}

#[tokio::test]
async fn test_account_blacklist_lookup_uses_query_block() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/retail/v3/accounts/blacklists/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"masks": []})))
        .mount(&server)
        .await;

    client.get_account_blacklist("*@example.com").await.unwrap();
    assert_eq!(
        last_request(&server).await.url.query(),
        Some("query[mask]=*%40example.com&")
    );
}

#[tokio::test]
async fn test_order_creation_appends_flags() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/retail/v3/shops/S1/orders/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"orderId": "O1"})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .create_order("S1", &json!({"totalPrice": 10.5}), Some("skipAutomation"))
        .await
        .unwrap();
    assert_eq!(
        last_request(&server).await.url.query(),
        Some("additionalFlags=skipAutomation")
    );
}

#[tokio::test]
async fn test_workflow_status_update_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/retail/v3/workflow/W1"))
        .and(body_json(json!({"status": "inactive"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_workflow_status("W1", WorkflowStatus::Inactive)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_tag_and_suppression_writes() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/retail/v3/contacts/K1/tags"))
        .and(body_json(json!({"tags": [{"tagId": "T1"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/retail/v3/suppressions"))
        .and(body_json(json!({"name": "bounces", "masks": ["*@spam.test"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_contact_tags("K1", &json!([{"tagId": "T1"}]))
        .await
        .unwrap();
    client
        .create_suppression("bounces", &["*@spam.test"])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_every_resource_family_hits_its_path_template() {
    let (server, client) = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let body = json!({});
    let calls = [
        // accounts
        client.get_account(&[]).await,
        client.get_account_billing(&["plan"]).await,
        client.update_account_badge_status("enabled").await,
        // autoresponders
        client.get_autoresponder("A1", &[]).await,
        client.update_autoresponder("A1", &body).await,
        client.delete_autoresponder("A1").await,
        // campaigns
        client.get_campaign_blacklist("C1", Query::None).await,
        client.get_campaign_statistics_summary(Query::None).await,
        client.update_campaign_blacklist("C1", &["*@spam.test"]).await,
        // contacts
        client.get_contact_activities("K1", Query::None).await,
        client.update_contact_customs("K1", &body).await,
        client.delete_contact("K1", Query::None).await,
        // custom fields
        client.get_custom_field("F1", &[]).await,
        client.update_custom_field("F1", &body).await,
        client.delete_custom_field("F1").await,
        // ecommerce
        client.get_category("S1", "G1", &[]).await,
        client.update_category("S1", "G1", &body).await,
        client.delete_category("S1", "G1").await,
        client.get_address("D1", &[]).await,
        client.delete_address("D1").await,
        client.update_order("S1", "O1", &body, None).await,
        client.delete_order("S1", "O1").await,
        client.get_cart("S1", "T1", &[]).await,
        client.delete_meta_field("S1", "M1").await,
        client.update_product_categories("S1", "P1", &json!([])).await,
        client.get_product_variant("S1", "P1", "V1", &[]).await,
        client.create_product_variant("S1", "P1", &body).await,
        client.delete_product_variant("S1", "P1", "V1").await,
        client.get_tax("S1", "X1", &[]).await,
        client.delete_tax("S1", "X1").await,
        // forms
        client.get_form_variants("W1", &[]).await,
        client.get_web_form("W1", &[]).await,
        client.get_landing_page("L1", &[]).await,
        // from fields
        client.set_from_field_as_default("R1").await,
        client.delete_from_field("R1", Some("R2")).await,
        // imports
        client.get_import("I1", &[]).await,
        // multimedia
        client.get_files(None, None).await,
        // newsletters
        client.get_newsletter_stats("N1", Query::None).await,
        client.send_draft(&body).await,
        client.cancel_newsletter("N1").await,
        client.delete_newsletter("N1").await,
        // pipelines
        client.get_pipeline_stage("E1", "St1", &[]).await,
        // rss newsletters
        client.get_rss_newsletter_statistics("Rs1", Query::None).await,
        client.update_rss_newsletter("Rs1", &body).await,
        client.delete_rss_newsletter("Rs1").await,
        // saved searches
        client.get_saved_search_contacts("Q1").await,
        client.search_contacts(&body).await,
        client.delete_saved_search("Q1").await,
        // subscription confirmations
        client.get_subscription_confirmation_subject("en").await,
        // suppressions
        client.update_suppression("Z1", "bounces", &["*@spam.test"]).await,
        client.delete_suppression("Z1").await,
        // tags
        client.create_tag("vip").await,
        client.delete_tag("Tg1").await,
        // webinars
        client.get_webinar("Wb1", &[]).await,
        // workflows
        client.get_automation_workflow("Wf1").await,
        client.update_workflow_status("Wf1", WorkflowStatus::Active).await,
    ];
    assert!(calls.iter().all(|resp| resp.as_ref().unwrap().is_success()));

    let expected = [
        "GET accounts/",
        "GET accounts/billing/?fields=plan&",
        "POST accounts/badge",
        "GET autoresponders/A1/",
        "POST autoresponders/A1",
        "DELETE autoresponders/A1/",
        "GET campaigns/C1/blacklists/",
        "GET campaigns/statistics/summary/",
        "POST campaigns/C1/blacklists",
        "GET contacts/K1/activities/",
        "POST contacts/K1/custom-fields",
        "DELETE contacts/K1/",
        "GET custom-fields/F1/",
        "POST custom-fields/F1",
        "DELETE custom-fields/F1/",
        "GET shops/S1/categories/G1/",
        "POST shops/S1/categories/G1",
        "DELETE shops/S1/categories/G1/",
        "GET addresses/D1/",
        "DELETE addresses/D1/",
        "POST shops/S1/orders/O1",
        "DELETE shops/S1/orders/O1/",
        "GET shops/S1/carts/T1/",
        "DELETE shops/S1/meta-fields/M1/",
        "POST shops/S1/products/P1",
        "GET shops/S1/products/P1/variants/V1/",
        "POST shops/S1/products/P1/variants",
        "DELETE shops/S1/products/P1/variants/V1/",
        "GET shops/S1/taxes/X1/",
        "DELETE shops/S1/taxes/X1/",
        "GET forms/W1/variants/",
        "GET web-forms/W1/",
        "GET landing-pages/L1/",
        "POST from-fields/R1/default",
        "DELETE from-fields/R1/?fromFieldIdToReplaceWith=R2&",
        "GET imports/I1/",
        "GET multimedia/",
        "GET newsletters/N1/statistics/",
        "POST newsletters/send-draft",
        "POST newsletters/N1",
        "DELETE newsletters/N1/",
        "GET pipelines/E1/stages/St1/",
        "GET rss-newsletters/Rs1/statistics/",
        "POST rss-newsletters/Rs1",
        "DELETE rss-newsletters/Rs1/",
        "GET search-contacts/Q1/contacts/",
        "POST search-contacts/contacts",
        "DELETE search-contacts/Q1/",
        "GET subscription-confirmations/subject/en/",
        "POST suppressions/Z1",
        "DELETE suppressions/Z1/",
        "POST tags",
        "DELETE tags/Tg1/",
        "GET webinars/Wb1/",
        "GET workflow/Wf1/",
        "POST workflow/Wf1",
    ];

    let sent: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| {
            let target = r.url.path().trim_start_matches("/retail/v3/");
            match r.url.query().filter(|q| !q.is_empty()) {
                Some(query) => format!("{} {target}?{query}", r.method),
                None => format!("{} {target}", r.method),
            }
        })
        .collect();
    assert_eq!(sent, expected);
}
