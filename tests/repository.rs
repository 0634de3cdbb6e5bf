use rotary_club::domain::meeting::AgendaItem;
use rotary_club::domain::types::{AgendaItemId, ClubId, MeetingId};
use rotary_club::models::config::ClientConfig;
use rotary_club::repository::errors::RepositoryError;
use rotary_club::repository::{HttpRepository, MeetingReader, MemberReader, ReportReader};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPORTS: &str = "/api/clubs/7/reunions/42/ordres-du-jour";

fn repo(server: &MockServer) -> HttpRepository {
    HttpRepository::new(&ClientConfig::new(server.uri())).unwrap()
}

fn club() -> ClubId {
    ClubId::new("7").unwrap()
}

fn meeting_id() -> MeetingId {
    MeetingId::new("42").unwrap()
}

fn agenda() -> Vec<AgendaItem> {
    vec![
        AgendaItem::new(1, "Budget"),
        AgendaItem {
            id: Some(AgendaItemId::new("a-2").unwrap()),
            ..AgendaItem::new(2, "Elections")
        },
        AgendaItem::new(3, "Projets"),
    ]
}

async fn respond(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn missing_resource_is_not_found() {
    let server = MockServer::start().await;
    respond(&server, "/api/clubs/7/membres", ResponseTemplate::new(404)).await;

    let result = repo(&server).list_members(&club()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn error_status_keeps_code_and_body() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/api/clubs/7/reunions",
        ResponseTemplate::new(503).set_body_string("maintenance"),
    )
    .await;

    let result = repo(&server).list_meetings(&club()).await;

    match result {
        Err(RepositoryError::Http { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/api/clubs/7/membres/fonctions",
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;

    let result = repo(&server).list_function_assignments(&club()).await;

    assert!(matches!(result, Err(RepositoryError::Decode(_))));
}

#[tokio::test]
async fn meetings_with_null_fields_are_listed() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/api/clubs/7/reunions",
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "date": "2025-03-01", "heure": "19:00", "typeReunionLibelle": null, "lieu": null},
            {"id": "43", "date": null}
        ])),
    )
    .await;

    let meetings = repo(&server).list_meetings(&club()).await.unwrap();

    assert_eq!(meetings.len(), 2);
    assert_eq!(meetings[0].lieu, "");
    assert_eq!(meetings[1].date, "");
}

#[tokio::test]
async fn missing_reports_read_as_empty_content_in_agenda_order() {
    let server = MockServer::start().await;
    respond(
        &server,
        &format!("{REPORTS}/1/rapport"),
        ResponseTemplate::new(200).set_body_json(json!({"contenu": "Approved $5000"})),
    )
    .await;
    respond(
        &server,
        &format!("{REPORTS}/a-2/rapport"),
        ResponseTemplate::new(404),
    )
    .await;
    respond(
        &server,
        &format!("{REPORTS}/3/rapport"),
        ResponseTemplate::new(200).set_body_json(json!({"contenu": "   "})),
    )
    .await;
    respond(
        &server,
        "/api/clubs/7/reunions/42/divers",
        ResponseTemplate::new(404),
    )
    .await;

    let reports = repo(&server)
        .get_all_reports_for_meeting(&club(), &meeting_id(), &agenda())
        .await
        .unwrap();

    let numbers: Vec<u32> = reports.ordres_avec_contenu.iter().map(|o| o.numero).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    let flags: Vec<bool> = reports
        .ordres_avec_contenu
        .iter()
        .map(|o| o.has_content)
        .collect();
    assert_eq!(flags, vec![true, false, false]);
    assert_eq!(
        reports.ordres_avec_contenu[0].contenu.as_deref(),
        Some("Approved $5000")
    );
    assert!(reports.ordres_avec_contenu[1].contenu.is_none());
    assert_eq!(reports.divers_existant, "");
}

#[tokio::test]
async fn other_business_text_is_returned() {
    let server = MockServer::start().await;
    respond(
        &server,
        &format!("{REPORTS}/1/rapport"),
        ResponseTemplate::new(200).set_body_json(json!({"contenu": null})),
    )
    .await;
    respond(
        &server,
        "/api/clubs/7/reunions/42/divers",
        ResponseTemplate::new(200).set_body_json(json!({"contenu": "Sortie du club en mai"})),
    )
    .await;

    let reports = repo(&server)
        .get_all_reports_for_meeting(&club(), &meeting_id(), &[AgendaItem::new(1, "Budget")])
        .await
        .unwrap();

    assert!(!reports.ordres_avec_contenu[0].has_content);
    assert_eq!(reports.divers_existant, "Sortie du club en mai");
}

#[tokio::test]
async fn failing_item_report_fails_the_batch() {
    let server = MockServer::start().await;
    respond(
        &server,
        &format!("{REPORTS}/1/rapport"),
        ResponseTemplate::new(200).set_body_json(json!({"contenu": "Approved $5000"})),
    )
    .await;
    respond(
        &server,
        &format!("{REPORTS}/a-2/rapport"),
        ResponseTemplate::new(500).set_body_string("boom"),
    )
    .await;
    respond(
        &server,
        &format!("{REPORTS}/3/rapport"),
        ResponseTemplate::new(404),
    )
    .await;
    respond(
        &server,
        "/api/clubs/7/reunions/42/divers",
        ResponseTemplate::new(404),
    )
    .await;

    let result = repo(&server)
        .get_all_reports_for_meeting(&club(), &meeting_id(), &agenda())
        .await;

    assert!(matches!(
        result,
        Err(RepositoryError::Http { status: 500, .. })
    ));
}
