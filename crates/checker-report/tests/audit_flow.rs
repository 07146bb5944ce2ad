//! Full audits against a mock Canvas instance.

use checker_canvas::CanvasClient;
use checker_canvas::mock::{MockCanvas, MockCanvasBuilder};
use checker_config::CheckerConfig;
use checker_core::{CourseAuditRow, SyllabusOutcome, Verdict};
use checker_report::{Auditor, ReportError};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const DESCRIPTION: &str = "Curso orientado a la comprensión de los procesos fisiológicos del \
organismo humano, con énfasis en la integración de sistemas, la regulación homeostática y la \
aplicación clínica de los contenidos en escenarios simulados.";

fn front_page(instructor: &str) -> Value {
    json!({
        "title": "Inicio",
        "body": format!(
            r#"<div style="position: relative; width: 100%; color: white; overflow: hidden;"><h2>Bienvenidos</h2></div>
<p style="text-align: justify;">{DESCRIPTION}</p>
<p style="text-align: left; padding-left: 40px;"><strong>{instructor}</strong><br>Correo: docente@uautonoma.cl</p>
<p><strong>Docente en:</strong></p>
<ul><li>Medicina</li></ul>"#
        ),
    })
}

fn tabs(ids: &[&str]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| json!({"id": id, "label": id, "visibility": "public"}))
            .collect(),
    )
}

/// A course that passes every check, syllabus named `syllabus`.
fn healthy_course(builder: MockCanvasBuilder, id: u64, syllabus: &str) -> MockCanvasBuilder {
    builder
        .json(&format!("courses/{id}/front_page"), front_page("Dra. Paula Núñez"))
        .json(
            &format!("courses/{id}/tabs"),
            tabs(&["home", "modules", "grades", "people"]),
        )
        .json(
            &format!("courses/{id}/modules"),
            json!([{"id": 10, "name": "Presentación"}]),
        )
        .json(
            &format!("courses/{id}/modules/10/items"),
            json!([
                {"id": 1, "type": "Page", "title": "Bienvenida"},
                {"id": 2, "type": "File", "title": "Programa de la asignatura", "content_id": 500}
            ]),
        )
        .json(
            &format!("courses/{id}/files/500"),
            json!({"id": 500, "display_name": syllabus, "url": "https://files.example/500"}),
        )
        .json(
            &format!("courses/{id}/assignments"),
            json!([{"id": 1, "name": "Tarea 2"}, {"id": 2, "name": "Examen"}]),
        )
}

async fn audit(mock: &MockCanvas, sub_account: u64) -> Result<Vec<CourseAuditRow>, ReportError> {
    let config = CheckerConfig {
        canvas: mock.config(),
        ..CheckerConfig::default()
    };
    let canvas = CanvasClient::new(&config.canvas).unwrap();
    Auditor::new(&canvas, &config).audit_sub_account(sub_account).await
}

#[tokio::test]
async fn healthy_front_page_passes_the_four_page_checks() {
    let builder = MockCanvas::builder().json("accounts/5/courses", json!([{"id": 8, "name": "Ética"}]));
    let mock = healthy_course(builder, 8, "Programa Ética.pdf").start();

    let rows = audit(&mock, 5).await.unwrap();

    assert_eq!(&rows[0].verdicts()[..4], &[Verdict::Pass; 4]);
    assert!(rows[0].passed_all());
}

#[tokio::test]
async fn blueprint_and_excluded_courses_are_not_audited() {
    let builder = MockCanvas::builder().json(
        "accounts/746/courses",
        json!([
            {"id": 1, "name": "Fisiología", "sis_course_id": "MED-200-2024", "blueprint": false},
            {"id": 2, "name": "Plantilla", "sis_course_id": "MED-000", "blueprint": true},
            {"id": 3, "name": "Histología", "blueprint": false},
            {"id": 4, "name": "Antiguo", "sis_course_id": "MED-100-2022"}
        ]),
    );
    let builder = healthy_course(builder, 1, "Programa Fisiología.pdf");
    let mock = healthy_course(builder, 3, "Programa Histología.pdf").start();

    let rows = audit(&mock, 746).await.unwrap();

    let ids: Vec<u64> = rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(rows.iter().all(CourseAuditRow::passed_all));
    assert_eq!(rows[0].url, format!("{}/courses/1", mock.base_url()));
    assert_eq!(rows[1].sis_id, None);
    assert!(mock.requests_to("courses/2/front_page").is_empty());
}

#[tokio::test]
async fn failing_tabs_only_fails_navigation() {
    let builder = MockCanvas::builder().json(
        "accounts/5/courses",
        json!([{"id": 8, "name": "Bioquímica", "sis_course_id": "BQ-1"}]),
    );
    let mock = healthy_course(builder, 8, "Programa.docx")
        .raw("courses/8/tabs", 500, "internal error")
        .start();

    let rows = audit(&mock, 5).await.unwrap();

    let row = &rows[0];
    assert_eq!(row.navigation, Verdict::Fail);
    assert_eq!(
        row.verdicts(),
        [
            Verdict::Pass,
            Verdict::Pass,
            Verdict::Pass,
            Verdict::Pass,
            Verdict::Fail,
            Verdict::Pass,
            Verdict::Pass,
        ]
    );
}

#[tokio::test]
async fn syllabus_search_skips_unreadable_modules_and_files() {
    let mock = MockCanvas::builder()
        .json("accounts/5/courses", json!([{"id": 8, "name": "Genética"}]))
        .json("courses/8/front_page", front_page("Pendiente"))
        .json("courses/8/tabs", tabs(&["home", "modules", "grades", "people"]))
        .json(
            "courses/8/modules",
            json!([{"id": 1, "name": "Roto"}, {"id": 2, "name": "Unidad 1"}]),
        )
        .raw("courses/8/modules/1/items", 403, "{}")
        .json(
            "courses/8/modules/2/items",
            json!([
                {"id": 20, "type": "File", "title": "Programa de la asignatura", "content_id": 900},
                {"id": 21, "type": "File", "title": "Programa de la asignatura", "content_id": 901}
            ]),
        )
        .raw("courses/8/files/900", 404, r#"{"errors":[]}"#)
        .json(
            "courses/8/files/901",
            json!({"id": 901, "display_name": "Programa Genética.pdf", "url": "https://files.example/901"}),
        )
        .json("courses/8/assignments", json!([]))
        .start();

    let rows = audit(&mock, 5).await.unwrap();

    let row = &rows[0];
    match &row.syllabus {
        SyllabusOutcome::Linked { file } => {
            assert_eq!(file.display_name, "Programa Genética.pdf");
            assert_eq!(file.url, "https://files.example/901");
        }
        other => panic!("expected a linked syllabus, got {other:?}"),
    }
    assert_eq!(row.instructor, Verdict::Fail);
    assert_eq!(row.assignments.summary(), "❌");
}

#[tokio::test]
async fn placeholder_syllabus_and_assignment_fail() {
    let builder = MockCanvas::builder().json("accounts/5/courses", json!([{"id": 8, "name": "Ética"}]));
    let mock = healthy_course(builder, 8, "Programa.pdf")
        .json(
            "courses/8/assignments",
            json!([{"id": 1, "name": "Tarea 1"}, {"id": 2, "name": "Tarea 2"}]),
        )
        .start();

    let rows = audit(&mock, 5).await.unwrap();

    assert_eq!(rows[0].syllabus, SyllabusOutcome::Placeholder);
    assert_eq!(rows[0].assignments.summary(), "Tarea 1, Tarea 2, ❌");
}

#[tokio::test]
async fn missing_front_page_fails_the_four_page_checks() {
    let builder = MockCanvas::builder().json("accounts/5/courses", json!([{"id": 8, "name": "Ética"}]));
    let mock = healthy_course(builder, 8, "Programa Ética.pdf")
        .raw("courses/8/front_page", 404, r#"{"message":"page not found"}"#)
        .start();

    let rows = audit(&mock, 5).await.unwrap();

    let verdicts = rows[0].verdicts();
    assert_eq!(&verdicts[..4], &[Verdict::Fail; 4]);
    assert_eq!(&verdicts[4..], &[Verdict::Pass; 3]);
}

#[tokio::test]
async fn discovery_failure_aborts_the_audit() {
    let mock = MockCanvas::builder()
        .raw("accounts/5/courses", 401, r#"{"errors":[{"message":"Invalid access token."}]}"#)
        .start();

    let err = audit(&mock, 5).await.unwrap_err();
    match err {
        ReportError::Discovery(source) => assert_eq!(source.status(), Some(401)),
        other => panic!("expected a discovery error, got {other:?}"),
    }
}

#[tokio::test]
async fn rows_are_reported_to_the_callback_in_order() {
    let builder = MockCanvas::builder().json(
        "accounts/5/courses",
        json!([{"id": 30, "name": "C"}, {"id": 10, "name": "A"}, {"id": 20, "name": "B"}]),
    );
    let builder = healthy_course(builder, 30, "P.pdf");
    let builder = healthy_course(builder, 10, "P.pdf");
    let mock = healthy_course(builder, 20, "P.pdf").start();

    let config = CheckerConfig {
        canvas: mock.config(),
        ..CheckerConfig::default()
    };
    let canvas = CanvasClient::new(&config.canvas).unwrap();
    let auditor = Auditor::new(&canvas, &config);

    let courses = auditor.discover(5).await.unwrap();
    let mut seen = Vec::new();
    let rows = auditor.audit_courses(&courses, |row| seen.push(row.id)).await;

    assert_eq!(seen, vec![30, 10, 20]);
    assert_eq!(rows.iter().map(|row| row.id).collect::<Vec<_>>(), seen);
}
