use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::modules::work_logs::use_cases::log_work::command::LogWork;
use crate::shell::state::AppState;
use crate::tests::fixtures::seed::Seeded;
use crate::tests::fixtures::state::make_seeded_state;
use chrono::Utc;
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

const JANUARY: &str = "2024-01-01 - 2024-01-31";

async fn log(state: &AppState, user_id: i64, project_id: i64, subtask_id: i64, hours: f64, date: &str) {
    state
        .log_work
        .handle(LogWork {
            user_id,
            project_id,
            subtask_id,
            hours,
            description: "work".into(),
            date: Some(date.into()),
            created_at: Utc::now(),
        })
        .await
        .expect("log work failed");
}

/// Al: Website Design 3h, Website Coding 5h, App Testing 2h.
/// Bo: Website Coding 4h.
/// A February entry for Al falls outside every January range.
#[fixture]
async fn logged() -> (AppState, Seeded) {
    let (state, seeded) = make_seeded_state().await;
    let design = seeded.website.subtasks[2].id;
    let coding = seeded.website.subtasks[3].id;
    let testing = seeded.app.subtasks[4].id;
    let (al, bo) = (seeded.al.id, seeded.bo.id);
    let (website, app) = (seeded.website.id, seeded.app.id);

    log(&state, al, website, design, 3.0, "2024-01-02").await;
    log(&state, al, website, coding, 5.0, "2024-01-15").await;
    log(&state, bo, website, coding, 4.0, "2024-01-16").await;
    log(&state, al, app, testing, 2.0, "2024-01-31").await;
    log(&state, al, website, coding, 7.0, "2024-02-01").await;
    (state, seeded)
}

fn generate(date_range: &str, user_id: Option<i64>, project_id: Option<i64>) -> GenerateReport {
    GenerateReport {
        report_id: Uuid::now_v7(),
        user_id,
        project_id,
        date_range: date_range.into(),
        created_at: Utc::now(),
    }
}

#[rstest]
#[tokio::test]
async fn it_should_generate_persist_and_fetch_a_report(
    #[future] logged: (AppState, Seeded),
) {
    let (state, seeded) = logged.await;

    let generated = state
        .generate_report
        .handle(generate(JANUARY, None, None))
        .await
        .expect("generate failed");

    let report_data = serde_json::to_value(&generated.report_data).unwrap();
    assert_eq!(
        report_data,
        json!([
            {
                "userId": seeded.al.id,
                "userName": "Al",
                "projects": [
                    {
                        "projectId": seeded.website.id,
                        "projectName": "Website",
                        "totalHours": 8.0,
                        "subtasks": [
                            { "subtaskId": seeded.website.subtasks[2].id, "subtaskName": seeded.website.subtasks[2].name, "hours": 3.0 },
                            { "subtaskId": seeded.website.subtasks[3].id, "subtaskName": "Coding", "hours": 5.0 }
                        ]
                    },
                    {
                        "projectId": seeded.app.id,
                        "projectName": "App",
                        "totalHours": 2.0,
                        "subtasks": [
                            { "subtaskId": seeded.app.subtasks[4].id, "subtaskName": "Testing", "hours": 2.0 }
                        ]
                    }
                ]
            },
            {
                "userId": seeded.bo.id,
                "userName": "Bo",
                "projects": [
                    {
                        "projectId": seeded.website.id,
                        "projectName": "Website",
                        "totalHours": 4.0,
                        "subtasks": [
                            { "subtaskId": seeded.website.subtasks[3].id, "subtaskName": "Coding", "hours": 4.0 }
                        ]
                    }
                ]
            }
        ])
    );

    let stored = state
        .get_report
        .handle(generated.report_id)
        .await
        .expect("get failed");
    assert_eq!(stored.report_data, report_data);
    assert_eq!(stored.date_range, JANUARY);
    assert_eq!(stored.user_id, None);
    assert_eq!(stored.project_id, None);
}

#[rstest]
#[tokio::test]
async fn it_should_narrow_the_report_to_one_user(#[future] logged: (AppState, Seeded)) {
    let (state, seeded) = logged.await;

    let generated = state
        .generate_report
        .handle(generate(JANUARY, Some(seeded.bo.id), None))
        .await
        .unwrap();

    assert_eq!(generated.report_data.len(), 1);
    assert_eq!(generated.report_data[0].user_name, "Bo");
    let stored = state.get_report.handle(generated.report_id).await.unwrap();
    assert_eq!(stored.user_id, Some(seeded.bo.id));
}

#[rstest]
#[tokio::test]
async fn it_should_narrow_the_report_to_one_project(#[future] logged: (AppState, Seeded)) {
    let (state, seeded) = logged.await;

    let generated = state
        .generate_report
        .handle(generate(JANUARY, None, Some(seeded.app.id)))
        .await
        .unwrap();

    assert_eq!(generated.report_data.len(), 1);
    let al = &generated.report_data[0];
    assert_eq!(al.user_id, seeded.al.id);
    assert_eq!(al.projects.len(), 1);
    assert_eq!(al.projects[0].project_name, "App");
    assert_eq!(al.projects[0].total_hours, 2.0);
}

#[rstest]
#[case("2024-02-01 - 2024-02-29", 7.0)]
#[case("2024-01-31 - 2024-02-01", 9.0)]
#[case("2024-01-16 - 2024-01-16", 4.0)]
#[tokio::test]
async fn it_should_include_both_ends_of_the_range(
    #[future] logged: (AppState, Seeded),
    #[case] date_range: &str,
    #[case] expected_hours: f64,
) {
    let (state, _) = logged.await;

    let generated = state
        .generate_report
        .handle(generate(date_range, None, None))
        .await
        .unwrap();

    let total: f64 = generated
        .report_data
        .iter()
        .flat_map(|u| u.projects.iter())
        .map(|p| p.total_hours)
        .sum();
    assert_eq!(total, expected_hours);
}

#[rstest]
#[tokio::test]
async fn it_should_persist_an_empty_report_when_nothing_matches(
    #[future] logged: (AppState, Seeded),
) {
    let (state, _) = logged.await;

    let generated = state
        .generate_report
        .handle(generate("2023-01-01 - 2023-12-31", None, None))
        .await
        .unwrap();

    assert!(generated.report_data.is_empty());
    let stored = state.get_report.handle(generated.report_id).await.unwrap();
    assert_eq!(stored.report_data, json!([]));
}
