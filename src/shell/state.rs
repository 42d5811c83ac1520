use crate::modules::integrations::use_cases::connect_tracker::handler::ConnectTrackerHandler;
use crate::modules::integrations::use_cases::disconnect_tracker::handler::DisconnectTrackerHandler;
use crate::modules::integrations::use_cases::sync_tracker::handler::SyncTrackerHandler;
use crate::modules::integrations::use_cases::tracker_status::handler::TrackerStatusHandler;
use crate::modules::projects::use_cases::create_project::handler::CreateProjectHandler;
use crate::modules::projects::use_cases::list_projects::handler::ListProjectsHandler;
use crate::modules::reports::use_cases::generate_report::handler::GenerateReportHandler;
use crate::modules::reports::use_cases::get_report::handler::GetReportHandler;
use crate::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use crate::modules::work_logs::use_cases::log_work::handler::LogWorkHandler;
use crate::shared::infrastructure::database::in_memory::InMemoryDatabase;
use std::sync::Arc;

type Database = InMemoryDatabase;

#[derive(Clone)]
pub struct AppState {
    pub register_user: Arc<RegisterUserHandler<Database>>,
    pub create_project: Arc<CreateProjectHandler<Database, Database>>,
    pub list_projects: Arc<ListProjectsHandler<Database>>,
    pub log_work: Arc<LogWorkHandler<Database, Database, Database>>,
    pub generate_report: Arc<GenerateReportHandler<Database, Database>>,
    pub get_report: Arc<GetReportHandler<Database>>,
    pub connect_tracker: Arc<ConnectTrackerHandler<Database, Database>>,
    pub disconnect_tracker: Arc<DisconnectTrackerHandler<Database>>,
    pub tracker_status: Arc<TrackerStatusHandler<Database>>,
    pub sync_tracker: Arc<SyncTrackerHandler<Database, Database>>,
}

impl AppState {
    pub fn new(database: Arc<Database>) -> Self {
        Self {
            register_user: Arc::new(RegisterUserHandler::new(database.clone())),
            create_project: Arc::new(CreateProjectHandler::new(
                database.clone(),
                database.clone(),
            )),
            list_projects: Arc::new(ListProjectsHandler::new(database.clone())),
            log_work: Arc::new(LogWorkHandler::new(
                database.clone(),
                database.clone(),
                database.clone(),
            )),
            generate_report: Arc::new(GenerateReportHandler::new(
                database.clone(),
                database.clone(),
            )),
            get_report: Arc::new(GetReportHandler::new(database.clone())),
            connect_tracker: Arc::new(ConnectTrackerHandler::new(
                database.clone(),
                database.clone(),
            )),
            disconnect_tracker: Arc::new(DisconnectTrackerHandler::new(database.clone())),
            tracker_status: Arc::new(TrackerStatusHandler::new(database.clone())),
            sync_tracker: Arc::new(SyncTrackerHandler::new(database.clone(), database)),
        }
    }
}
