use crate::modules::projects::adapters::outbound::projects::ProjectRepository;
use crate::modules::projects::core::project::{NewProject, Project, default_subtasks};
use crate::modules::users::adapters::outbound::users::UserRepository;
use crate::modules::users::core::user::{NewUser, User};
use crate::shared::infrastructure::database::in_memory::InMemoryDatabase;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// A database holding an admin (Al), a member (Bo) and two projects with the
/// default subtasks.
pub struct Seeded {
    pub database: Arc<InMemoryDatabase>,
    pub al: User,
    pub bo: User,
    pub website: Project,
    pub app: Project,
}

pub async fn seed_database() -> Seeded {
    seed(InMemoryDatabase::new()).await
}

pub async fn seed(database: InMemoryDatabase) -> Seeded {
    let al = UserRepository::insert(&database, new_user("Al", true))
        .await
        .expect("seed admin failed");
    let bo = UserRepository::insert(&database, new_user("Bo", false))
        .await
        .expect("seed member failed");
    let website = ProjectRepository::insert(&database, new_project("Website", al.id))
        .await
        .expect("seed website failed");
    let app = ProjectRepository::insert(&database, new_project("App", al.id))
        .await
        .expect("seed app failed");
    Seeded {
        database: Arc::new(database),
        al,
        bo,
        website,
        app,
    }
}

fn new_user(name: &str, is_admin: bool) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        is_admin,
        created_at: Utc::now(),
    }
}

fn new_project(name: &str, admin_id: i64) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: format!("{name} project"),
        admin_id,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        subtasks: default_subtasks(),
        created_at: Utc::now(),
    }
}
