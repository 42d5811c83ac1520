use crate::modules::users::adapters::outbound::users::UserRepository;
use crate::modules::users::core::user::{NewUser, User};
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct RegisterUserHandler<TUsers>
where
    TUsers: UserRepository + Send + Sync + 'static,
{
    users: Arc<TUsers>,
}

impl<TUsers> RegisterUserHandler<TUsers>
where
    TUsers: UserRepository + Send + Sync + 'static,
{
    pub fn new(users: Arc<TUsers>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<User, ApplicationError> {
        let name = command.name.trim();
        let email = command.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ApplicationError::Invalid("Name and email are required".into()));
        }
        if !email.contains('@') {
            return Err(ApplicationError::Invalid("Invalid email address".into()));
        }

        let user = self
            .users
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                is_admin: command.is_admin,
                created_at: command.created_at,
            })
            .await?;
        tracing::info!(user_id = user.id, is_admin = user.is_admin, "user registered");
        Ok(user)
    }
}

#[cfg(test)]
mod register_user_handler_tests {
    use super::*;
    use crate::shared::infrastructure::database::in_memory::InMemoryDatabase;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> RegisterUser {
        RegisterUser {
            name: "  Al  ".into(),
            email: "al@example.com".into(),
            is_admin: true,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_the_trimmed_user(command: RegisterUser) {
        let database = Arc::new(InMemoryDatabase::new());
        let handler = RegisterUserHandler::new(database.clone());

        let user = handler.handle(command).await.expect("handle failed");

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Al");
        assert!(user.is_admin);
        assert_eq!(
            UserRepository::find_by_id(&*database, 1).await.unwrap(),
            Some(user)
        );
    }

    #[rstest]
    #[case("", "al@example.com")]
    #[case("Al", "   ")]
    #[case("Al", "not-an-email")]
    #[tokio::test]
    async fn it_should_reject_invalid_input(
        command: RegisterUser,
        #[case] name: &str,
        #[case] email: &str,
    ) {
        let handler = RegisterUserHandler::new(Arc::new(InMemoryDatabase::new()));
        let result = handler
            .handle(RegisterUser {
                name: name.into(),
                email: email.into(),
                ..command
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::Invalid(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_database_is_offline(command: RegisterUser) {
        let mut database = InMemoryDatabase::new();
        database.toggle_offline();
        let handler = RegisterUserHandler::new(Arc::new(database));
        let result = handler.handle(command).await;
        assert!(matches!(result, Err(ApplicationError::Unexpected(_))));
    }
}
