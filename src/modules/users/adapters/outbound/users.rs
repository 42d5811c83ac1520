use crate::modules::users::core::user::{NewUser, User};
use crate::shared::core::primitives::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> anyhow::Result<User>;
    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>>;
}
