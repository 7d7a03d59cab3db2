use std::sync::Arc;

use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::core::user::User;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::PageLimits;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::pagination::{Page, PageRequest, paginate};

pub struct UserQueries {
    users: Arc<dyn UserRepository>,
    page_limits: PageLimits,
}

impl UserQueries {
    pub fn new(users: Arc<dyn UserRepository>, page_limits: PageLimits) -> Self {
        Self { users, page_limits }
    }

    /// Admins see anyone, everybody else only themselves.
    pub async fn get(&self, actor: &Actor, user_id: &str) -> Result<User, ServiceError> {
        if !actor.is_admin() && !actor.owns(user_id) {
            return Err(ServiceError::AuthorizationDenied(
                "not enough permissions to view this user".into(),
            ));
        }
        self.users
            .get(user_id)
            .await?
            .ok_or(ServiceError::NotFound("User"))
    }

    pub async fn list(
        &self,
        actor: &Actor,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Page<User>, ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::AuthorizationDenied(
                "only admins can list users".into(),
            ));
        }
        let users = self.users.list().await?;
        Ok(paginate(
            users,
            PageRequest::normalize(page, page_size, self.page_limits),
        ))
    }
}
