use serde_json::Value;

use super::{CoreApi, UsersListParams};
use crate::api::types::{ApiResult, ApiSdkError, PaginatedResult, PagingContext};

impl CoreApi {
    /// Fetches a single user by primary key.
    ///
    /// Numeric ids go through [`CoreApi::users_retrieve`]; anything else is
    /// passed through as the path segment and must not contain `/`, `?` or `#`.
    pub async fn get_user(&self, user_id: &str) -> ApiResult<Value> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ApiSdkError::ConfigError("User id can not be empty".into()));
        }

        match user_id.parse::<i32>() {
            Ok(id) => self.users_retrieve(id).await,
            Err(_) if user_id.contains(['/', '?', '#']) => Err(ApiSdkError::ConfigError(format!(
                "User id '{}' can not contain '/', '?' or '#'",
                user_id
            ))),
            Err(_) => self.client.get(&format!("core/users/{}/", user_id)).await,
        }
    }

    /// Lists users without filters.
    pub async fn list_users(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<PaginatedResult> {
        let paging = PagingContext { page, page_size, ..Default::default() };
        self.users_list(&UsersListParams::default(), &paging).await
    }
}
