//! List trait for fetching paginated collections.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::GitLabClient;
use crate::error::Result;
use crate::pagination::{Page, PaginationParams};

/// List resources that live under some parent scope.
///
/// Implementors only name the endpoint; paging is shared.
///
/// # Example
///
/// ```ignore
/// use gitlab_members::{token_from_env, GitLabClient, List, Member, MemberScope, DEFAULT_API_URL};
///
/// let client = GitLabClient::new(&token_from_env()?, DEFAULT_API_URL)?;
///
/// // Fetch a single page
/// let page = Member::list_page(&client, &MemberScope::Group(42), 1, 20).await?;
///
/// // Fetch all pages
/// let members = Member::list_all(&client, &MemberScope::Project(7)).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send + DeserializeOwned {
    /// What the collection is listed under (a group, a project).
    type Scope: Send + Sync + std::fmt::Debug;

    /// Relative API path of the collection for `scope`.
    fn list_path(scope: &Self::Scope) -> String;

    /// List a single page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    async fn list_page(
        client: &GitLabClient,
        scope: &Self::Scope,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Self>> {
        let path = Self::list_path(scope);
        client
            .get_page(&path, PaginationParams::for_page(page, per_page))
            .await
    }

    /// List every item (fetches all pages).
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails; no partial result is
    /// returned.
    async fn list_all(client: &GitLabClient, scope: &Self::Scope) -> Result<Vec<Self>> {
        let path = Self::list_path(scope);
        client.get_all(&path).await
    }
}
