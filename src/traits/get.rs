//! Get trait for fetching single resources.

use async_trait::async_trait;

use crate::client::GitLabClient;
use crate::error::Result;

/// Fetch a single resource by ID.
///
/// # Example
///
/// ```ignore
/// use gitlab_members::{token_from_env, GitLabClient, Get, Group, GroupId, DEFAULT_API_URL};
///
/// let client = GitLabClient::new(&token_from_env()?, DEFAULT_API_URL)?;
/// let group = Group::get(&client, GroupId::new(42)?).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this resource.
    type Id;

    /// Fetch the resource by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is not found or the request fails.
    async fn get(client: &GitLabClient, id: Self::Id) -> Result<Self>;
}
