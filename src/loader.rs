//! Data load: fetch both relationship lists and compute the asymmetries.
//!
//! Blocking. Callers that must stay responsive run it on a worker thread
//! and deliver the result as a completion event.

use crate::error::LoadError;
use crate::github::RelationshipClient;
use crate::types::{LoadedData, RelationshipSets};

/// Fetch user → following → followers, then compute sorted asymmetric sets.
///
/// The first failing fetch short-circuits the rest.
pub fn load_data(client: &dyn RelationshipClient) -> Result<LoadedData, LoadError> {
    let user = client.current_user().map_err(LoadError::User)?;
    let following = client.following(&user).map_err(LoadError::Following)?;
    let followers = client.followers(&user).map_err(LoadError::Followers)?;

    let sets = RelationshipSets::from_lists(&user, &following, &followers);

    tracing::debug!(
        %user,
        following = following.len(),
        followers = followers.len(),
        only_following = sets.only_following.len(),
        only_followers = sets.only_followers.len(),
        "relationships loaded"
    );

    Ok(LoadedData { user, sets })
}
