use std::collections::HashSet;

use leptos::logging::error;
use leptos::prelude::*;

use crate::api::RemixApi;
use crate::models::{
    CurrentUserInfo, LoginFormData, RecipeFormDraft, RecipeSummary, RemixFormDraft, RemixSummary,
    ReviewFormData, SignUpFormData, UpdateProfileFormData,
};

/// How many recent recipes/remixes the profile snapshot keeps.
pub const RECENT_LIST_CAP: usize = 3;

/// Tab-wide state for the logged-in user, provided once by the application
/// shell and read by any descendant with `expect_context`. Mutation happens
/// only through the shell's lifecycle effect and the dispatch actions below;
/// the single-threaded UI event loop serializes all of it.
#[derive(Clone, Copy)]
pub struct CurrentUserContext {
    pub current_user: ReadSignal<Option<CurrentUserInfo>>,
    pub set_current_user: WriteSignal<Option<CurrentUserInfo>>,
    pub user_token: ReadSignal<Option<String>>,
    pub set_user_token: WriteSignal<Option<String>>,
    pub favorite_recipe_ids: ReadSignal<HashSet<i64>>,
    pub set_favorite_recipe_ids: WriteSignal<HashSet<i64>>,
    pub favorite_remix_ids: ReadSignal<HashSet<i64>>,
    pub set_favorite_remix_ids: WriteSignal<HashSet<i64>>,
}

impl CurrentUserContext {
    /// Reactive: re-runs the caller when the favorite set changes.
    pub fn is_recipe_favorite(&self, recipe_id: i64) -> bool {
        self.favorite_recipe_ids.with(|ids| ids.contains(&recipe_id))
    }

    pub fn is_remix_favorite(&self, remix_id: i64) -> bool {
        self.favorite_remix_ids.with(|ids| ids.contains(&remix_id))
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.with(|user| user.is_some())
    }

    fn username(&self) -> Option<String> {
        self.current_user
            .with_untracked(|user| user.as_ref().map(|u| u.username.clone()))
    }
}

// -- Pure snapshot reducers --
//
// Kept free of signals and network so they can be tested directly.

/// Prepends `item` to a newest-first list, evicting the oldest entry once the
/// list is at capacity.
pub fn push_recent<T>(list: &mut Vec<T>, item: T) {
    list.insert(0, item);
    list.truncate(RECENT_LIST_CAP);
}

/// Returns the favorite set with `id` added, or `None` when it is already a
/// member, in which case the caller skips the network call entirely.
pub fn favorites_with_added(ids: &HashSet<i64>, id: i64) -> Option<HashSet<i64>> {
    if ids.contains(&id) {
        return None;
    }
    let mut updated = ids.clone();
    updated.insert(id);
    Some(updated)
}

/// Returns the favorite set with `id` removed, or `None` when it was never a
/// member.
pub fn favorites_with_removed(ids: &HashSet<i64>, id: i64) -> Option<HashSet<i64>> {
    if !ids.contains(&id) {
        return None;
    }
    let mut updated = ids.clone();
    updated.remove(&id);
    Some(updated)
}

/// The dispatch functions the view tree calls to change anything. Each one is
/// a thin transactional wrapper: coerce the form draft, call the gateway, and
/// either patch the session snapshot and return `Ok`, or hand back the
/// normalized error messages for the form's alert box. Nothing here throws.
#[derive(Clone, Copy)]
pub struct SessionActions {
    pub api: StoredValue<RemixApi>,
    pub session: CurrentUserContext,
}

impl SessionActions {
    /// Registers a new account. The caller redirects to the login page on
    /// success; no token is issued until the user actually logs in.
    pub async fn sign_up(self, form: SignUpFormData) -> Result<String, Vec<String>> {
        match self.api.get_value().sign_up(&form).await {
            Ok(message) => Ok(message),
            Err(err) => {
                error!("user signup failed: {err}");
                Err(err.into_messages())
            }
        }
    }

    /// Logs the user in. Setting the token kicks off the session lifecycle,
    /// which fetches the profile and populates the context.
    pub async fn login(self, form: LoginFormData) -> Result<(), Vec<String>> {
        match self.api.get_value().login(&form).await {
            Ok(token) => {
                self.session.set_user_token.set(Some(token));
                Ok(())
            }
            Err(err) => {
                error!("user login failed: {err}");
                Err(err.into_messages())
            }
        }
    }

    /// Clears the profile and the token. The lifecycle effect then wipes the
    /// stored token and favorite sets.
    pub fn logout(self) {
        self.session.set_current_user.set(None);
        self.session.set_user_token.set(None);
    }

    /// Saves a new username/email. The backend reissues the token with the
    /// new claims; installing it re-drives the lifecycle so the whole site
    /// picks up the updated profile.
    pub async fn update_profile(self, form: UpdateProfileFormData) -> Result<(), Vec<String>> {
        let username = self.require_login()?;
        match self
            .api
            .get_value()
            .update_user_profile(&username, &form)
            .await
        {
            Ok(updated) => {
                self.session.set_user_token.set(Some(updated.updated_token));
                Ok(())
            }
            Err(err) => {
                error!("profile update failed: {err}");
                Err(err.into_messages())
            }
        }
    }

    /// Creates a recipe from a form draft. On success the new recipe is also
    /// pushed onto the snapshot's recent-recipes list (capacity 3, newest
    /// first) so the profile page reflects it without a refetch.
    pub async fn add_recipe(self, draft: RecipeFormDraft) -> Result<i64, Vec<String>> {
        let payload = draft.into_payload()?;
        match self.api.get_value().add_new_recipe(&payload).await {
            Ok(new_recipe_id) => {
                self.session.set_current_user.update(|user| {
                    if let Some(user) = user {
                        push_recent(
                            &mut user.recipes,
                            RecipeSummary {
                                id: new_recipe_id,
                                name: payload.name.clone(),
                                description: payload.description.clone(),
                                image_url: payload.image_url.clone(),
                                created_at: String::new(),
                            },
                        );
                    }
                });
                Ok(new_recipe_id)
            }
            Err(err) => {
                error!("failed to add a new recipe: {err}");
                Err(err.into_messages())
            }
        }
    }

    pub async fn edit_recipe(
        self,
        recipe_id: i64,
        draft: RecipeFormDraft,
    ) -> Result<i64, Vec<String>> {
        let payload = draft.into_payload()?;
        match self.api.get_value().edit_recipe(recipe_id, &payload).await {
            Ok(updated_recipe_id) => Ok(updated_recipe_id),
            Err(err) => {
                error!("failed to update recipe {recipe_id}: {err}");
                Err(err.into_messages())
            }
        }
    }

    /// Creates a remix of `original_recipe_id`. The parent id comes from the
    /// route, not the form, and is injected into the payload here.
    pub async fn add_remix(
        self,
        original_recipe_id: i64,
        draft: RemixFormDraft,
    ) -> Result<i64, Vec<String>> {
        let payload = draft.into_payload(original_recipe_id)?;
        match self.api.get_value().add_new_remix(&payload).await {
            Ok(new_remix_id) => {
                self.session.set_current_user.update(|user| {
                    if let Some(user) = user {
                        push_recent(
                            &mut user.remixes,
                            RemixSummary {
                                id: new_remix_id,
                                name: payload.name.clone(),
                                description: payload.description.clone(),
                                original_recipe: None,
                                image_url: payload.image_url.clone(),
                                created_at: String::new(),
                            },
                        );
                    }
                });
                Ok(new_remix_id)
            }
            Err(err) => {
                error!("failed to add a new remix: {err}");
                Err(err.into_messages())
            }
        }
    }

    pub async fn edit_remix(
        self,
        remix_id: i64,
        draft: RemixFormDraft,
    ) -> Result<i64, Vec<String>> {
        let original_recipe_id = match self.api.get_value().get_remix_details(remix_id).await {
            Ok(details) => details.original_recipe_id,
            Err(err) => return Err(err.into_messages()),
        };
        let payload = draft.into_payload(original_recipe_id)?;
        match self.api.get_value().edit_remix(remix_id, &payload).await {
            Ok(updated_remix_id) => Ok(updated_remix_id),
            Err(err) => {
                error!("failed to update remix {remix_id}: {err}");
                Err(err.into_messages())
            }
        }
    }

    pub async fn add_recipe_review(
        self,
        recipe_id: i64,
        form: ReviewFormData,
    ) -> Result<(), Vec<String>> {
        self.api
            .get_value()
            .add_new_recipe_review(recipe_id, &form)
            .await
            .map_err(|err| {
                error!("failed to add a new recipe review: {err}");
                err.into_messages()
            })
    }

    pub async fn edit_recipe_review(
        self,
        review_id: i64,
        form: ReviewFormData,
    ) -> Result<(), Vec<String>> {
        self.api
            .get_value()
            .edit_recipe_review(review_id, &form)
            .await
            .map_err(|err| {
                error!("failed to update recipe review {review_id}: {err}");
                err.into_messages()
            })
    }

    pub async fn add_remix_review(
        self,
        remix_id: i64,
        form: ReviewFormData,
    ) -> Result<(), Vec<String>> {
        self.api
            .get_value()
            .add_new_remix_review(remix_id, &form)
            .await
            .map_err(|err| {
                error!("failed to add a new remix review: {err}");
                err.into_messages()
            })
    }

    pub async fn edit_remix_review(
        self,
        review_id: i64,
        form: ReviewFormData,
    ) -> Result<(), Vec<String>> {
        self.api
            .get_value()
            .edit_remix_review(review_id, &form)
            .await
            .map_err(|err| {
                error!("failed to update remix review {review_id}: {err}");
                err.into_messages()
            })
    }

    /// Adds a recipe to the user's favorites. A no-op when the id is already
    /// a member, so repeated clicks cost at most one network call. The local
    /// set is committed only after the backend accepts the change; a failure
    /// leaves it untouched.
    pub async fn add_recipe_to_favorites(self, recipe_id: i64) -> Result<(), Vec<String>> {
        let Some(updated) = self
            .session
            .favorite_recipe_ids
            .with_untracked(|ids| favorites_with_added(ids, recipe_id))
        else {
            return Ok(());
        };
        let username = self.require_login()?;
        match self
            .api
            .get_value()
            .add_recipe_to_favorites(&username, recipe_id)
            .await
        {
            Ok(()) => {
                self.session.set_favorite_recipe_ids.set(updated);
                Ok(())
            }
            Err(err) => Err(err.into_messages()),
        }
    }

    /// Removes a recipe from the user's favorites; a no-op when the id was
    /// never a member.
    pub async fn remove_recipe_from_favorites(self, recipe_id: i64) -> Result<(), Vec<String>> {
        let Some(updated) = self
            .session
            .favorite_recipe_ids
            .with_untracked(|ids| favorites_with_removed(ids, recipe_id))
        else {
            return Ok(());
        };
        let username = self.require_login()?;
        match self
            .api
            .get_value()
            .remove_recipe_from_favorites(&username, recipe_id)
            .await
        {
            Ok(()) => {
                self.session.set_favorite_recipe_ids.set(updated);
                Ok(())
            }
            Err(err) => Err(err.into_messages()),
        }
    }

    pub async fn add_remix_to_favorites(self, remix_id: i64) -> Result<(), Vec<String>> {
        let Some(updated) = self
            .session
            .favorite_remix_ids
            .with_untracked(|ids| favorites_with_added(ids, remix_id))
        else {
            return Ok(());
        };
        let username = self.require_login()?;
        match self
            .api
            .get_value()
            .add_remix_to_favorites(&username, remix_id)
            .await
        {
            Ok(()) => {
                self.session.set_favorite_remix_ids.set(updated);
                Ok(())
            }
            Err(err) => Err(err.into_messages()),
        }
    }

    pub async fn remove_remix_from_favorites(self, remix_id: i64) -> Result<(), Vec<String>> {
        let Some(updated) = self
            .session
            .favorite_remix_ids
            .with_untracked(|ids| favorites_with_removed(ids, remix_id))
        else {
            return Ok(());
        };
        let username = self.require_login()?;
        match self
            .api
            .get_value()
            .remove_remix_from_favorites(&username, remix_id)
            .await
        {
            Ok(()) => {
                self.session.set_favorite_remix_ids.set(updated);
                Ok(())
            }
            Err(err) => Err(err.into_messages()),
        }
    }

    fn require_login(self) -> Result<String, Vec<String>> {
        self.session
            .username()
            .ok_or_else(|| vec!["You must be logged in to do that.".to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeSummary;

    fn recipe(id: i64) -> RecipeSummary {
        RecipeSummary {
            id,
            name: format!("recipe {id}"),
            description: String::new(),
            image_url: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn recent_list_keeps_newest_first() {
        let mut list = vec![recipe(2), recipe(1)];
        push_recent(&mut list, recipe(3));
        let ids: Vec<i64> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn recent_list_never_exceeds_cap() {
        let mut list = Vec::new();
        for id in 1..=10 {
            push_recent(&mut list, recipe(id));
            assert!(list.len() <= RECENT_LIST_CAP);
        }
        let ids: Vec<i64> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 9, 8]);
    }

    #[test]
    fn adding_a_present_favorite_is_a_no_op() {
        let ids: HashSet<i64> = [1, 2, 3].into_iter().collect();
        // None tells the dispatch to skip the network call; the set the
        // caller holds is unchanged.
        assert!(favorites_with_added(&ids, 2).is_none());
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn adding_a_new_favorite_extends_the_set() {
        let ids: HashSet<i64> = [1].into_iter().collect();
        let updated = favorites_with_added(&ids, 7).unwrap();
        assert!(updated.contains(&7));
        assert_eq!(updated.len(), 2);
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn removing_an_absent_favorite_is_a_no_op() {
        let ids: HashSet<i64> = [1, 2].into_iter().collect();
        assert!(favorites_with_removed(&ids, 9).is_none());
    }

    #[test]
    fn removing_a_present_favorite_shrinks_the_set() {
        let ids: HashSet<i64> = [1, 2].into_iter().collect();
        let updated = favorites_with_removed(&ids, 2).unwrap();
        assert!(!updated.contains(&2));
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn repeated_adds_settle_after_one_change() {
        // Two rapid clicks on the same id: the first produces an updated set,
        // committing it makes the second a guaranteed no-op.
        let ids: HashSet<i64> = HashSet::new();
        let committed = favorites_with_added(&ids, 5).unwrap();
        assert!(favorites_with_added(&committed, 5).is_none());
    }
}
