use leptos::logging::log;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    CurrentUserInfo, LoginFormData, RecipeDetails, RecipePayload, RecipeSummary, RemixDetails,
    RemixPayload, RemixSummary, ReviewDetails, ReviewFormData, SignUpFormData,
    UpdateProfileFormData, UserRecipeReview, UserRemixReview,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Base address of the Remix backend. A CSR bundle has no runtime
/// environment, so this is injected at build time.
pub fn api_base_url() -> String {
    option_env!("REMIX_API_BASE_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

/// A failed gateway call, already normalized for display: `into_messages`
/// yields one human-readable string per problem, which is what the form
/// alert boxes render.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("server rejected the request: {}", messages.join("; "))]
    Server { messages: Vec<String> },
}

impl ApiError {
    pub fn into_messages(self) -> Vec<String> {
        match self {
            ApiError::Server { messages } => messages,
            other => vec![other.to_string()],
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: ErrorMessage,
}

/// The backend reports either one message or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

fn normalize_error_messages(status: u16, body: &str) -> Vec<String> {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.message {
            ErrorMessage::Single(message) => vec![message],
            ErrorMessage::Many(messages) => messages,
        },
        Err(_) => vec![format!("HTTP {status}")],
    }
}

// -- Response envelopes --
//
// Every endpoint wraps its result in a named field; each typed method below
// unwraps exactly one of these. The field names are the server contract.

#[derive(Deserialize)]
struct MessageEnvelope {
    message: String,
}

#[derive(Deserialize)]
struct TokenEnvelope {
    token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDetailsEnvelope {
    user_details: CurrentUserInfo,
}

/// PATCH users/{username} is consumed whole: alongside the updated fields it
/// carries a reissued token whose claims reflect the new username.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProfile {
    pub updated_token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllUserRecipesEnvelope {
    all_user_recipes: Vec<RecipeSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllUserRemixesEnvelope {
    all_user_remixes: Vec<RemixSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecipeReviewsEnvelope {
    user_recipe_reviews: Vec<UserRecipeReview>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRemixReviewsEnvelope {
    user_remix_reviews: Vec<UserRemixReview>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeSearchResultsEnvelope {
    recipe_search_results: Vec<RecipeSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeDetailsEnvelope {
    recipe_details: RecipeDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemixDetailsEnvelope {
    remix_details: RemixDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewRecipeIdEnvelope {
    new_recipe_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatedRecipeIdEnvelope {
    updated_recipe_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewRemixIdEnvelope {
    new_remix_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatedRemixIdEnvelope {
    updated_remix_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllRecipeReviewsEnvelope {
    all_recipe_reviews: Vec<ReviewDetails>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllRecipeRemixesEnvelope {
    all_recipe_remixes: Vec<RemixSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllRemixReviewsEnvelope {
    all_remix_reviews: Vec<ReviewDetails>,
}

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct NameQuery<'a> {
    name: &'a str,
}

/// The API gateway for the Remix backend. This is the only place in the
/// client that performs network I/O; everything else goes through the typed
/// methods here so no component is API-aware.
///
/// Whenever a user signs up or logs in they are issued a token which most
/// routes require; the application shell installs it here via `set_token`.
#[derive(Debug, Clone)]
pub struct RemixApi {
    base_url: String,
    token: Option<String>,
}

impl RemixApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// The one reusable primitive every typed method goes through. GETs send
    /// `data` as query parameters, every other verb as a JSON body. The held
    /// token rides along as a raw `authorization` header (no "Bearer "
    /// prefix). Failures of any kind come back as a normalized `ApiError`;
    /// nothing is retried.
    async fn request<T, B>(&self, method: Method, endpoint: &str, data: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        log!("API call: {method} {endpoint}");
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut builder = reqwest::Client::new().request(method.clone(), &url);
        if let Some(token) = &self.token {
            builder = builder.header("authorization", token.as_str());
        }
        builder = if method == Method::GET {
            builder.query(data)
        } else {
            builder.json(data)
        };

        let transport = |err: reqwest::Error| ApiError::Transport {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        };

        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                messages: normalize_error_messages(status.as_u16(), &body),
            });
        }
        response.json::<T>().await.map_err(transport)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, &Empty {}).await
    }

    // -- Individual API routes --

    /// Registers a new account. Returns the server's confirmation message.
    pub async fn sign_up(&self, form: &SignUpFormData) -> Result<String, ApiError> {
        let res: MessageEnvelope = self.request(Method::POST, "auth/register", form).await?;
        Ok(res.message)
    }

    /// Authenticates the user and returns their session token.
    pub async fn login(&self, form: &LoginFormData) -> Result<String, ApiError> {
        let res: TokenEnvelope = self.request(Method::POST, "auth/login", form).await?;
        Ok(res.token)
    }

    /// Gets the logged-in user's profile snapshot: username, email, their 3
    /// newest recipes and remixes, newest reviews, and favorite id lists.
    pub async fn get_current_logged_in_user(
        &self,
        username: &str,
    ) -> Result<CurrentUserInfo, ApiError> {
        let res: UserDetailsEnvelope = self.get(&format!("users/{username}")).await?;
        Ok(res.user_details)
    }

    /// Updates the user's username and email. The response carries a
    /// reissued token with the new claims, which the caller must install.
    pub async fn update_user_profile(
        &self,
        username: &str,
        form: &UpdateProfileFormData,
    ) -> Result<UpdatedProfile, ApiError> {
        self.request(Method::PATCH, &format!("users/{username}"), form)
            .await
    }

    /// All recipes belonging to a user, newest first.
    pub async fn get_users_recipes(&self, username: &str) -> Result<Vec<RecipeSummary>, ApiError> {
        let res: AllUserRecipesEnvelope = self.get(&format!("users/{username}/recipes")).await?;
        Ok(res.all_user_recipes)
    }

    /// All remixes belonging to a user, newest first.
    pub async fn get_users_remixes(&self, username: &str) -> Result<Vec<RemixSummary>, ApiError> {
        let res: AllUserRemixesEnvelope = self.get(&format!("users/{username}/remixes")).await?;
        Ok(res.all_user_remixes)
    }

    /// Every recipe review made by a user, newest first.
    pub async fn get_users_recipe_reviews(
        &self,
        username: &str,
    ) -> Result<Vec<UserRecipeReview>, ApiError> {
        let res: UserRecipeReviewsEnvelope =
            self.get(&format!("users/{username}/reviews/recipes")).await?;
        Ok(res.user_recipe_reviews)
    }

    /// Every remix review made by a user, newest first.
    pub async fn get_users_remix_reviews(
        &self,
        username: &str,
    ) -> Result<Vec<UserRemixReview>, ApiError> {
        let res: UserRemixReviewsEnvelope =
            self.get(&format!("users/{username}/reviews/remixes")).await?;
        Ok(res.user_remix_reviews)
    }

    /// Basic info about every recipe, ordered by name.
    pub async fn get_all_recipes(&self) -> Result<Vec<RecipeSummary>, ApiError> {
        let res: RecipeSearchResultsEnvelope = self.get("recipes").await?;
        Ok(res.recipe_search_results)
    }

    /// Recipes whose names match the search query, ordered by name.
    pub async fn get_filtered_recipes_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<RecipeSummary>, ApiError> {
        let res: RecipeSearchResultsEnvelope = self
            .request(Method::GET, "recipes", &NameQuery { name })
            .await?;
        Ok(res.recipe_search_results)
    }

    /// Full details of one recipe, including its 3 newest remixes and its
    /// newest review.
    pub async fn get_recipe_details(&self, recipe_id: i64) -> Result<RecipeDetails, ApiError> {
        let res: RecipeDetailsEnvelope = self.get(&format!("recipes/{recipe_id}")).await?;
        Ok(res.recipe_details)
    }

    /// Full details of one remix, including its newest review.
    pub async fn get_remix_details(&self, remix_id: i64) -> Result<RemixDetails, ApiError> {
        let res: RemixDetailsEnvelope = self.get(&format!("remixes/{remix_id}")).await?;
        Ok(res.remix_details)
    }

    /// Creates a recipe and returns the id the database assigned it.
    pub async fn add_new_recipe(&self, payload: &RecipePayload) -> Result<i64, ApiError> {
        let res: NewRecipeIdEnvelope = self.request(Method::POST, "recipes", payload).await?;
        Ok(res.new_recipe_id)
    }

    /// Edits an existing recipe and returns its id.
    pub async fn edit_recipe(
        &self,
        recipe_id: i64,
        payload: &RecipePayload,
    ) -> Result<i64, ApiError> {
        let res: UpdatedRecipeIdEnvelope = self
            .request(Method::PATCH, &format!("recipes/{recipe_id}"), payload)
            .await?;
        Ok(res.updated_recipe_id)
    }

    /// Creates a remix and returns the id the database assigned it.
    pub async fn add_new_remix(&self, payload: &RemixPayload) -> Result<i64, ApiError> {
        let res: NewRemixIdEnvelope = self.request(Method::POST, "remixes", payload).await?;
        Ok(res.new_remix_id)
    }

    /// Edits an existing remix and returns its id.
    pub async fn edit_remix(&self, remix_id: i64, payload: &RemixPayload) -> Result<i64, ApiError> {
        let res: UpdatedRemixIdEnvelope = self
            .request(Method::PATCH, &format!("remixes/{remix_id}"), payload)
            .await?;
        Ok(res.updated_remix_id)
    }

    pub async fn add_new_recipe_review(
        &self,
        recipe_id: i64,
        form: &ReviewFormData,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(Method::POST, &format!("recipes/{recipe_id}/reviews"), form)
            .await?;
        Ok(())
    }

    pub async fn edit_recipe_review(
        &self,
        review_id: i64,
        form: &ReviewFormData,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(Method::PATCH, &format!("reviews/recipes/{review_id}"), form)
            .await?;
        Ok(())
    }

    pub async fn add_new_remix_review(
        &self,
        remix_id: i64,
        form: &ReviewFormData,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(Method::POST, &format!("remixes/{remix_id}/reviews"), form)
            .await?;
        Ok(())
    }

    pub async fn edit_remix_review(
        &self,
        review_id: i64,
        form: &ReviewFormData,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(Method::PATCH, &format!("reviews/remixes/{review_id}"), form)
            .await?;
        Ok(())
    }

    /// Every review of one recipe, newest first.
    pub async fn get_all_recipe_reviews(
        &self,
        recipe_id: i64,
    ) -> Result<Vec<ReviewDetails>, ApiError> {
        let res: AllRecipeReviewsEnvelope =
            self.get(&format!("recipes/{recipe_id}/reviews")).await?;
        Ok(res.all_recipe_reviews)
    }

    /// Every remix of one recipe, newest first.
    pub async fn get_all_recipe_remixes(
        &self,
        recipe_id: i64,
    ) -> Result<Vec<RemixSummary>, ApiError> {
        let res: AllRecipeRemixesEnvelope =
            self.get(&format!("recipes/{recipe_id}/remixes")).await?;
        Ok(res.all_recipe_remixes)
    }

    /// Every review of one remix, newest first.
    pub async fn get_all_remix_reviews(
        &self,
        remix_id: i64,
    ) -> Result<Vec<ReviewDetails>, ApiError> {
        let res: AllRemixReviewsEnvelope =
            self.get(&format!("remixes/{remix_id}/reviews")).await?;
        Ok(res.all_remix_reviews)
    }

    pub async fn add_recipe_to_favorites(
        &self,
        username: &str,
        recipe_id: i64,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(
                Method::POST,
                &format!("users/{username}/favorites/recipes/{recipe_id}"),
                &Empty {},
            )
            .await?;
        Ok(())
    }

    pub async fn remove_recipe_from_favorites(
        &self,
        username: &str,
        recipe_id: i64,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(
                Method::DELETE,
                &format!("users/{username}/favorites/recipes/{recipe_id}"),
                &Empty {},
            )
            .await?;
        Ok(())
    }

    pub async fn add_remix_to_favorites(
        &self,
        username: &str,
        remix_id: i64,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(
                Method::POST,
                &format!("users/{username}/favorites/remixes/{remix_id}"),
                &Empty {},
            )
            .await?;
        Ok(())
    }

    pub async fn remove_remix_from_favorites(
        &self,
        username: &str,
        remix_id: i64,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request(
                Method::DELETE,
                &format!("users/{username}/favorites/remixes/{remix_id}"),
                &Empty {},
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_with_message_list_is_split_out() {
        let body = r#"{"error":{"message":["bad username","password too short"]}}"#;
        assert_eq!(
            normalize_error_messages(422, body),
            vec!["bad username".to_string(), "password too short".to_string()]
        );
    }

    #[test]
    fn scalar_error_message_is_wrapped_in_a_one_element_list() {
        let body = r#"{"error":{"message":"bad username"}}"#;
        assert_eq!(normalize_error_messages(422, body), vec!["bad username".to_string()]);
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        assert_eq!(normalize_error_messages(500, "<html>oops</html>"), vec!["HTTP 500".to_string()]);
        assert_eq!(normalize_error_messages(404, ""), vec!["HTTP 404".to_string()]);
    }

    #[test]
    fn server_error_yields_its_messages() {
        let err = ApiError::Server {
            messages: vec!["bad username".to_string()],
        };
        assert_eq!(err.into_messages(), vec!["bad username".to_string()]);
    }

    #[test]
    fn transport_error_yields_a_single_message() {
        let err = ApiError::Transport {
            endpoint: "auth/login".to_string(),
            message: "connection refused".to_string(),
        };
        let messages = err.into_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("auth/login"));
    }
}
