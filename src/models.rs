use serde::{Deserialize, Serialize};

// -- Wire schemas matching the Remix backend --

/// Basic recipe info shown on cards and in search results.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: String,
}

/// Basic remix info shown on cards. `original_recipe` is the name of the
/// recipe this remix was derived from, when the server includes it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub original_recipe: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: String,
}

/// A review as shown on detail pages and full review lists.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetails {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub review_author: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// A recipe review in the logged-in user's review list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecipeReview {
    #[serde(default)]
    pub id: i64,
    pub recipe_id: i64,
    pub recipe_name: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// A remix review in the logged-in user's review list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRemixReview {
    #[serde(default)]
    pub id: i64,
    pub remix_id: i64,
    pub remix_name: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Full recipe details, including its 3 newest remixes and newest review.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: i64,
    #[serde(default)]
    pub recipe_author: String,
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
    #[serde(default)]
    pub cooking_time: i64,
    #[serde(default)]
    pub servings: i64,
    #[serde(default)]
    pub remixes: Vec<RemixSummary>,
    #[serde(default)]
    pub most_recent_recipe_review: Option<ReviewDetails>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: String,
}

/// Full remix details, including its newest review and a reference to the
/// recipe it was derived from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixDetails {
    pub id: i64,
    #[serde(default)]
    pub remix_author: String,
    pub name: String,
    pub description: String,
    pub purpose: String,
    pub original_recipe_id: i64,
    #[serde(default)]
    pub original_recipe: String,
    pub ingredients: String,
    pub directions: String,
    #[serde(default)]
    pub cooking_time: i64,
    #[serde(default)]
    pub servings: i64,
    #[serde(default)]
    pub most_recent_remix_review: Option<ReviewDetails>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: String,
}

/// Profile snapshot of the logged-in user, as returned by the `userDetails`
/// field of GET users/{username}. The recipe and remix lists hold at most the
/// 3 newest entries, newest first.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserInfo {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub remixes: Vec<RemixSummary>,
    #[serde(default)]
    pub recipe_review: Option<UserRecipeReview>,
    #[serde(default)]
    pub remix_review: Option<UserRemixReview>,
    #[serde(default)]
    pub favorite_recipe_ids: Vec<i64>,
    #[serde(default)]
    pub favorite_remix_ids: Vec<i64>,
}

// -- Request payloads --

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpFormData {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormData {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileFormData {
    pub username: String,
    pub email: String,
}

/// Recipe create/edit request body. Numeric fields are real numbers here;
/// the string-typed draft below is what the form inputs bind to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
    pub cooking_time: i64,
    pub servings: i64,
    pub image_url: String,
}

/// Remix create/edit request body. `original_recipe_id` is injected by the
/// dispatch layer from the route, never typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixPayload {
    pub name: String,
    pub description: String,
    pub purpose: String,
    pub ingredients: String,
    pub directions: String,
    pub cooking_time: i64,
    pub servings: i64,
    pub image_url: String,
    pub original_recipe_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFormData {
    pub title: String,
    pub content: String,
}

// -- Form drafts --
//
// HTML number inputs still hand back strings, so drafts keep every field as a
// string and coerce on submission. An empty count coerces to 0 (the forms say
// "leave 0 if blank"); anything non-numeric is a validation error surfaced
// through the same message list the server's errors use.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFormDraft {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
    pub cooking_time: String,
    pub servings: String,
    pub image_url: String,
}

impl RecipeFormDraft {
    pub fn from_details(details: &RecipeDetails) -> Self {
        Self {
            name: details.name.clone(),
            description: details.description.clone(),
            ingredients: details.ingredients.clone(),
            directions: details.directions.clone(),
            cooking_time: details.cooking_time.to_string(),
            servings: details.servings.to_string(),
            image_url: details.image_url.clone(),
        }
    }

    pub fn into_payload(self) -> Result<RecipePayload, Vec<String>> {
        let (cooking_time, servings) =
            parse_counts(&self.cooking_time, &self.servings)?;
        Ok(RecipePayload {
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            directions: self.directions,
            cooking_time,
            servings,
            image_url: self.image_url,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemixFormDraft {
    pub name: String,
    pub description: String,
    pub purpose: String,
    pub ingredients: String,
    pub directions: String,
    pub cooking_time: String,
    pub servings: String,
    pub image_url: String,
}

impl RemixFormDraft {
    /// A new remix starts prefilled from the original recipe, with a blank
    /// purpose for the remixer to fill in.
    pub fn from_original_recipe(details: &RecipeDetails) -> Self {
        Self {
            name: details.name.clone(),
            description: details.description.clone(),
            purpose: String::new(),
            ingredients: details.ingredients.clone(),
            directions: details.directions.clone(),
            cooking_time: details.cooking_time.to_string(),
            servings: details.servings.to_string(),
            image_url: details.image_url.clone(),
        }
    }

    pub fn from_details(details: &RemixDetails) -> Self {
        Self {
            name: details.name.clone(),
            description: details.description.clone(),
            purpose: details.purpose.clone(),
            ingredients: details.ingredients.clone(),
            directions: details.directions.clone(),
            cooking_time: details.cooking_time.to_string(),
            servings: details.servings.to_string(),
            image_url: details.image_url.clone(),
        }
    }

    pub fn into_payload(self, original_recipe_id: i64) -> Result<RemixPayload, Vec<String>> {
        let (cooking_time, servings) =
            parse_counts(&self.cooking_time, &self.servings)?;
        Ok(RemixPayload {
            name: self.name,
            description: self.description,
            purpose: self.purpose,
            ingredients: self.ingredients,
            directions: self.directions,
            cooking_time,
            servings,
            image_url: self.image_url,
            original_recipe_id,
        })
    }
}

fn parse_counts(cooking_time: &str, servings: &str) -> Result<(i64, i64), Vec<String>> {
    let mut errors = Vec::new();
    let cooking_time = parse_count("Cooking time", cooking_time, &mut errors);
    let servings = parse_count("Servings", servings, &mut errors);
    if errors.is_empty() {
        Ok((cooking_time, servings))
    } else {
        Err(errors)
    }
}

fn parse_count(label: &str, value: &str, errors: &mut Vec<String>) -> i64 {
    let value = value.trim();
    if value.is_empty() {
        return 0;
    }
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => n,
        _ => {
            errors.push(format!("{label} must be a non-negative whole number."));
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup_draft() -> RecipeFormDraft {
        RecipeFormDraft {
            name: "Soup".to_string(),
            description: "A simple soup".to_string(),
            ingredients: "water, salt".to_string(),
            directions: "Boil.".to_string(),
            cooking_time: "10".to_string(),
            servings: "4".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn draft_coerces_counts_to_numbers() {
        let payload = soup_draft().into_payload().unwrap();
        assert_eq!(payload.cooking_time, 10);
        assert_eq!(payload.servings, 4);

        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["cookingTime"].is_i64());
        assert!(body["servings"].is_i64());
        assert_eq!(body["cookingTime"], 10);
    }

    #[test]
    fn blank_counts_coerce_to_zero() {
        let mut draft = soup_draft();
        draft.cooking_time = String::new();
        draft.servings = "  ".to_string();
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.cooking_time, 0);
        assert_eq!(payload.servings, 0);
    }

    #[test]
    fn junk_counts_are_validation_errors() {
        let mut draft = soup_draft();
        draft.cooking_time = "ten".to_string();
        draft.servings = "-2".to_string();
        let errors = draft.into_payload().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Cooking time"));
        assert!(errors[1].contains("Servings"));
    }

    #[test]
    fn remix_payload_carries_original_recipe_id() {
        let draft = RemixFormDraft {
            name: "Spicy Soup".to_string(),
            purpose: "More heat".to_string(),
            cooking_time: "15".to_string(),
            servings: "2".to_string(),
            ..Default::default()
        };
        let payload = draft.into_payload(42).unwrap();
        assert_eq!(payload.original_recipe_id, 42);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["originalRecipeId"], 42);
    }

    #[test]
    fn user_details_envelope_shape_deserializes() {
        let raw = r#"{
            "username": "testuser",
            "email": "test@example.com",
            "recipes": [
                {"id": 3, "name": "Chili", "description": "Hot", "imageUrl": "", "createdAt": "2024-01-02"}
            ],
            "remixes": [],
            "recipeReview": {"recipeId": 3, "recipeName": "Chili", "title": "Great", "content": "Loved it"},
            "favoriteRecipeIds": [1, 3],
            "favoriteRemixIds": []
        }"#;
        let user: CurrentUserInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(user.username, "testuser");
        assert_eq!(user.recipes.len(), 1);
        assert_eq!(user.favorite_recipe_ids, vec![1, 3]);
        assert_eq!(user.recipe_review.unwrap().recipe_name, "Chili");
        assert!(user.remix_review.is_none());
    }
}
