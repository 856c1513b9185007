pub mod full_lists;
pub mod home;
pub mod login;
pub mod profile;
pub mod recipe_detail;
pub mod recipe_form;
pub mod recipe_search;
pub mod remix_detail;
pub mod remix_form;
pub mod review_form;
pub mod signup;
pub mod user_lists;
