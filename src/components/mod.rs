pub mod alert;
pub mod favorite_button;
pub mod navbar;
pub mod protected_route;
pub mod recipe_card;
pub mod recipe_list;
pub mod remix_card;
pub mod remix_list;
pub mod review_card;
pub mod review_list;
pub mod search_bar;
