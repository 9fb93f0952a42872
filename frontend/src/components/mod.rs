pub mod activity_form_modal;
pub mod alert_banner;
pub mod charts;
pub mod input_field;
pub mod navbar;
pub mod select_field;
pub mod stop_form_modal;
pub mod trip_card;
