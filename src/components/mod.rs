pub mod error_page;
pub mod layout;
pub mod listing_form;
pub mod listing_show;
pub mod listings_index;
pub mod review_form;
pub mod reviews_list;
