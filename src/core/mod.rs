pub mod bridge;
pub mod card_view;
pub mod paths;
pub mod recommend;
pub mod row_scroll;
