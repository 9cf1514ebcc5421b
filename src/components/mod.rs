//! UI components shared by the pages.

mod detail_modal;
mod genre_dropdown;
mod hero;
mod modal;
mod movie_card;
mod movie_row;
mod nav_bar;
mod player_shell;
mod premium_overlay;

pub use detail_modal::DetailModal;
pub use genre_dropdown::GenreDropdown;
pub use hero::Hero;
pub use modal::{Modal, ModalSize};
pub use movie_card::MovieCard;
pub use movie_row::MovieRow;
pub use nav_bar::NavBar;
pub use player_shell::PlayerShell;
pub use premium_overlay::PremiumOverlay;
