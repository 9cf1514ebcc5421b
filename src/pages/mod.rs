//! Top-level screens, one per route.

mod catalog_page;
mod my_list;
mod payment;
mod watch;

pub use catalog_page::CatalogPage;
pub use my_list::MyListPage;
pub use payment::PaymentPage;
pub use watch::WatchPage;
