pub mod common;
pub mod icon;
pub mod menu;
pub mod pages;
pub mod portfolio;

pub use icon::{Icon, icons};
pub use menu::{EntitiesMenu, Header};
pub use pages::NotFoundPage;
pub use portfolio::{
    PortfolioDeleteDialog, PortfolioDetail, PortfolioList, PortfolioUpdate,
    provide_portfolio_context,
};
