//! Portfolio entity pages: list, detail, create/edit and delete

mod context;
mod delete_dialog;
mod detail;
mod list;
mod update;

pub use context::{PortfolioClient, PortfolioContext, provide_portfolio_context, use_portfolio_context};
pub use delete_dialog::PortfolioDeleteDialog;
pub use detail::PortfolioDetail;
pub use list::PortfolioList;
pub use update::PortfolioUpdate;
