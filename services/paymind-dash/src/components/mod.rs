// services/paymind-dash/src/components/mod.rs
//
// PayMind Dashboard - UI Components
//

mod card;
mod chat_box;
mod navbar;
mod sidebar;
mod stat_card;
mod table;

pub use card::Card;
pub use chat_box::ChatBox;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
pub use stat_card::StatTile;
pub use table::{StatusBadge, TransactionTable};
