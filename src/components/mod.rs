//! UI Components
//!
//! Reusable Leptos components shared by the public site and the admin console.

mod button;
mod delete_confirm_button;
mod empty_state;
mod filter_chips;
mod footer;
mod navbar;
mod search_input;
mod stat_card;
mod whatsapp_float;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use delete_confirm_button::DeleteConfirmButton;
pub use empty_state::EmptyState;
pub use filter_chips::FilterChips;
pub use footer::Footer;
pub use navbar::Navbar;
pub use search_input::{SearchInput, SelectInput};
pub use stat_card::{CountCard, MetricCard, ShareBar};
pub use whatsapp_float::WhatsAppFloat;
