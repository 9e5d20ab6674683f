mod card;
mod empty_state;
mod top_bar;

pub use card::Card;
pub use empty_state::EmptyState;
pub use top_bar::{IconButton, TopBar};
