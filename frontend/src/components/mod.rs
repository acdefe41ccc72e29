pub mod balance_card;
pub mod header;
pub mod income_modal;
