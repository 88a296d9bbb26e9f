pub mod icons;
pub mod layout;
pub mod overview_cards;
pub mod stats_card;
pub mod ui;
