pub mod button;
pub mod input;
pub mod modal;
pub mod ui;
