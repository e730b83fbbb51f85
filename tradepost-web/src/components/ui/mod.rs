pub mod basket_panel;
pub mod checkout_dialog;
pub mod confirmation;
pub mod product_grid;
