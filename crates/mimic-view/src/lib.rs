pub mod element;
pub mod health_bar;
