pub mod books;
pub mod cli;
pub mod core;
pub mod ui;
