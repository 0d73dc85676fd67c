pub mod api;
pub mod board;
pub mod columns;
pub mod config;
pub mod dialog;
pub mod session;
pub mod view;
