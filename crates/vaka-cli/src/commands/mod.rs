pub mod create;
pub mod delete;
pub mod demo;
pub mod dispatch;
pub mod export;
pub mod get;
pub mod list;
pub mod menu;
pub mod note;
pub mod printers;
pub mod schema;
pub mod search;
pub mod shared;
pub mod stats;
pub mod status;
pub mod update;
