// Code generated by rawgen. DO NOT EDIT.

//! Types of the `enums` package.

pub mod dashboard_cursor_sync;

pub use dashboard_cursor_sync::DashboardCursorSync;
