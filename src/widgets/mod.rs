pub mod columns;
pub mod controls;
pub mod filter_select;
pub mod interactions;
pub mod sample;
pub mod tabs;
