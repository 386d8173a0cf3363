pub mod board;
pub mod core;
pub mod storage;
pub mod web;
