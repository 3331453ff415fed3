//! Village bus board server.
//!
//! A web application showing the next buses through a rural village:
//! pick where you are along the routes and see when each bus reaches you.

pub mod board;
pub mod domain;
pub mod timetable;
pub mod web;
