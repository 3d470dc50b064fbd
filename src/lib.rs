//! taskdeck: a terminal client for a task/project-management backend.
//!
//! The interesting machinery lives in [`sort`]: the table sorting engine
//! shared by every list view. The rest is the client around it: typed
//! models and a REST client ([`api`]), config and session persistence
//! ([`config`]), sample collections ([`data`]), the planning-chat
//! responder ([`planner`]), and the ratatui screens ([`ui`]).

pub mod api;
pub mod config;
pub mod data;
pub mod planner;
pub mod sort;
pub mod ui;
