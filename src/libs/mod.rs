//! Library modules of coursework.
//!
//! The task store is built from [`task`], [`compare`], [`avl`], [`index`],
//! [`worklist`] and [`report`]. The remaining modules handle persistence,
//! configuration and presentation for the command-line front end.

pub mod avl;
pub mod compare;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod index;
pub mod messages;
pub mod report;
pub mod task;
pub mod task_file;
pub mod view;
pub mod worklist;
