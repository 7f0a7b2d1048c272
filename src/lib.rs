//! Football tournament API: teams, players, tournaments and matches over a
//! SQLite document store, plus a thin frontend proxy.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod proxy;
pub mod routes;
pub mod startup;
