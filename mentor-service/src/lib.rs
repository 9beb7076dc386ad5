//! Mentor service: forwards user messages to a chat completion API behind a
//! fixed execution-mentor persona and logs every exchange.

pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;
