//! Data transfer objects exchanged with the widget, the relay and the chat API.

pub mod calculator;
pub mod relay;
pub mod telegram;
