//! Messaging - parsing, dispatching and reply formatting

pub mod parser;
pub mod dispatcher;
pub mod formatter;

pub use parser::MessageParser;
pub use dispatcher::MessageDispatcher;
