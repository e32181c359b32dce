//! Line-oriented interactive TCP client library.
//!
//! Owns one TCP connection, reads commands line-by-line from the
//! terminal, forwards each non-empty command as a newline-terminated
//! UTF-8 line, and displays whatever bytes come back, looping until an
//! "exit" command, end of input, a clean peer close, or an interrupt.

pub mod client;
