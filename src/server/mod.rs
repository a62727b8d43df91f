//! Connection dispatch: accepts sockets and hands each one to its own task.

pub mod listener;
