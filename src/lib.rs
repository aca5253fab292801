//! A line-oriented command interpreter: tokenizes a line, then runs it as
//! built-ins or forked children with `<`/`>` redirection, two-stage pipes and
//! `;` sequencing.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod history;
pub mod io;
pub mod lexer;
pub mod repl;
pub mod session;
