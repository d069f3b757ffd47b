//! Unit and behavioural tests for `unseen_host`.

mod behaviour;
mod support;
