pub mod callbacks;
pub mod connection;
pub mod invoker;
pub mod link;
pub mod readiness;
