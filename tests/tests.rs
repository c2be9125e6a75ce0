mod client;

#[cfg(feature = "server")]
mod controller;
