mod client;

pub use client::AreaServiceClient;
