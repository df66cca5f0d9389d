pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod messages;
pub mod session;
pub mod text;

#[cfg(test)]
pub mod test_support;
