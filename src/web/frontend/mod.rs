pub(crate) mod filters;
pub(crate) mod frontend_controller;
pub(crate) mod server;
