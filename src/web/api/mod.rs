pub(crate) mod rsvp_controller;
pub(crate) mod server;
