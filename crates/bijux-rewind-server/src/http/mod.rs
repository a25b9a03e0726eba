pub(crate) mod command_endpoints;
pub(crate) mod extractors;
pub(crate) mod memento_endpoints;
pub(crate) mod request_tracing;
pub(crate) mod response_contract;
pub(crate) mod service_endpoints;
