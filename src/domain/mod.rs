//! Named domains: their configuration, computation and resolved form.

mod compute;
mod registry;
mod resolved;

pub use compute::compute_domains;
pub use registry::{
    ARGUMENT_DOMAIN, DomainConfig, DomainMap, VALUE_DOMAIN, add_domain, default_domains,
};
pub use resolved::{DomainExtent, ResolvedDomain, ResolvedDomains};
