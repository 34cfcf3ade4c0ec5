mod encode;
mod error;
mod scheme;

pub use encode::{
    canonicalize_hash, canonicalize_hostname, canonicalize_ipv6_hostname,
    canonicalize_opaque_pathname, canonicalize_password, canonicalize_port,
    canonicalize_protocol, canonicalize_search, canonicalize_special_pathname,
    canonicalize_username, check_ipv6_brackets, check_ipv6_literal, identity,
    treat_as_ipv6_hostname,
};
pub use error::{CanonicalError, CanonicalResult};
pub use scheme::{SPECIAL_SCHEMES, default_port, is_special_scheme};
