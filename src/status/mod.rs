//! Status aggregation core: domain records, the services that resolve,
//! reduce and score them, and the tracker-namespace policy.

pub mod domain;
pub mod policies;
pub mod services;
