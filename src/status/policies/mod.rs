mod tracker_namespace;

pub use tracker_namespace::TrackerNamespace;
