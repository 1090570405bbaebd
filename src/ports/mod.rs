/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// status core depends on. The CLI drives the use cases directly.
pub mod outbound;
