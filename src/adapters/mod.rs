/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the integration with repository storage, the issue tracker,
/// the file system and the console.
pub mod outbound;
