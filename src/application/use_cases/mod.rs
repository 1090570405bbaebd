/// Use cases module containing application business logic orchestration
mod aggregate_status;
mod score_components;

pub use aggregate_status::AggregateStatusUseCase;
pub use score_components::ScoreComponentsUseCase;
