use crate::status::domain::Coordinate;

/// StatusRequest - Internal request DTO for the aggregation use case
#[derive(Debug, Clone)]
pub struct StatusRequest {
    /// The bill-of-materials component whose managed dependencies form the
    /// component collection
    pub root: Coordinate,
}

impl StatusRequest {
    pub fn new(root: Coordinate) -> Self {
        Self { root }
    }
}
