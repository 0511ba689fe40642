// Resume library maintenance: metadata listing and duplicate pruning.
// Upload and delete-with-blob flows live outside this service.

pub mod handlers;
pub mod prune;
