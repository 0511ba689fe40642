// Row structs for the record store plus the ranking wire types.
// Everything here is plain data: FromRow for sqlx, Serialize for the API.

pub mod job;
pub mod resume;
pub mod run;
