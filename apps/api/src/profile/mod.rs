// Assessment profile: the six answer groups and their prompt rendering.

pub mod formatter;
pub mod handlers;
pub mod models;
