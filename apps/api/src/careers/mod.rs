// Career browsing: search, industry facets, detail lookup, similar careers.

pub mod browse;
pub mod handlers;
