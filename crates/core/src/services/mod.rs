pub mod backends;
pub mod corpus;
pub mod export;
pub mod introspect;
pub mod search;
