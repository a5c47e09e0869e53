//! Model to entity mappers
//!
//! Conversions between database models and domain entities (skycast-core).
//! `From<Model> for Entity` converts database rows to domain objects; the
//! password hash stays in the model and never reaches the entity.

mod refresh_token;
mod user;
