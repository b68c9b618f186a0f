//! Errors for engine APIs that address entities directly.

use thiserror::Error;

use starfall_core::types::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("entity {0:?} does not exist")]
    UnknownEntity(EntityId),

    #[error("entity {entity:?} has no {component} component")]
    MissingComponent {
        entity: EntityId,
        component: &'static str,
    },
}
