//! Data model types for sort declarations and sort state.

mod attribute;
mod criteria;
mod direction;
mod params;

pub use attribute::AttributeDefinition;
pub use attribute::VirtualAttribute;
pub use criteria::Criteria;
pub use direction::Direction;
pub use direction::DirectionMap;
pub use params::parse_query;
pub use params::Params;
