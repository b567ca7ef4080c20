//! Layer 2: type identity without language RTTI.
//!
//! Two registry styles feed the same [`Classof`] contract:
//!
//! ```text
//! +-----------------------------------------------------------------+
//! | Tag-enum hierarchies (kind)                                     |
//! |  base trait exposes a discriminant, leaves compare equal,       |
//! |  intermediate groups test a contiguous range                    |
//! +-----------------------------------------------------------------+
//! | Extensible hierarchies (token, object)                          |
//! |  one static TypeInfo per type, bases listed as static links,    |
//! |  is_a walks the bases DAG, #[derive(Rtti)] fills it in          |
//! +-----------------------------------------------------------------+
//!                 |
//!                 v
//!        Classof<Base>::classof(&Base) -> bool
//!        Downcast<Base>: reinterpret or project to the sub-object
//! ```

mod classof;
mod kind;
mod object;
mod token;

pub use classof::{Classof, Downcast};
pub use kind::Tagged;
pub use object::{project_mut, project_ref, Object, ObjectExt};
pub use token::{StaticType, TypeInfo, TypeToken};
