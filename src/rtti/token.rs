//! Static identity metadata.
//!
//! Every participating type owns exactly one `static` [`TypeInfo`]. Its
//! address is the type's identity: two tokens are equal exactly when they
//! point at the same static, which holds for the whole life of the process.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ptr;

/// Identity record of one type: a readable name and its direct bases.
///
/// Bases are stored as function pointers so that statics can refer to each
/// other regardless of declaration order.
pub struct TypeInfo {
    name: &'static str,
    bases: &'static [fn() -> &'static TypeInfo],
}

impl TypeInfo {
    pub const fn new(name: &'static str, bases: &'static [fn() -> &'static TypeInfo]) -> Self {
        TypeInfo { name, bases }
    }

    #[inline]
    pub fn name(&'static self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn token(&'static self) -> TypeToken {
        TypeToken(self)
    }

    /// Direct bases, in declaration order.
    pub fn bases(&'static self) -> impl Iterator<Item = TypeToken> + 'static {
        self.bases.iter().map(|base| TypeToken(base()))
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("bases", &self.bases.len())
            .finish()
    }
}

/// Process-unique identity of a type, compared and hashed by address.
#[derive(Clone, Copy)]
pub struct TypeToken(&'static TypeInfo);

impl TypeToken {
    #[inline]
    pub fn info(self) -> &'static TypeInfo {
        self.0
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.0.name
    }

    /// Whether `self` is `ancestor` or reaches it through its bases.
    ///
    /// Walks the bases depth first and stops at the first match. A type
    /// cannot embed itself, so the graph has no cycles.
    pub fn derives_from(self, ancestor: TypeToken) -> bool {
        self == ancestor || self.0.bases().any(|base| base.derives_from(ancestor))
    }
}

impl PartialEq for TypeToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state)
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeToken")
            .field(&self.0.name)
            .field(&(self.0 as *const TypeInfo))
            .finish()
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

/// Access to a type's static identity without an instance.
pub trait StaticType {
    fn type_info() -> &'static TypeInfo;

    #[inline]
    fn type_token() -> TypeToken {
        TypeToken(Self::type_info())
    }
}
