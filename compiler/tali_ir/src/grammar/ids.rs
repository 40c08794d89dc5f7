//! Typed node indices.
//!
//! Every nonterminal table is indexed by its own `u32` newtype, so a
//! reference to one kind of node cannot be confused with a reference to
//! another. Indices are stable for the lifetime of the [`Grammar`]
//! (tables are append-only).
//!
//! [`Grammar`]: crate::Grammar

/// Define a `u32` index newtype in the standard shape: `INVALID`
/// sentinel, `new`/`index`/`raw` accessors, compact `Debug`.
macro_rules! define_node_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Invalid reference (sentinel value).
            pub const INVALID: $name = $name(u32::MAX);

            /// Create a reference from a raw index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// The index into the owning table.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// The raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check that this is not the sentinel.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

pub(crate) use define_node_id;

define_node_id! {
    /// Reference to a `Program` node.
    ProgramId
}
define_node_id! {
    /// Reference to a `Block` node.
    BlockId
}
define_node_id! {
    /// Reference to a `ConstSection` node.
    ConstSectionId
}
define_node_id! {
    /// Reference to a `ConstDecl` node.
    ConstDeclId
}
define_node_id! {
    /// Reference to a `TypeSection` node.
    TypeSectionId
}
define_node_id! {
    /// Reference to a `TypeDecl` node.
    TypeDeclId
}
define_node_id! {
    /// Reference to a `VarSection` node.
    VarSectionId
}
define_node_id! {
    /// Reference to a `VarDecl` node.
    VarDeclId
}
define_node_id! {
    /// Reference to a `TypeExpr` node.
    TypeExprId
}
define_node_id! {
    /// Reference to a `Routine` node.
    RoutineId
}
define_node_id! {
    /// Reference to a `ProcDecl` node.
    ProcDeclId
}
define_node_id! {
    /// Reference to a `FuncDecl` node.
    FuncDeclId
}
define_node_id! {
    /// Reference to a `ParamList` node.
    ParamListId
}
define_node_id! {
    /// Reference to a `ParamGroup` node.
    ParamGroupId
}
define_node_id! {
    /// Reference to a `Statement` node.
    StatementId
}
define_node_id! {
    /// Reference to an `Assign` node.
    AssignId
}
define_node_id! {
    /// Reference to a `Compound` node.
    CompoundId
}
define_node_id! {
    /// Reference to an `If` node.
    IfId
}
define_node_id! {
    /// Reference to a `While` node.
    WhileId
}
define_node_id! {
    /// Reference to a `For` node.
    ForId
}
define_node_id! {
    /// Reference to a `Call` node.
    CallId
}
define_node_id! {
    /// Reference to an `Lvalue` node.
    LvalueId
}
define_node_id! {
    /// Reference to an `Accessor` node.
    AccessorId
}
define_node_id! {
    /// Reference to an `Expr` node.
    ExprId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ExprId::new(42);
        assert!(id.is_valid());
        assert_eq!(id.index(), 42);
        assert_eq!(id.raw(), 42);
    }

    #[test]
    fn test_invalid_sentinel() {
        assert!(!StatementId::INVALID.is_valid());
        assert!(!StatementId::default().is_valid());
        assert_eq!(format!("{:?}", StatementId::INVALID), "StatementId::INVALID");
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", BlockId::new(3)), "BlockId(3)");
    }

    #[test]
    fn test_id_size() {
        assert_eq!(std::mem::size_of::<ExprId>(), 4);
        assert_eq!(std::mem::size_of::<crate::LexemeId>(), 4);
    }
}
