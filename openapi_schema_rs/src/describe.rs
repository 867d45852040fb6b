//! The type-level description seam.
//!
//! A type reports which schema kind it is by calling exactly one method on
//! the [`Reflector`] it is handed. Composite kinds name their component types
//! as generic parameters instead of passing values, so a description never
//! depends on the data a value holds.

/// Width class of an integer type.
///
/// The widths name OpenAPI's signed `int32`/`int64` formats. An unsigned type
/// uses the narrowest signed format holding all its values, or `Unsized` if
/// none does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// 8-bit, 16-bit, 128-bit and pointer-sized integers, and `u64`.
    Unsized,
    Bits32,
    /// `i64` and `u32`.
    Bits64,
}

/// A type that can describe its own serialized shape.
///
/// Implemented for primitives and standard containers, derived for structs
/// with `#[derive(Describe)]`, and implementable by hand for custom types.
pub trait Describe {
    fn describe<R>(reflector: R) -> R::Output
    where
        R: Reflector;
}

/// Receives the description of a single type.
pub trait Reflector: Sized {
    type Output;
    type Struct: StructReflector<Output = Self::Output>;

    fn reflect_string(self) -> Self::Output;
    fn reflect_bool(self) -> Self::Output;
    fn reflect_integer(self, width: IntegerWidth) -> Self::Output;
    fn reflect_float(self) -> Self::Output;
    fn reflect_date_time(self) -> Self::Output;

    /// A reference, smart pointer or nullable value. Described as its pointee.
    fn reflect_pointer<T>(self) -> Self::Output
    where
        T: Describe + ?Sized;

    fn reflect_seq<T>(self) -> Self::Output
    where
        T: Describe;

    /// A map from any key type to values of type `V`.
    fn reflect_map<V>(self) -> Self::Output
    where
        V: Describe;

    fn reflect_struct(self, name: &'static str) -> Self::Struct;

    /// A kind with no documentable shape.
    fn reflect_unsupported(self, type_name: &'static str) -> Self::Output;
}

/// Receives the fields of a struct, in declaration order.
pub trait StructReflector {
    type Output;

    /// Describes the field serialized as `wire_name`. An empty name means the
    /// field is not serialized and is left out.
    fn field<T>(&mut self, wire_name: &str)
    where
        T: Describe + ?Sized;

    fn end(self) -> Self::Output;
}
