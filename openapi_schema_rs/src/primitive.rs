//! Implementations of `Describe` for primitives and types provided by the standard library.

use crate::describe::{Describe, IntegerWidth, Reflector};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

/// Generates `Describe` impls for non-generic types that map onto a single
/// reflector call.
macro_rules! impl_describe {
    ( $( $ty:ty => $reflect:ident $( ( $arg:expr ) )?, )* ) => {
        $(
            impl Describe for $ty {
                fn describe<R: Reflector>(reflector: R) -> R::Output {
                    reflector.$reflect($( $arg )?)
                }
            }
        )*
    };
}

/// Generates `Describe` impls for single-parameter containers, forwarding the
/// parameter to the given reflector call.
macro_rules! impl_describe_generic {
    ( $( $ty:ident < T $( : ?$sized:ident )? > => $reflect:ident, )* ) => {
        $(
            impl<T: Describe $( + ?$sized )?> Describe for $ty<T> {
                fn describe<R: Reflector>(reflector: R) -> R::Output {
                    reflector.$reflect::<T>()
                }
            }
        )*
    };
}

/// Generates unsupported `Describe` impls for function pointers of each arity.
macro_rules! impl_describe_fn {
    ( $( ( $( $arg:ident ),* ) ),* ) => {
        $(
            impl<Ret, $( $arg ),*> Describe for fn($( $arg ),*) -> Ret {
                fn describe<R: Reflector>(reflector: R) -> R::Output {
                    reflector.reflect_unsupported(std::any::type_name::<Self>())
                }
            }
        )*
    };
}

impl_describe! {
    String => reflect_string,
    str => reflect_string,
    char => reflect_string,
    bool => reflect_bool,
    i8 => reflect_integer(IntegerWidth::Unsized),
    i16 => reflect_integer(IntegerWidth::Unsized),
    isize => reflect_integer(IntegerWidth::Unsized),
    i128 => reflect_integer(IntegerWidth::Unsized),
    u8 => reflect_integer(IntegerWidth::Unsized),
    u16 => reflect_integer(IntegerWidth::Unsized),
    usize => reflect_integer(IntegerWidth::Unsized),
    u64 => reflect_integer(IntegerWidth::Unsized),
    u128 => reflect_integer(IntegerWidth::Unsized),
    i32 => reflect_integer(IntegerWidth::Bits32),
    i64 => reflect_integer(IntegerWidth::Bits64),
    // Every u32 fits the signed 64-bit format.
    u32 => reflect_integer(IntegerWidth::Bits64),
    f32 => reflect_float,
    f64 => reflect_float,
}

impl_describe_generic! {
    Box<T: ?Sized> => reflect_pointer,
    Rc<T: ?Sized> => reflect_pointer,
    Arc<T: ?Sized> => reflect_pointer,
    Option<T> => reflect_pointer,
    Vec<T> => reflect_seq,
    VecDeque<T> => reflect_seq,
    LinkedList<T> => reflect_seq,
    BTreeSet<T> => reflect_seq,
    BinaryHeap<T> => reflect_seq,
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_pointer::<T>()
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_pointer::<T>()
    }
}

impl<B: Describe + ToOwned + ?Sized> Describe for Cow<'_, B> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_pointer::<B>()
    }
}

impl<T: Describe> Describe for [T] {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_seq::<T>()
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_seq::<T>()
    }
}

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_seq::<T>()
    }
}

impl<K, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_map::<V>()
    }
}

impl<K, V: Describe> Describe for BTreeMap<K, V> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_map::<V>()
    }
}

// Kinds without a documentable shape. They are described so that structs
// holding them still derive, and the reflector decides what to do with them.

impl Describe for () {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported("()")
    }
}

/// Any JSON value; the shape is only known at runtime.
impl Describe for serde_json::Value {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported(std::any::type_name::<Self>())
    }
}

impl_describe_fn!((), (A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E));

impl<T: ?Sized> Describe for PhantomData<T> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported(std::any::type_name::<Self>())
    }
}

impl<T: ?Sized> Describe for *const T {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported(std::any::type_name::<Self>())
    }
}

impl<T: ?Sized> Describe for *mut T {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported(std::any::type_name::<Self>())
    }
}

impl<T> Describe for Sender<T> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported(std::any::type_name::<Self>())
    }
}

impl<T> Describe for SyncSender<T> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported(std::any::type_name::<Self>())
    }
}

impl<T> Describe for Receiver<T> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_unsupported(std::any::type_name::<Self>())
    }
}

// chrono timestamps serialize as RFC 3339 strings, not as their fields.

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Describe for chrono::DateTime<Tz> {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_date_time()
    }
}

/// Serialized without an offset, so it is a string but not a `date-time`.
#[cfg(feature = "chrono")]
impl Describe for chrono::NaiveDateTime {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_string()
    }
}

#[cfg(feature = "uuid")]
impl Describe for uuid::Uuid {
    fn describe<R: Reflector>(reflector: R) -> R::Output {
        reflector.reflect_string()
    }
}
