use crate::coerce;
use crate::value::Value;

/// A type a dynamic [`Value`] can be coerced into.
///
/// Every implementation delegates to one rule of the coercion engine in
/// [`crate::coerce`].
pub trait Primitive: Sized {
    /// The name of the type as it shows up in error messages.
    const NAME: &'static str;

    /// Attempts to convert the value, returning `None` on failure.
    fn coerce(value: &Value) -> Option<Self>;
}

impl Primitive for bool {
    const NAME: &'static str = "bool";

    fn coerce(value: &Value) -> Option<bool> {
        coerce::as_bool(value)
    }
}

macro_rules! impl_primitive_int {
    ($rule:ident: $($ty:ident),*) => {
        $(
            impl Primitive for $ty {
                const NAME: &'static str = stringify!($ty);

                fn coerce(value: &Value) -> Option<$ty> {
                    coerce::$rule(value)
                }
            }
        )*
    };
}

impl_primitive_int!(as_signed: i8, i16, i32, i64, isize);
impl_primitive_int!(as_unsigned: u8, u16, u32, u64, usize);

impl Primitive for f32 {
    const NAME: &'static str = "f32";

    fn coerce(value: &Value) -> Option<f32> {
        coerce::as_f32(value)
    }
}

impl Primitive for f64 {
    const NAME: &'static str = "f64";

    fn coerce(value: &Value) -> Option<f64> {
        coerce::as_f64(value)
    }
}

impl Primitive for String {
    const NAME: &'static str = "string";

    fn coerce(value: &Value) -> Option<String> {
        coerce::as_str(value).map(ToOwned::to_owned)
    }
}
