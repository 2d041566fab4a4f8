//! Strategy bodies called by generated dispatchers.
//!
//! Each function implements one comparison strategy. Generated code picks
//! the function when the type is analyzed; nothing here inspects types at
//! runtime.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

use crate::collation;

/// Floats closer than this compare equal.
pub const FLOAT_EPSILON: f64 = 1e-7;

/// Text that can be handed to a [`Collator`](crate::collation::Collator).
pub trait TextValue {
    fn as_text(&self) -> &str;
}

impl TextValue for str {
    fn as_text(&self) -> &str {
        self
    }
}

impl TextValue for String {
    fn as_text(&self) -> &str {
        self
    }
}

impl TextValue for Cow<'_, str> {
    fn as_text(&self) -> &str {
        self
    }
}

macro_rules! forward_text_value {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: TextValue + ?Sized> TextValue for $wrapper {
                fn as_text(&self) -> &str {
                    (**self).as_text()
                }
            }
        )*
    };
}

forward_text_value!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// Integer ordering.
#[inline]
pub fn integer<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Float ordering with [`FLOAT_EPSILON`] tolerance.
///
/// Values within the tolerance are equal; otherwise the sign of `a - b`
/// decides. When the difference is NaN (a NaN operand, or two infinities of
/// the same sign) [`f64::total_cmp`] decides.
#[inline]
pub fn float<F: Copy + Into<f64>>(a: &F, b: &F) -> Ordering {
    let (a, b): (f64, f64) = ((*a).into(), (*b).into());
    let diff = a - b;
    if diff.abs() < FLOAT_EPSILON {
        Ordering::Equal
    } else if diff < 0.0 {
        Ordering::Less
    } else if diff > 0.0 {
        Ordering::Greater
    } else {
        a.total_cmp(&b)
    }
}

/// Total ordering through `Ord`.
#[inline]
pub fn ordered<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Ordering through `<` and `>`; incomparable values are equal.
#[inline]
pub fn relational<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Text ordering under the collator active on this thread right now.
#[inline]
pub fn text<S: TextValue + ?Sized>(a: &S, b: &S) -> Ordering {
    collation::compare(a.as_text(), b.as_text())
}

/// Lift an ordering over `T` to optional values. `None` orders first.
#[inline]
pub fn nullable<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    compare: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b),
    }
}

#[cfg(test)]
mod tests;
