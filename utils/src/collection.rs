//! Empty-collection tests for optional lists.

/// True when the list is absent or has no elements.
#[must_use]
pub fn is_empty<T>(list: Option<&[T]>) -> bool {
    list.is_none_or(<[T]>::is_empty)
}

/// Method form of [`is_empty`] for optional list references.
pub trait OptionSliceExt {
    fn is_none_or_empty(&self) -> bool;
}

impl<T> OptionSliceExt for Option<&[T]> {
    fn is_none_or_empty(&self) -> bool {
        is_empty(*self)
    }
}

impl<T> OptionSliceExt for Option<&Vec<T>> {
    fn is_none_or_empty(&self) -> bool {
        is_empty(self.map(Vec::as_slice))
    }
}
