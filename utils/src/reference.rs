/// Returns `actual` when present, otherwise `fallback`.
#[must_use]
pub fn null_safe<T>(actual: Option<T>, fallback: T) -> T {
    actual.unwrap_or(fallback)
}
