//! Fixed-size, 1-indexed pages over ordered collections.

/// Number of questions shown per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the `page`-th slice of `items`. Pages start at 1; page 0 and
/// pages past the end of the data yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}
