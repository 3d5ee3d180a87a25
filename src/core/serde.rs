/*!
 * Serde Helper Functions
 * Skip-serializing predicates shared by persisted records
 */

/// Skip serializing if value is default
#[inline]
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Skip serializing if Option is None
#[inline]
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if bool is false
#[inline]
pub fn is_false(value: &bool) -> bool {
    !*value
}
