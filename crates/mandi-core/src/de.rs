//! Field deserializers for CMS files, which write cleared fields as `null`.

use serde::{Deserialize, Deserializer};

/// Read `null` the same way as a missing key: the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Only an explicit `false` deactivates a product.
pub(crate) fn null_as_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}
