//! Boilerplate generator for profile groups.
//!
//! **`profile_group!`** declares a group struct together with its patch type:
//!
//! - the group struct, with `Default` built from per-field default expressions
//! - a `<Group>Patch` struct holding an `Option` per field
//! - `apply_to` (overwrite only the fields present in the patch), `is_empty`,
//!   `present_fields`, and a chainable setter per field
//!
//! Patch fields deserialize through [`deserialize_present`], so an explicit
//! JSON `null` on an optional field is a present key that clears it, while an
//! absent key leaves the field untouched.
//!
//! # Example
//!
//! ```ignore
//! profile_group! {
//!     /// Who the learner is.
//!     Identity / IdentityPatch {
//!         first_name: Option<String> = None,
//!         years_studying: u8 = 0,
//!     }
//! }
//! ```

use serde::{Deserialize, Deserializer};

/// Marks a key as present whenever it appears in the input, even as `null`.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

macro_rules! profile_group {
    (
        $(#[$meta:meta])*
        $name:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        #[doc = concat!("Partial update for [`", stringify!($name), "`]; `Some` fields overwrite.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $patch {
            $(
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::domain::profile::macros::deserialize_present"
                )]
                pub $field: Option<$ty>,
            )*
        }

        impl $patch {
            /// Returns true when no field is present.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Names of the fields this patch overwrites.
            pub fn present_fields(&self) -> Vec<&'static str> {
                let mut fields = Vec::new();
                $(
                    if self.$field.is_some() {
                        fields.push(stringify!($field));
                    }
                )*
                fields
            }

            /// Overwrites the fields present in this patch, leaving the rest untouched.
            pub fn apply_to(&self, target: &mut $name) {
                $(
                    if let Some(value) = &self.$field {
                        target.$field = value.clone();
                    }
                )*
            }

            $(
                #[doc = concat!("Sets `", stringify!($field), "`.")]
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*
        }
    };
}

pub(crate) use profile_group;
