//! Helper macro for generating domain port error enums.

/// Generate a `thiserror` enum plus snake_case convenience constructors
/// whose `String` fields accept anything `Into<String>`.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $field:ident : $ty:ty } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $field : $ty } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $field : $ty } )?);
            )*
        }
    };

    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $field:ident : $ty:ty }) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($field: impl Into<$ty>) -> Self {
                Self::$variant { $field: $field.into() }
            }
        }
    };
}

pub(crate) use define_port_error;
