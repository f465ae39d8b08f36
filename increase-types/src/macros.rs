/// Declare a string-valued API enumeration.
///
/// Every generated enum:
/// - serializes each variant as its wire literal,
/// - gains an `Unknown` variant that absorbs values this version does not know,
/// - exposes `as_str()` and a `Display` impl with the wire value.
///
/// `Unknown` keeps the enum `Copy` and does not retain the unrecognized
/// literal: re-serializing it writes `"unknown"`, not the value the server
/// sent. Callers that must echo a resource back verbatim should keep the raw
/// JSON alongside the decoded value.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// A value not recognized by this version of the client.
            ///
            /// The original wire value is discarded and encodes as `"unknown"`.
            #[serde(rename = "unknown", other)]
            Unknown,
        }

        impl $name {
            /// Wire representation of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown => "unknown",
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Implement [`CursorParams`](crate::CursorParams) for list parameter structs
/// that carry `cursor: Option<String>` and `limit: Option<u32>` fields.
#[macro_export]
macro_rules! impl_cursor_params {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::CursorParams for $ty {
                fn cursor(&self) -> Option<&str> {
                    self.cursor.as_deref()
                }

                fn set_cursor(&mut self, cursor: Option<String>) {
                    self.cursor = cursor;
                }

                fn limit(&self) -> Option<u32> {
                    self.limit
                }
            }
        )+
    };
}

/// Implement [`QueryValue`] for enums generated by `string_enum!`.
#[macro_export]
macro_rules! impl_query_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::query::QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.as_str().to_string()
                }
            }
        )+
    };
}
