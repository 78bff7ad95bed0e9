/// Defines an enum over vendor keyword tokens (`HTTP`, `ROUNDROBIN`, ...).
///
/// Every generated enum carries a `Custom(String)` variant so that tokens
/// outside the known set survive ingestion unchanged. Matching is exact and
/// case-sensitive, the same way the device writes its configuration dump.
#[macro_export]
macro_rules! define_vendor_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_token(&s))
            }
        }

        impl $enum_name {
            /// The vendor token this value was (or would be) written as.
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $token,
                    )*
                    Self::Custom(token) => token,
                }
            }

            /// Maps a token to a known variant, falling back to `Custom`.
            pub fn from_token(token: &str) -> Self {
                Self::known(token).unwrap_or_else(|| Self::Custom(token.to_string()))
            }

            pub fn known(token: &str) -> Option<Self> {
                match token {
                    $(
                        $token => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, Self::Custom(_))
            }

            const KNOWN: &'static [Self] = &[
                $(
                    Self::$variant,
                )*
            ];

            pub fn all_variants() -> &'static [Self] {
                Self::KNOWN
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
