// banter-core-client/banter-utils
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[macro_export]
macro_rules! id_u64 {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Hash,
            Copy,
            Clone,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(u64);

        impl $t {
            pub const fn new(value: u64) -> $t {
                $t(value)
            }

            #[allow(dead_code)]
            pub fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> $t {
                $t(value)
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.parse()?))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
