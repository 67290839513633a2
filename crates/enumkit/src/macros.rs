//! Declaration macro for host enums.

/// Declare a host enum and implement [`EnumContract`](crate::EnumContract) for it.
///
/// Three shapes are accepted:
///
/// ```
/// use enumkit::{define_enum, EnumContract, Value};
///
/// define_enum! {
///     /// Order status as stored in the orders table.
///     pub enum Status: str {
///         Pending = "pending",
///         InProgress = "in_progress",
///         Completed = "completed" { description: "Work is finished" },
///     }
/// }
///
/// define_enum! {
///     pub enum Priority: i64 {
///         Low = 1,
///         High = 2,
///     }
/// }
///
/// define_enum! {
///     pub enum Suit {
///         Hearts,
///         Spades,
///     }
/// }
///
/// assert_eq!(Status::coerce_enum("completed"), Some(Status::Completed));
/// assert_eq!(Priority::values(), vec![Value::Int(1), Value::Int(2)]);
/// assert_eq!(Suit::Hearts.value(), Value::Str("Hearts"));
/// assert_eq!(Status::Completed.description(), Some("Work is finished"));
/// ```
///
/// Payloads must be unique within one enum. A duplicate is rejected at
/// compile time:
///
/// ```compile_fail
/// use enumkit::define_enum;
///
/// define_enum! {
///     pub enum Dup: str {
///         A = "x",
///         B = "x",
///     }
/// }
/// ```
///
/// ```compile_fail
/// use enumkit::define_enum;
///
/// define_enum! {
///     pub enum Dup: i64 {
///         A = 1,
///         B = 2,
///         C = 1,
///     }
/// }
/// ```
///
/// The enum derives `Debug, Clone, Copy, PartialEq, Eq, Hash` and gets
/// `Display` (effective value), `FromStr` (see [`EnumContract::parse`](crate::EnumContract::parse)),
/// `Serialize`, `Deserialize` and `From<Self> for Input<Self>`.
#[macro_export]
macro_rules! define_enum {
    (@desc) => {
        ::core::option::Option::None
    };
    (@desc $desc:literal) => {
        ::core::option::Option::Some($desc)
    };

    (@contract $name:ident, $kind:ident, [
        $( $variant:ident => $backing:expr ; [ $($desc:literal)? ] ),+
    ]) => {
        impl $crate::EnumContract for $name {
            const KIND: $crate::BackingKind = $crate::BackingKind::$kind;

            fn cases() -> &'static [Self] {
                const CASES: &[$name] = &[ $( $name::$variant ),+ ];
                CASES
            }

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }

            fn backing(self) -> $crate::Backing {
                match self {
                    $( $name::$variant => $backing, )+
                }
            }

            fn description(self) -> ::core::option::Option<&'static str> {
                match self {
                    $( $name::$variant => $crate::define_enum!(@desc $($desc)?), )+
                }
            }

            fn type_name() -> &'static str {
                stringify!($name)
            }
        }

        impl<'a> ::core::convert::From<$name> for $crate::Input<'a, $name> {
            fn from(case: $name) -> Self {
                $crate::Input::Case(case)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", $crate::EnumContract::value(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::EnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <$name as $crate::EnumContract>::parse(s)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                $crate::serde_support::serialize_case(self, serializer)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                $crate::serde_support::deserialize_case(deserializer)
            }
        }
    };

    // String-backed
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : str {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $payload:literal $({ description: $desc:literal })?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        const _: () = assert!(
            $crate::distinct_str_payloads(&[ $($payload),+ ]),
            "define_enum!: string payloads must be unique"
        );

        $crate::define_enum!(@contract $name, String, [
            $( $variant => $crate::Backing::Backed($crate::Payload::Str($payload)) ; [ $($desc)? ] ),+
        ]);
    };

    // Integer-backed
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : i64 {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $payload:literal $({ description: $desc:literal })?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        const _: () = assert!(
            $crate::distinct_int_payloads(&[ $($payload),+ ]),
            "define_enum!: integer payloads must be unique"
        );

        $crate::define_enum!(@contract $name, Int, [
            $( $variant => $crate::Backing::Backed($crate::Payload::Int($payload)) ; [ $($desc)? ] ),+
        ]);
    };

    // Unbacked
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $({ description: $desc:literal })?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        $crate::define_enum!(@contract $name, Unbacked, [
            $( $variant => $crate::Backing::Unbacked ; [ $($desc)? ] ),+
        ]);
    };
}

/// True when no two payloads are equal. Evaluated in const context by
/// `define_enum!`.
pub const fn distinct_int_payloads(payloads: &[i64]) -> bool {
    let mut i = 0;
    while i < payloads.len() {
        let mut j = i + 1;
        while j < payloads.len() {
            if payloads[i] == payloads[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// String counterpart of [`distinct_int_payloads`].
pub const fn distinct_str_payloads(payloads: &[&str]) -> bool {
    let mut i = 0;
    while i < payloads.len() {
        let mut j = i + 1;
        while j < payloads.len() {
            if bytes_eq(payloads[i].as_bytes(), payloads[j].as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut k = 0;
    while k < a.len() {
        if a[k] != b[k] {
            return false;
        }
        k += 1;
    }
    true
}
