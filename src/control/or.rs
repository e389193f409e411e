//! Or types - closed tagged unions over two or three alternatives.
//!
//! [`Or2`] and [`Or3`] hold exactly one value out of a fixed list of slots.
//! Each slot has its own type and a 1-based discriminant reported by
//! `option()`. Both arities are generated by the same `define_or!` macro.
//!
//! - Equality: same discriminant and equal active values. Instances with
//!   different discriminants are never equal, even when the slot types are
//!   the same.
//! - Hashing: only the active value is hashed.
//! - Display: `"{discriminant}({active value})"`.
//!
//! # Examples
//!
//! ```rust
//! use fun::control::Or3;
//!
//! let value: Or3<i32, &str, bool> = Or3::of_option2("x");
//! assert_eq!(value.option(), 2);
//! assert_eq!(*value.item2(), "x");
//! assert_eq!(value.to_string(), "2(x)");
//!
//! let same: Or3<i32, &str, bool> = Or3::of_option2("x");
//! assert_eq!(value, same);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Errors raised by the checked operations of [`Or2`] and [`Or3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrError {
    /// The discriminant is outside `1..=arity`.
    InvalidOption {
        /// The union type, e.g. `"Or3"`.
        type_name: &'static str,
        /// The rejected discriminant.
        option: usize,
    },
    /// The slot selected by the discriminant was not supplied.
    MissingItem {
        /// The union type, e.g. `"Or3"`.
        type_name: &'static str,
        /// The selected discriminant.
        option: usize,
    },
    /// A slot was read while a different slot is active.
    InvalidAccess {
        /// The union type, e.g. `"Or3"`.
        type_name: &'static str,
        /// The slot that was read.
        requested: usize,
        /// The active slot.
        actual: usize,
    },
}

impl fmt::Display for OrError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOption { type_name, option } => {
                write!(formatter, "{type_name} cannot have an option of {option}.")
            }
            Self::MissingItem { type_name, option } => {
                write!(formatter, "{type_name} with option {option} needs item{option}.")
            }
            Self::InvalidAccess {
                type_name,
                requested,
                actual,
            } => write!(
                formatter,
                "Cannot get item{requested} from {type_name} unless option is {requested} (option is {actual})."
            ),
        }
    }
}

impl std::error::Error for OrError {}

macro_rules! define_or {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $index:literal => $variant:ident($type_param:ident) ),+ $(,)?
        }
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Copy, Debug)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub enum $name<$($type_param),+> {
                $(
                    #[doc = "Slot " $index " is active."]
                    $variant($type_param),
                )+
            }

            impl<$($type_param),+> $name<$($type_param),+> {
                /// The number of slots.
                pub const ARITY: usize = [$($index),+].len();

                $(
                    #[doc = "Creates an instance with slot " $index " active."]
                    #[inline]
                    pub const fn [<of_option $index>](value: $type_param) -> Self {
                        Self::$variant(value)
                    }
                )+

                #[doc = "Builds an instance from a discriminant and one optional value per slot."]
                ///
                /// Only the value for the selected slot is used.
                ///
                /// # Errors
                ///
                /// Returns [`OrError::InvalidOption`] when `option` is outside
                /// `1..=ARITY` and [`OrError::MissingItem`] when the selected
                /// slot is `None`.
                pub fn from_parts(option: usize, $( [<item $index>]: Option<$type_param> ),+) -> Result<Self, OrError> {
                    match option {
                        $(
                            $index => [<item $index>].map(Self::$variant).ok_or(OrError::MissingItem {
                                type_name: stringify!($name),
                                option,
                            }),
                        )+
                        _ => Err(OrError::InvalidOption {
                            type_name: stringify!($name),
                            option,
                        }),
                    }
                }

                /// Returns the 1-based discriminant of the active slot.
                #[inline]
                pub const fn option(&self) -> usize {
                    match self {
                        $( Self::$variant(_) => $index, )+
                    }
                }

                $(
                    #[doc = "Returns the value of slot " $index "."]
                    ///
                    /// # Panics
                    ///
                    /// Panics if another slot is active.
                    #[inline]
                    pub fn [<item $index>](&self) -> &$type_param {
                        match self.[<try_item $index>]() {
                            Ok(value) => value,
                            Err(error) => panic!("{error}"),
                        }
                    }

                    #[doc = "Returns the value of slot " $index ", or an error if another slot is active."]
                    ///
                    /// # Errors
                    ///
                    /// Returns [`OrError::InvalidAccess`] if another slot is active.
                    #[inline]
                    pub fn [<try_item $index>](&self) -> Result<&$type_param, OrError> {
                        match self {
                            Self::$variant(value) => Ok(value),
                            #[allow(unreachable_patterns)]
                            _ => Err(OrError::InvalidAccess {
                                type_name: stringify!($name),
                                requested: $index,
                                actual: self.option(),
                            }),
                        }
                    }

                    #[doc = "Takes the value of slot " $index ", returning `self` unchanged if another slot is active."]
                    ///
                    /// # Errors
                    ///
                    /// Returns `self` if another slot is active.
                    #[inline]
                    pub fn [<into_item $index>](self) -> Result<$type_param, Self> {
                        match self {
                            Self::$variant(value) => Ok(value),
                            #[allow(unreachable_patterns)]
                            other => Err(other),
                        }
                    }
                )+

                /// Eliminates the union by applying the function for the active slot.
                #[inline]
                pub fn fold<R>(self, $( [<on_option $index>]: impl FnOnce($type_param) -> R ),+) -> R {
                    match self {
                        $( Self::$variant(value) => [<on_option $index>](value), )+
                    }
                }
            }

            impl<$($type_param: PartialEq),+> PartialEq for $name<$($type_param),+> {
                fn eq(&self, other: &Self) -> bool {
                    match (self, other) {
                        $( (Self::$variant(left), Self::$variant(right)) => left == right, )+
                        _ => false,
                    }
                }
            }

            impl<$($type_param: Eq),+> Eq for $name<$($type_param),+> {}

            impl<$($type_param: Hash),+> Hash for $name<$($type_param),+> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    match self {
                        $( Self::$variant(value) => value.hash(state), )+
                    }
                }
            }

            impl<$($type_param: fmt::Display),+> fmt::Display for $name<$($type_param),+> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        $( Self::$variant(value) => write!(formatter, "{}({})", $index, value), )+
                    }
                }
            }
        }
    };
}

define_or! {
    /// A value that is one of two alternatives.
    ///
    /// Build it with [`Or2::of_option1`] or [`Or2::of_option2`]; the
    /// discriminant is then valid by construction.
    ///
    /// ```rust
    /// use fun::control::Or2;
    ///
    /// let left: Or2<i32, i32> = Or2::of_option1(7);
    /// let right: Or2<i32, i32> = Or2::of_option2(7);
    /// assert_ne!(left, right);
    /// ```
    Or2 {
        1 => Option1(T1),
        2 => Option2(T2),
    }
}

define_or! {
    /// A value that is one of three alternatives.
    ///
    /// Build it with [`Or3::of_option1`], [`Or3::of_option2`] or
    /// [`Or3::of_option3`]; the discriminant is then valid by construction.
    Or3 {
        1 => Option1(T1),
        2 => Option2(T2),
        3 => Option3(T3),
    }
}
