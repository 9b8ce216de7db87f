//! Stock conditions for [`IntArray::find`](crate::IntArray::find).

/// A pure condition on a single element.
pub type Predicate = fn(i32) -> bool;

pub fn is_odd(value: i32) -> bool {
    value % 2 != 0
}

pub fn is_even(value: i32) -> bool {
    value % 2 == 0
}

pub fn is_positive(value: i32) -> bool {
    value > 0
}

pub fn is_negative(value: i32) -> bool {
    value < 0
}

pub fn is_zero(value: i32) -> bool {
    value == 0
}

/// Every stock predicate with a short name, in a fixed order.
pub const ALL: [(&str, Predicate); 5] = [
    ("odd", is_odd),
    ("even", is_even),
    ("positive", is_positive),
    ("negative", is_negative),
    ("zero", is_zero),
];
