//! Result of decoding a fetch response.
//!
//! `Outcome` is either a single object, a non-empty set of siblings, or
//! nothing at all.

use std::{ops::Deref, slice, vec};

use crate::object::RawObject;

/// Decoded content of a fetch response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one version exists.
    Single(RawObject),
    /// Several conflicting versions were returned together.
    Siblings(Siblings),
    /// The response carried no object.
    Empty,
}

impl Outcome {
    /// Whether any object was decoded.
    #[must_use]
    pub fn has_object(&self) -> bool { !matches!(self, Outcome::Empty) }

    /// The single object, or the primary (first) sibling.
    #[must_use]
    pub fn object(&self) -> Option<&RawObject> {
        match self {
            Outcome::Single(object) => Some(object),
            Outcome::Siblings(siblings) => Some(siblings.primary()),
            Outcome::Empty => None,
        }
    }

    /// Whether the response carried siblings.
    #[must_use]
    pub fn has_siblings(&self) -> bool { matches!(self, Outcome::Siblings(_)) }

    /// Sibling versions in body order; empty unless siblings were returned.
    #[must_use]
    pub fn siblings(&self) -> &[RawObject] {
        match self {
            Outcome::Siblings(siblings) => &siblings[..],
            Outcome::Single(_) | Outcome::Empty => &[],
        }
    }
}

impl From<RawObject> for Outcome {
    fn from(object: RawObject) -> Self { Outcome::Single(object) }
}

impl From<Vec<RawObject>> for Outcome {
    /// Wrap decoded siblings; an empty list becomes [`Outcome::Empty`].
    fn from(objects: Vec<RawObject>) -> Self {
        Siblings::new(objects).map_or(Outcome::Empty, Outcome::Siblings)
    }
}

/// Ordered, non-empty collection of sibling versions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Siblings(Vec<RawObject>);

impl Siblings {
    /// Wrap `objects`, returning `None` when there are none.
    #[must_use]
    pub fn new(objects: Vec<RawObject>) -> Option<Self> {
        (!objects.is_empty()).then_some(Self(objects))
    }

    /// The version the server listed first.
    #[must_use]
    pub fn primary(&self) -> &RawObject { &self.0[0] }

    /// Consume the set, returning the siblings in body order.
    #[must_use]
    pub fn into_vec(self) -> Vec<RawObject> { self.0 }
}

impl Deref for Siblings {
    type Target = [RawObject];

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<'a> IntoIterator for &'a Siblings {
    type Item = &'a RawObject;
    type IntoIter = slice::Iter<'a, RawObject>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl IntoIterator for Siblings {
    type Item = RawObject;
    type IntoIter = vec::IntoIter<RawObject>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}
