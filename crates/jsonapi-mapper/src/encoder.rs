use crate::{Result, Template};

use serde_json::Value;

/// Turns a resource type, a plain snapshot and a template into a document.
///
/// The JSON:API encoder lives outside this crate; the mapper returns whatever
/// the encoder produces, unchanged.
pub trait Encoder {
    type Output;

    fn encode(&self, ty: &str, data: Value, template: &Template) -> Result<Self::Output>;
}

/// Encoder backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnEncoder<F>(F);

/// Creates an [`Encoder`] from a closure.
pub fn from_fn<F, T>(f: F) -> FnEncoder<F>
where
    F: Fn(&str, Value, &Template) -> Result<T>,
{
    FnEncoder(f)
}

impl<F, T> Encoder for FnEncoder<F>
where
    F: Fn(&str, Value, &Template) -> Result<T>,
{
    type Output = T;

    fn encode(&self, ty: &str, data: Value, template: &Template) -> Result<T> {
        (self.0)(ty, data, template)
    }
}

impl<E: Encoder + ?Sized> Encoder for &E {
    type Output = E::Output;

    fn encode(&self, ty: &str, data: Value, template: &Template) -> Result<Self::Output> {
        (**self).encode(ty, data, template)
    }
}

impl<F> core::fmt::Debug for FnEncoder<F> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.debug_struct("FnEncoder").finish_non_exhaustive()
    }
}
