//! Named cell-wise and face-wise value containers.
//!
//! A [`Field<T>`] stores one value per mesh entity (cell or face) together
//! with the name the host solver knows it by. Mesh topology, boundary
//! handling and field algebra stay with the host; models only need to read
//! values and hand back freshly computed fields.
//!
//! The aliases below fix the value types used by turbulence models:
//!
//! - [`VolVectorField`]: cell-centred velocity vectors.
//! - [`SurfaceScalarField`]: face volumetric fluxes.
//! - [`VolScalarField`]: dimensionless cell-centred coefficients.

use num_traits::Zero;
use uom::si::f64::{Ratio, Velocity, VolumeRate};

/// Cell-centred velocity, one `[Ux, Uy, Uz]` per cell.
pub type VolVectorField = Field<[Velocity; 3]>;

/// Face volumetric flux, one value per face.
pub type SurfaceScalarField = Field<VolumeRate>;

/// Dimensionless cell-centred coefficient, one value per cell.
pub type VolScalarField = Field<Ratio>;

/// A named sequence of values, one per mesh entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    name: String,
    values: Vec<T>,
}

impl<T> Field<T> {
    /// Creates a field from explicit values.
    #[must_use]
    pub fn from_values(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of entities the field covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consumes the field and returns its values.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T: Clone> Field<T> {
    /// Creates a field with `len` copies of `value`.
    #[must_use]
    pub fn uniform(name: impl Into<String>, len: usize, value: T) -> Self {
        Self::from_values(name, vec![value; len])
    }

    /// Returns `true` if every value equals `value`.
    ///
    /// An empty field is trivially uniform.
    #[must_use]
    pub fn is_uniformly(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.iter().all(|v| v == value)
    }
}

impl<T: Clone + Zero> Field<T> {
    /// Creates a field with `len` zero values.
    #[must_use]
    pub fn zeros(name: impl Into<String>, len: usize) -> Self {
        Self::uniform(name, len, T::zero())
    }
}

impl<'a, T> IntoIterator for &'a Field<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
