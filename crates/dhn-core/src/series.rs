//! Scalar or time-indexed values.
//!
//! Network attributes such as mass flow or temperature are either a single
//! steady-state value or one value per simulated time step. `Series` makes the
//! distinction explicit so callers pick a step with a `ts_id` instead of
//! guessing from the shape of the data.

use crate::error::{DhnError, DhnResult};
use crate::numeric::Real;

/// A steady-state scalar or an ordered sequence with one value per time step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Series {
    Scalar(Real),
    Steps(Vec<Real>),
}

impl Series {
    pub fn steps(values: impl Into<Vec<Real>>) -> Self {
        Series::Steps(values.into())
    }

    /// Number of time steps, `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Series::Scalar(_) => None,
            Series::Steps(v) => Some(v.len()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Series::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<Real> {
        match self {
            Series::Scalar(x) => Some(*x),
            Series::Steps(_) => None,
        }
    }

    /// View the values as a slice; a scalar is a slice of length one.
    pub fn as_slice(&self) -> &[Real] {
        match self {
            Series::Scalar(x) => std::slice::from_ref(x),
            Series::Steps(v) => v.as_slice(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Real> + '_ {
        self.as_slice().iter().copied()
    }

    /// Value at time step `ts_id`. Scalars ignore the index.
    pub fn at(&self, ts_id: usize) -> DhnResult<Real> {
        match self {
            Series::Scalar(x) => Ok(*x),
            Series::Steps(v) => v.get(ts_id).copied().ok_or(DhnError::IndexOob {
                what: "time step",
                index: ts_id,
                len: v.len(),
            }),
        }
    }

    /// Narrow to a single step when `ts_id` is given, otherwise keep everything.
    pub fn select(&self, ts_id: Option<usize>) -> DhnResult<Series> {
        match (self, ts_id) {
            (Series::Steps(_), Some(i)) => self.at(i).map(Series::Scalar),
            _ => Ok(self.clone()),
        }
    }

    pub fn map(&self, mut f: impl FnMut(Real) -> Real) -> Series {
        match self {
            Series::Scalar(x) => Series::Scalar(f(*x)),
            Series::Steps(v) => Series::Steps(v.iter().map(|&x| f(x)).collect()),
        }
    }

    pub fn try_map<E>(&self, mut f: impl FnMut(Real) -> Result<Real, E>) -> Result<Series, E> {
        match self {
            Series::Scalar(x) => f(*x).map(Series::Scalar),
            Series::Steps(v) => v
                .iter()
                .map(|&x| f(x))
                .collect::<Result<Vec<_>, E>>()
                .map(Series::Steps),
        }
    }

    /// Element-wise combination. A scalar broadcasts over a sequence; two
    /// sequences must have the same number of steps.
    pub fn try_zip_with<E>(
        &self,
        other: &Series,
        what: &'static str,
        mut f: impl FnMut(Real, Real) -> Result<Real, E>,
    ) -> Result<Series, E>
    where
        E: From<DhnError>,
    {
        match (self, other) {
            (Series::Scalar(a), Series::Scalar(b)) => f(*a, *b).map(Series::Scalar),
            (Series::Scalar(a), Series::Steps(bs)) => bs
                .iter()
                .map(|&b| f(*a, b))
                .collect::<Result<Vec<_>, E>>()
                .map(Series::Steps),
            (Series::Steps(as_), Series::Scalar(b)) => as_
                .iter()
                .map(|&a| f(a, *b))
                .collect::<Result<Vec<_>, E>>()
                .map(Series::Steps),
            (Series::Steps(as_), Series::Steps(bs)) => {
                if as_.len() != bs.len() {
                    return Err(DhnError::ShapeMismatch {
                        what,
                        left: as_.len(),
                        right: bs.len(),
                    }
                    .into());
                }
                as_.iter()
                    .zip(bs)
                    .map(|(&a, &b)| f(a, b))
                    .collect::<Result<Vec<_>, E>>()
                    .map(Series::Steps)
            }
        }
    }

    pub fn zip_with(
        &self,
        other: &Series,
        what: &'static str,
        mut f: impl FnMut(Real, Real) -> Real,
    ) -> DhnResult<Series> {
        self.try_zip_with(other, what, |a, b| Ok::<_, DhnError>(f(a, b)))
    }
}

impl From<Real> for Series {
    fn from(v: Real) -> Self {
        Series::Scalar(v)
    }
}

impl From<Vec<Real>> for Series {
    fn from(v: Vec<Real>) -> Self {
        Series::Steps(v)
    }
}

impl From<&[Real]> for Series {
    fn from(v: &[Real]) -> Self {
        Series::Steps(v.to_vec())
    }
}
