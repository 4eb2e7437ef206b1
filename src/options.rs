use crate::ellipsoid::Ellipsoid;

/// Which Transverse Mercator formulation projects to and from UTM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProjectionMethod {
    /// Power series in the longitude offset (Hoffmann-Wellenhof et al.).
    /// Fine inside a zone, which is all a well location needs.
    #[default]
    Series,
    /// Krüger series in the third flattening. Nanometre accuracy well
    /// outside the zone; matches what common projection libraries produce.
    Exact,
}

/// Knobs for the UTM conversions. The free functions in the crate root use
/// [`ConversionOptions::default`]: GRS80 and the series projection.
///
/// With the `serde` feature enabled, missing fields fall back to their
/// defaults:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use gwells_coords::{ConversionOptions, ProjectionMethod};
///
/// let opts: ConversionOptions = serde_json::from_str(r#"{"method": "exact"}"#).unwrap();
/// assert_eq!(opts.method, ProjectionMethod::Exact);
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    pub ellipsoid: Ellipsoid,
    pub method: ProjectionMethod,
}

impl ConversionOptions {
    pub fn new(ellipsoid: Ellipsoid, method: ProjectionMethod) -> ConversionOptions {
        Self { ellipsoid, method }
    }

    pub fn with_method(self, method: ProjectionMethod) -> ConversionOptions {
        Self { method, ..self }
    }

    pub fn with_ellipsoid(self, ellipsoid: Ellipsoid) -> ConversionOptions {
        Self { ellipsoid, ..self }
    }
}
