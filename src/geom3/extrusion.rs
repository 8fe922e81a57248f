//! This module extrudes airfoil sections along the z axis into triangulated shells and collects
//! them into a single `MeshDocument`.
//!
//! Each shape is extruded from z=0 to z=span and contributes four groups of facets, always in the
//! same order: the top shell along the upper surface, the bottom shell along the lower surface,
//! the front cap at z=0 and the back cap at z=span. Facet normals are not computed from the
//! vertices, they are fixed per group to either +z or -z.

use crate::Point2;
use crate::airfoil::{AirfoilParams, SurfaceCurve, generate};
use crate::geom3::{Point3, UnitVec3, Vector3, lift};
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The name written on the `solid`/`endsolid` lines when no other name is given.
pub const SOLID_NAME: &str = "three_naca_airfoils";

/// A single triangle with its (fixed) facet normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub normal: UnitVec3,
    pub vertices: [Point3; 3],
}

impl Facet {
    pub fn new(normal: UnitVec3, vertices: [Point3; 3]) -> Self {
        Self { normal, vertices }
    }

    /// A facet with the normal (0, 0, 1)
    pub fn up(a: Point3, b: Point3, c: Point3) -> Self {
        Self::new(UnitVec3::new_unchecked(Vector3::new(0.0, 0.0, 1.0)), [a, b, c])
    }

    /// A facet with the normal (0, 0, -1)
    pub fn down(a: Point3, b: Point3, c: Point3) -> Self {
        Self::new(UnitVec3::new_unchecked(Vector3::new(0.0, 0.0, -1.0)), [a, b, c])
    }
}

/// The four groups of facets produced for every extruded shape, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellSection {
    Top,
    Bottom,
    FrontCap,
    BackCap,
}

impl ShellSection {
    pub const ALL: [ShellSection; 4] = [
        ShellSection::Top,
        ShellSection::Bottom,
        ShellSection::FrontCap,
        ShellSection::BackCap,
    ];
}

/// How the end faces at z=0 and z=span are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapMode {
    /// One triangle per station `i < n/2`, joining `upper[i]`, `upper[i+1]` and the mirrored
    /// station `lower[n-1-i]` on the other surface. Only the forward half of the stations is
    /// covered, so the aft part of the section is left open.
    #[default]
    HalfFan,

    /// Two triangles per pair of adjacent stations, spanning the quad between the upper and lower
    /// surface. This closes the whole section as long as the surfaces do not cross.
    Full,

    /// No end caps at all, only the top and bottom shells.
    None,
}

/// Parameters for the extrusion of a batch of shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrusionOptions {
    /// The extrusion distance along z. Non-positive values are not rejected, they simply produce
    /// flat or inverted shells.
    pub span: f64,
    pub cap: CapMode,
    pub solid_name: String,
}

impl ExtrusionOptions {
    pub fn new(span: f64) -> Self {
        Self {
            span,
            cap: CapMode::default(),
            solid_name: SOLID_NAME.to_string(),
        }
    }

    pub fn with_cap(mut self, cap: CapMode) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_solid_name(mut self, name: &str) -> Self {
        self.solid_name = name.to_string();
        self
    }
}

/// Records which contiguous run of facets in a `MeshDocument` came from which shape and section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRange {
    pub shape: usize,
    pub section: ShellSection,
    pub range: Range<usize>,
}

/// An ordered, append-only collection of facets written out as one named solid. Every facet
/// belongs to exactly one section of exactly one shape, and the document keeps track of which.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDocument {
    name: String,
    facets: Vec<Facet>,
    sections: Vec<SectionRange>,
}

impl MeshDocument {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            facets: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn sections(&self) -> &[SectionRange] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// The number of distinct shapes which have appended sections to the document.
    pub fn shape_count(&self) -> usize {
        self.sections.iter().map(|s| s.shape).unique().count()
    }

    /// Returns the facets produced for one section of one shape. The slice is empty if the shape
    /// or the section is unknown, or if it produced no facets.
    ///
    /// # Arguments
    ///
    /// * `shape`: the index of the shape in the input batch
    /// * `section`: which of the four shell sections to retrieve
    ///
    /// returns: &[Facet]
    pub fn section(&self, shape: usize, section: ShellSection) -> &[Facet] {
        self.sections
            .iter()
            .find(|s| s.shape == shape && s.section == section)
            .map(|s| &self.facets[s.range.clone()])
            .unwrap_or(&[])
    }

    /// Append the facets of one section of one shape to the end of the document.
    pub fn append_section(&mut self, shape: usize, section: ShellSection, facets: Vec<Facet>) {
        let start = self.facets.len();
        self.facets.extend(facets);
        self.sections.push(SectionRange {
            shape,
            section,
            range: start..self.facets.len(),
        });
    }
}

/// Generate every shape in `shapes` and extrude them all by `span` into one document named
/// `SOLID_NAME`, with the default `CapMode::HalfFan` end caps.
///
/// # Arguments
///
/// * `shapes`: the airfoil parameters, one entry per shape, in output order
/// * `span`: the extrusion distance along z
///
/// returns: MeshDocument
///
/// # Examples
///
/// ```
/// use foilmesh::{AirfoilParams, emit};
/// let shapes = [AirfoilParams { point_count: 10, ..Default::default() }];
/// let doc = emit(&shapes, 1.0);
/// assert_eq!(doc.len(), 4 * 9 + 2 * 5);
/// ```
pub fn emit(shapes: &[AirfoilParams], span: f64) -> MeshDocument {
    emit_with_options(shapes, &ExtrusionOptions::new(span))
}

/// Generate every shape in `shapes` and extrude them all into one document, using the span, cap
/// mode and solid name from `options`.
///
/// The section curves are generated in parallel, but facets are always appended in the order of
/// `shapes`, so the output is deterministic. Shapes are independent of each other; overlapping
/// shapes are simply written on top of each other.
///
/// # Arguments
///
/// * `shapes`: the airfoil parameters, one entry per shape, in output order
/// * `options`: the extrusion options
///
/// returns: MeshDocument
pub fn emit_with_options(shapes: &[AirfoilParams], options: &ExtrusionOptions) -> MeshDocument {
    let curves = shapes.par_iter().map(generate).collect::<Vec<_>>();

    let mut doc = MeshDocument::new(&options.solid_name);
    for (i, curve) in curves.iter().enumerate() {
        let before = doc.len();
        extrude_into(&mut doc, i, curve, options);
        debug!(
            "shape {}: {} stations, {} facets",
            i,
            curve.len(),
            doc.len() - before
        );
    }

    doc
}

/// Extrude a single surface curve into a document of its own. The shape index of every section
/// in the returned document is 0.
///
/// # Arguments
///
/// * `curve`: the section to extrude
/// * `options`: the extrusion options
///
/// returns: MeshDocument
pub fn extrude_curve(curve: &SurfaceCurve, options: &ExtrusionOptions) -> MeshDocument {
    let mut doc = MeshDocument::new(&options.solid_name);
    extrude_into(&mut doc, 0, curve, options);
    doc
}

fn extrude_into(
    doc: &mut MeshDocument,
    shape: usize,
    curve: &SurfaceCurve,
    options: &ExtrusionOptions,
) {
    let span = options.span;
    let (front, back) = match options.cap {
        CapMode::HalfFan => half_fan_caps(curve.upper(), curve.lower(), span),
        CapMode::Full => full_caps(curve.upper(), curve.lower(), span),
        CapMode::None => (Vec::new(), Vec::new()),
    };

    doc.append_section(shape, ShellSection::Top, top_shell(curve.upper(), span));
    doc.append_section(shape, ShellSection::Bottom, bottom_shell(curve.lower(), span));
    doc.append_section(shape, ShellSection::FrontCap, front);
    doc.append_section(shape, ShellSection::BackCap, back);
}

fn top_shell(upper: &[Point2], span: f64) -> Vec<Facet> {
    let mut facets = Vec::with_capacity(2 * upper.len().saturating_sub(1));
    for (a, b) in upper.iter().tuple_windows() {
        facets.push(Facet::up(lift(a, 0.0), lift(b, 0.0), lift(a, span)));
        facets.push(Facet::up(lift(b, 0.0), lift(b, span), lift(a, span)));
    }
    facets
}

fn bottom_shell(lower: &[Point2], span: f64) -> Vec<Facet> {
    let mut facets = Vec::with_capacity(2 * lower.len().saturating_sub(1));
    for (a, b) in lower.iter().tuple_windows() {
        facets.push(Facet::down(lift(a, 0.0), lift(a, span), lift(b, 0.0)));
        facets.push(Facet::down(lift(b, 0.0), lift(a, span), lift(b, span)));
    }
    facets
}

fn half_fan_caps(upper: &[Point2], lower: &[Point2], span: f64) -> (Vec<Facet>, Vec<Facet>) {
    let n = upper.len();
    let count = n.saturating_sub(1).min(n / 2);

    let mut front = Vec::with_capacity(count);
    let mut back = Vec::with_capacity(count);
    for i in 0..count {
        let (u0, u1, l) = (&upper[i], &upper[i + 1], &lower[n - 1 - i]);
        front.push(Facet::down(lift(u0, 0.0), lift(l, 0.0), lift(u1, 0.0)));
        back.push(Facet::up(lift(u0, span), lift(u1, span), lift(l, span)));
    }

    (front, back)
}

fn full_caps(upper: &[Point2], lower: &[Point2], span: f64) -> (Vec<Facet>, Vec<Facet>) {
    let pairs = upper.len().saturating_sub(1);
    let mut front = Vec::with_capacity(2 * pairs);
    let mut back = Vec::with_capacity(2 * pairs);

    for ((u0, l0), (u1, l1)) in upper.iter().zip(lower.iter()).tuple_windows() {
        front.push(Facet::down(lift(u0, 0.0), lift(u1, 0.0), lift(l1, 0.0)));
        front.push(Facet::down(lift(u0, 0.0), lift(l1, 0.0), lift(l0, 0.0)));
        back.push(Facet::up(lift(u0, span), lift(l1, span), lift(u1, span)));
        back.push(Facet::up(lift(u0, span), lift(l0, span), lift(l1, span)));
    }

    (front, back)
}
