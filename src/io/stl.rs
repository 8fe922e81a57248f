//! Writers for the STL (stereolithography) format.
//!
//! The ASCII writer produces the layout below, with every vertex coordinate printed to six
//! decimal places and the facet normals printed in their shortest form (`0.0 0.0 -1.0`):
//!
//! ```text
//! solid <name>
//!   facet normal <nx> <ny> <nz>
//!     outer loop
//!       vertex <x> <y> <z>
//!       vertex <x> <y> <z>
//!       vertex <x> <y> <z>
//!     endloop
//!   endfacet
//! endsolid <name>
//! ```
//!
//! The binary writer is only available with the `stl` feature, and delegates to `stl_io`.

use crate::Result;
use crate::geom3::extrusion::{Facet, MeshDocument};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a single facet block, from `facet normal` to `endfacet`, in the ASCII STL layout.
///
/// # Arguments
///
/// * `writer`: the sink to write to
/// * `facet`: the triangle and its normal
///
/// returns: Result<(), Error>
pub fn write_facet<W: Write>(writer: &mut W, facet: &Facet) -> std::io::Result<()> {
    let n = facet.normal;
    // Adding zero turns -0.0 into 0.0 so the normals print consistently
    writeln!(
        writer,
        "  facet normal {:?} {:?} {:?}",
        n.x + 0.0,
        n.y + 0.0,
        n.z + 0.0
    )?;
    writeln!(writer, "    outer loop")?;
    for v in facet.vertices.iter() {
        writeln!(writer, "      vertex {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
    }
    writeln!(writer, "    endloop")?;
    writeln!(writer, "  endfacet")
}

/// Write an entire document as one ASCII STL solid. All facets are written in document order,
/// between a `solid` line and an `endsolid` line carrying the document's name.
///
/// # Arguments
///
/// * `writer`: the sink to write to, errors from it are returned as-is
/// * `doc`: the document to write
///
/// returns: Result<(), Box<dyn Error, Global>>
pub fn write_ascii_stl<W: Write>(writer: &mut W, doc: &MeshDocument) -> Result<()> {
    writeln!(writer, "solid {}", doc.name())?;
    for facet in doc.facets() {
        write_facet(writer, facet)?;
    }
    writeln!(writer, "endsolid {}", doc.name())?;
    writer.flush()?;
    Ok(())
}

/// Write a document as an ASCII STL file, creating the file or replacing an existing one.
///
/// # Arguments
///
/// * `path`: the destination file
/// * `doc`: the document to write
///
/// returns: Result<(), Box<dyn Error, Global>>
pub fn write_ascii_stl_file(path: &Path, doc: &MeshDocument) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ascii_stl(&mut writer, doc)?;
    info!("wrote {} facets to {}", doc.len(), path.display());
    Ok(())
}

/// Render a document to an in-memory ASCII STL string.
///
/// # Examples
///
/// ```
/// use foilmesh::{AirfoilParams, emit};
/// use foilmesh::io::ascii_stl_string;
/// let doc = emit(&[AirfoilParams { point_count: 4, ..Default::default() }], 1.0);
/// let text = ascii_stl_string(&doc).unwrap();
/// assert!(text.starts_with("solid three_naca_airfoils\n"));
/// assert!(text.ends_with("endsolid three_naca_airfoils\n"));
/// ```
pub fn ascii_stl_string(doc: &MeshDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write_ascii_stl(&mut buffer, doc)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(feature = "stl")]
impl From<&Facet> for stl_io::Triangle {
    fn from(facet: &Facet) -> Self {
        let n = facet.normal;
        let vertex = |i: usize| {
            let v = facet.vertices[i];
            stl_io::Vertex::new([v.x as f32, v.y as f32, v.z as f32])
        };
        stl_io::Triangle {
            normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: [vertex(0), vertex(1), vertex(2)],
        }
    }
}

/// Write a document in the binary STL format. The solid name is not stored, binary STL has no
/// place for it beyond the free-form header.
#[cfg(feature = "stl")]
pub fn write_binary_stl<W: Write>(writer: &mut W, doc: &MeshDocument) -> Result<()> {
    let triangles = doc
        .facets()
        .iter()
        .map(stl_io::Triangle::from)
        .collect::<Vec<_>>();
    stl_io::write_stl(writer, triangles.iter())?;
    writer.flush()?;
    Ok(())
}

/// Write a document as a binary STL file, creating the file or replacing an existing one.
#[cfg(feature = "stl")]
pub fn write_binary_stl_file(path: &Path, doc: &MeshDocument) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_binary_stl(&mut writer, doc)?;
    info!("wrote {} binary facets to {}", doc.len(), path.display());
    Ok(())
}
