use std::io::{self, Write};

use nalgebra::Point3;

use crate::bounds::Aabb;
use crate::error::{Error, Result};

/// Index of a vertex position within an [`ObjDocument`].
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Vertex(usize);

#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    /// A `v x y z [...]` record. Tokens after `z` are carried unchanged.
    Vertex { vertex: Vertex, extra: Vec<String> },
    /// Raw bytes of any other line, without its terminator.
    Passthrough(Vec<u8>),
}

/// An OBJ file held as its lines, with vertex positions pulled out so they
/// can be rewritten while everything else is kept byte for byte.
#[derive(Clone, Debug, Default)]
pub struct ObjDocument {
    pub vertices: Vec<Point3<f64>>,
    pub lines: Vec<Line>,
    malformed: usize,
}

fn parse_vertex(line: &str) -> Option<(Point3<f64>, Vec<String>)> {
    let mut tokens = line.strip_prefix("v ")?.split_whitespace();
    let mut coord = || -> Option<f64> {
        let value: f64 = tokens.next()?.parse().ok()?;
        value.is_finite().then_some(value)
    };
    let position = Point3::new(coord()?, coord()?, coord()?);
    Some((position, tokens.map(str::to_owned).collect()))
}

/// Splits on `\n`, dropping one trailing `\r` per line and the empty tail
/// after a final newline.
fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let mut lines = body.split(|b| *b == b'\n');
    if bytes.is_empty() {
        lines.next();
    }
    lines.map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

impl ObjDocument {
    pub fn parse(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Only vertex lines have to be UTF-8; everything else is kept as raw
    /// bytes, so stray encodings in comments or group names survive.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut doc = Self::default();
        for line in split_lines(bytes) {
            match std::str::from_utf8(line).ok().and_then(parse_vertex) {
                Some((position, extra)) => {
                    let vertex = Vertex(doc.vertices.len());
                    doc.vertices.push(position);
                    doc.lines.push(Line::Vertex { vertex, extra });
                }
                None => {
                    if line.starts_with(b"v ") {
                        log::warn!(
                            "Leaving malformed vertex line untouched: {:?}",
                            String::from_utf8_lossy(line)
                        );
                        doc.malformed += 1;
                    }
                    doc.lines.push(Line::Passthrough(line.to_vec()));
                }
            }
        }
        log::debug!(
            "Parsed {} lines, {} vertices, {} malformed vertex lines",
            doc.lines.len(),
            doc.vertices.len(),
            doc.malformed
        );
        doc
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines starting with `v ` that could not be read as a position.
    pub fn malformed_count(&self) -> usize {
        self.malformed
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.vertices.iter()
    }

    pub fn map_vertices(&mut self, mut f: impl FnMut(Point3<f64>) -> Point3<f64>) {
        for position in &mut self.vertices {
            *position = f(*position);
        }
    }

    pub fn bounds(&self) -> Result<Aabb> {
        if self.vertices.is_empty() {
            return Err(Error::NoVertices);
        }
        Ok(Aabb::from_points(self.vertices()))
    }

    /// Writes every line terminated by `\n`; vertex coordinates use
    /// `precision` decimal places.
    pub fn write_to<W: Write>(&self, mut out: W, precision: usize) -> io::Result<()> {
        for line in &self.lines {
            match line {
                Line::Vertex { vertex, extra } => {
                    let p = vertex.to_point(self);
                    write!(
                        out,
                        "v {:.*} {:.*} {:.*}",
                        precision, p.x, precision, p.y, precision, p.z
                    )?;
                    for token in extra {
                        write!(out, " {token}")?;
                    }
                }
                Line::Passthrough(bytes) => out.write_all(bytes)?,
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn to_bytes(&self, precision: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, precision)
            .expect("writing to a Vec cannot fail");
        buf
    }

    pub fn to_text(&self, precision: usize) -> String {
        String::from_utf8_lossy(&self.to_bytes(precision)).into_owned()
    }
}

impl Vertex {
    pub fn to_point(self, doc: &ObjDocument) -> &Point3<f64> {
        &doc.vertices[self.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# comment\r\nmtllib a.mtl\nv 1 2 3\nvn 0 0 1\nv  -1.5   0 4 1.0\nv 1 2\nv a b c\nvt 0.5 0.5\nf 1 2\n";

    #[test]
    fn separates_vertices_from_other_lines() {
        let doc = ObjDocument::parse(SAMPLE);
        assert_eq!(doc.line_count(), 9);
        assert_eq!(doc.vertex_count(), 2);
        assert_eq!(doc.malformed_count(), 2);
        assert_eq!(doc.vertices[1], Point3::new(-1.5, 0.0, 4.0));
        assert_eq!(
            doc.lines[4],
            Line::Vertex {
                vertex: Vertex(1),
                extra: vec!["1.0".to_owned()]
            }
        );
        assert_eq!(doc.lines[0], Line::Passthrough(b"# comment".to_vec()));
    }

    #[test]
    fn rewrites_vertices_and_keeps_everything_else() {
        let mut doc = ObjDocument::parse(SAMPLE);
        doc.map_vertices(|p| p * 2.0);
        assert_eq!(
            doc.to_text(2),
            "# comment\nmtllib a.mtl\nv 2.00 4.00 6.00\nvn 0 0 1\nv -3.00 0.00 8.00 1.0\nv 1 2\nv a b c\nvt 0.5 0.5\nf 1 2\n"
        );
    }

    #[test]
    fn adds_missing_final_newline() {
        let doc = ObjDocument::parse("o thing\nv 0 0 0");
        assert_eq!(doc.to_text(1), "o thing\nv 0.0 0.0 0.0\n");
    }

    #[test]
    fn line_splitting_edges() {
        assert_eq!(ObjDocument::parse("").line_count(), 0);
        assert_eq!(ObjDocument::parse("\n").line_count(), 1);
        assert_eq!(ObjDocument::parse("a\n\nb").line_count(), 3);
        assert_eq!(ObjDocument::parse("a\n\n").to_text(6), "a\n\n");
    }

    #[test]
    fn only_lowercase_v_with_space_is_a_vertex() {
        let doc = ObjDocument::parse("V 1 2 3\nvp 1 2 3\n v 1 2 3\nv\t1 2 3\nv nan 0 0\n");
        assert_eq!(doc.vertex_count(), 0);
        assert!(matches!(doc.bounds(), Err(Error::NoVertices)));
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let doc = ObjDocument::parse(SAMPLE);
        let bounds = doc.bounds().unwrap();
        assert_eq!(bounds.min, Point3::new(-1.5, 0.0, 3.0));
        assert_eq!(bounds.max, Point3::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn non_utf8_lines_are_written_back_byte_for_byte() {
        let input = b"# caf\xe9\ng \xff\xfe\nv 1 1 1\nv \xff 0 0\n";
        let mut doc = ObjDocument::from_bytes(input);
        assert_eq!(doc.vertex_count(), 1);
        assert_eq!(doc.malformed_count(), 1);
        assert_eq!(doc.line_count(), 4);

        doc.map_vertices(|p| p * 3.0);
        assert_eq!(
            doc.to_bytes(1),
            b"# caf\xe9\ng \xff\xfe\nv 3.0 3.0 3.0\nv \xff 0 0\n".to_vec()
        );
    }
}
