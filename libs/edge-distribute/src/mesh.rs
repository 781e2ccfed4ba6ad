//! # Mesh Data
//!
//! Donor mesh and target segment representation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Undirected vertex index pair.
pub type Edge = [u32; 2];

/// Ordered vertex index loop (three or more indices).
pub type Face = Vec<u32>;

/// Polygon mesh as exchanged with the host: vertices plus index topology.
///
/// Topology is passed through untouched; indices are the caller's
/// responsibility.
///
/// # Example
///
/// ```rust
/// use edge_distribute::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1], [1, 2], [2, 0]],
///     vec![vec![0, 1, 2]],
/// );
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<DVec3>,
    /// Edge index pairs
    pub edges: Vec<Edge>,
    /// Face index loops
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Creates a mesh from its parts.
    pub fn new(vertices: Vec<DVec3>, edges: Vec<Edge>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// Creates a mesh with vertices only.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Target line segment a donor is distributed along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint
    pub start: DVec3,
    /// Second endpoint
    pub end: DVec3,
}

impl Segment {
    /// Creates a segment from two endpoints.
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.end - self.start
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// True when the length is at or below `epsilon`.
    #[inline]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.length() <= epsilon
    }

    /// Point at parameter `t`, where 0 is `start` and 1 is `end`.
    #[inline]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.start + self.direction() * t
    }
}
