//! # Batch Driver
//!
//! Runs the engine over a batch of edge-fill requests. Inputs arrive as
//! parallel sequences that may differ in length; they are broadcast to a
//! common length and each aligned tuple becomes one [`BatchItem`].
//!
//! ```text
//! BatchInput ──align──▶ BatchItem* ──resolve+place──▶ Placement* ──concat──▶ Distribution
//! ```
//!
//! Output order is batch-item order, then origin order within an item. Items
//! never interleave, including when they are processed in parallel.

use config::constants::DEFAULT_COUNT;
use glam::{DMat4, DVec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::broadcast::{aligned_len, repeat_last};
use crate::error::{DistributeError, DistributeResult};
use crate::mesh::{Edge, Face, Mesh, Segment};
use crate::placement::{place, Placement};
use crate::settings::{FailurePolicy, Settings};

// =============================================================================
// INPUT
// =============================================================================

/// Where the target segments come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recipients {
    /// Explicit endpoints. `starts` and `ends` are broadcast independently.
    Fixed {
        /// First endpoint of each segment
        starts: Vec<DVec3>,
        /// Second endpoint of each segment
        ends: Vec<DVec3>,
    },
    /// Edges of a shared recipient mesh.
    Edges {
        /// Recipient mesh vertices
        vertices: Vec<DVec3>,
        /// Recipient mesh edges; each becomes one segment
        edges: Vec<Edge>,
    },
}

impl Recipients {
    /// Single explicit segment.
    pub fn segment(start: DVec3, end: DVec3) -> Self {
        Recipients::Fixed {
            starts: vec![start],
            ends: vec![end],
        }
    }

    /// Resolves the start and end point sequences.
    ///
    /// Recipient edges are validated against the recipient vertex count.
    pub fn endpoints(&self) -> DistributeResult<(Vec<DVec3>, Vec<DVec3>)> {
        match self {
            Recipients::Fixed { starts, ends } => Ok((starts.clone(), ends.clone())),
            Recipients::Edges { vertices, edges } => {
                if edges.is_empty() {
                    return Err(DistributeError::empty_input("recipient edges"));
                }
                let lookup = |edge: usize, index: u32| {
                    vertices.get(index as usize).copied().ok_or_else(|| {
                        DistributeError::EdgeIndexOutOfRange {
                            edge,
                            index: index as usize,
                            vertex_count: vertices.len(),
                        }
                    })
                };
                let mut starts = Vec::with_capacity(edges.len());
                let mut ends = Vec::with_capacity(edges.len());
                for (position, [i, j]) in edges.iter().enumerate() {
                    starts.push(lookup(position, *i)?);
                    ends.push(lookup(position, *j)?);
                }
                Ok((starts, ends))
            }
        }
    }
}

/// Parallel input sequences for one engine call.
///
/// Every sequence must hold at least one entry; shorter sequences repeat
/// their last entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchInput {
    /// Donor vertex sets
    pub vertices: Vec<Vec<DVec3>>,
    /// Donor edge sets, passed through to the output
    pub edges: Vec<Vec<Edge>>,
    /// Donor face sets, passed through to the output
    pub faces: Vec<Vec<Face>>,
    /// Target segments
    pub recipients: Recipients,
    /// Requested counts, used by [`CountMode::Fixed`](crate::CountMode::Fixed)
    pub counts: Vec<i64>,
}

impl BatchInput {
    /// Creates an input with no donor topology and the default count.
    pub fn new(vertices: Vec<Vec<DVec3>>, recipients: Recipients) -> Self {
        Self {
            vertices,
            edges: vec![Vec::new()],
            faces: vec![Vec::new()],
            recipients,
            counts: vec![DEFAULT_COUNT],
        }
    }

    /// Creates an input from whole donor meshes.
    pub fn from_meshes(meshes: Vec<Mesh>, recipients: Recipients) -> Self {
        let mut input = Self::new(Vec::with_capacity(meshes.len()), recipients);
        input.edges.clear();
        input.faces.clear();
        for mesh in meshes {
            input.vertices.push(mesh.vertices);
            input.edges.push(mesh.edges);
            input.faces.push(mesh.faces);
        }
        input
    }

    /// Replaces the donor edge sets.
    pub fn with_edges(mut self, edges: Vec<Vec<Edge>>) -> Self {
        self.edges = edges;
        self
    }

    /// Replaces the donor face sets.
    pub fn with_faces(mut self, faces: Vec<Vec<Face>>) -> Self {
        self.faces = faces;
        self
    }

    /// Replaces the requested counts.
    pub fn with_counts(mut self, counts: Vec<i64>) -> Self {
        self.counts = counts;
        self
    }

    /// Broadcasts all sequences and returns one item per aligned position.
    pub fn items(&self) -> DistributeResult<Vec<BatchItem<'_>>> {
        let (starts, ends) = self.recipients.endpoints()?;
        let len = aligned_len(&[
            ("vertices", self.vertices.len()),
            ("edges", self.edges.len()),
            ("faces", self.faces.len()),
            ("starts", starts.len()),
            ("ends", ends.len()),
            ("counts", self.counts.len()),
        ])?;

        (0..len)
            .map(|index| self.item(index, &starts, &ends))
            .collect()
    }

    fn item(&self, index: usize, starts: &[DVec3], ends: &[DVec3]) -> DistributeResult<BatchItem<'_>> {
        Ok(BatchItem {
            index,
            vertices: broadcast_at(&self.vertices, index, "vertices")?,
            edges: broadcast_at(&self.edges, index, "edges")?,
            faces: broadcast_at(&self.faces, index, "faces")?,
            segment: Segment::new(
                *broadcast_at(starts, index, "starts")?,
                *broadcast_at(ends, index, "ends")?,
            ),
            requested_count: *broadcast_at(&self.counts, index, "counts")?,
        })
    }
}

fn broadcast_at<'s, T>(seq: &'s [T], index: usize, name: &'static str) -> DistributeResult<&'s T> {
    repeat_last(seq, index).ok_or_else(|| DistributeError::empty_input(name))
}

/// One aligned tuple of the batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchItem<'a> {
    /// Position after alignment
    pub index: usize,
    /// Donor vertices
    pub vertices: &'a [DVec3],
    /// Donor edges
    pub edges: &'a [Edge],
    /// Donor faces
    pub faces: &'a [Face],
    /// Target segment
    pub segment: Segment,
    /// Requested count
    pub requested_count: i64,
}

impl BatchItem<'_> {
    /// Resolves the count and places the donor for this item.
    pub fn distribute(&self, settings: &Settings) -> DistributeResult<Placement> {
        let count = settings.count_mode.resolve(
            &self.segment,
            self.vertices,
            settings.axis,
            self.requested_count,
        )?;
        log::trace!(
            "batch item {}: {:?} resolved {} instance(s) over length {}",
            self.index,
            settings.count_mode,
            count,
            self.segment.length()
        );
        place(&self.segment, self.vertices, count, settings)
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Concatenated instances of a whole batch.
///
/// `vertices`, `edges`, `faces` and `matrices` are aligned one-to-one, one
/// entry per instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    /// Vertex set per instance
    pub vertices: Vec<Vec<DVec3>>,
    /// Donor edges, replicated per instance
    pub edges: Vec<Vec<Edge>>,
    /// Donor faces, replicated per instance
    pub faces: Vec<Vec<Face>>,
    /// Transform per instance
    pub matrices: Vec<DMat4>,
    /// Instances emitted per aligned batch item (0 for a skipped item)
    pub item_counts: Vec<usize>,
}

impl Distribution {
    /// Total number of instances.
    #[inline]
    pub fn instance_count(&self) -> usize {
        self.matrices.len()
    }

    /// True when no instance was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Row-major matrices, as hosts with row-major storage expect them.
    pub fn matrix_rows(&self) -> Vec<[[f64; 4]; 4]> {
        self.matrices
            .iter()
            .map(|m| m.transpose().to_cols_array_2d())
            .collect()
    }

    /// Vertex sets as plain coordinate triples.
    pub fn vertex_arrays(&self) -> Vec<Vec<[f64; 3]>> {
        self.vertices
            .iter()
            .map(|set| set.iter().map(|v| v.to_array()).collect())
            .collect()
    }

    /// One mesh per instance.
    pub fn meshes(&self) -> Vec<Mesh> {
        self.vertices
            .iter()
            .zip(&self.edges)
            .zip(&self.faces)
            .map(|((vertices, edges), faces)| Mesh::new(vertices.clone(), edges.clone(), faces.clone()))
            .collect()
    }

    fn append(&mut self, item: &BatchItem<'_>, placement: Placement) {
        let count = placement.count();
        self.edges.extend(std::iter::repeat_with(|| item.edges.to_vec()).take(count));
        self.faces.extend(std::iter::repeat_with(|| item.faces.to_vec()).take(count));
        self.vertices.extend(placement.vertex_sets);
        self.matrices.extend(placement.transforms);
        self.item_counts.push(count);
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// Distributes donors along every recipient segment of the batch.
///
/// With [`FailurePolicy::Abort`] the first failing item (in batch order)
/// aborts the call; its error is wrapped in [`DistributeError::Item`]. With
/// [`FailurePolicy::Skip`] a failing item is logged and contributes nothing.
///
/// # Example
///
/// ```rust
/// use edge_distribute::{distribute, BatchInput, CountMode, Recipients, Settings};
/// use glam::DVec3;
///
/// let donor = vec![DVec3::new(-0.5, 0.0, 0.0), DVec3::new(0.5, 0.0, 0.0)];
/// let input = BatchInput::new(
///     vec![donor],
///     Recipients::segment(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0)),
/// );
/// let settings = Settings::default().with_count_mode(CountMode::ScaleUp);
///
/// let out = distribute(&input, &settings).unwrap();
/// assert_eq!(out.instance_count(), 3);
/// ```
pub fn distribute(input: &BatchInput, settings: &Settings) -> DistributeResult<Distribution> {
    let items = input.items()?;

    let results: Vec<DistributeResult<Placement>> = if settings.parallel {
        items.par_iter().map(|item| item.distribute(settings)).collect()
    } else {
        items.iter().map(|item| item.distribute(settings)).collect()
    };

    let mut out = Distribution::default();
    for (item, result) in items.iter().zip(results) {
        match result {
            Ok(placement) => out.append(item, placement),
            Err(err) => match settings.failure_policy {
                FailurePolicy::Abort => return Err(err.at_item(item.index)),
                FailurePolicy::Skip => {
                    log::warn!("skipping batch item {}: {}", item.index, err);
                    out.item_counts.push(0);
                }
            },
        }
    }

    log::debug!(
        "distributed {} instance(s) over {} batch item(s)",
        out.instance_count(),
        items.len()
    );
    Ok(out)
}
