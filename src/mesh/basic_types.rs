// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use ahash::AHashMap;

use crate::mesh::half_edge::HalfEdge;

/// Offset into the half-edge array.
pub type HalfEdgeIndex = usize;
pub type VertexIndex = usize;
pub type EdgeIndex = usize;
pub type FaceIndex = usize;

/// A directed edge `(from, to)`.
pub type Arc = (VertexIndex, VertexIndex);

/// An arbitrary polygonal face given as its vertex cycle. Needs at least
/// three vertices to be valid.
pub type PolygonalFace = Vec<VertexIndex>;

/// Unoriented edge, stored with the lower vertex index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub v: [VertexIndex; 2],
}

impl Edge {
    pub fn new(vi: VertexIndex, vj: VertexIndex) -> Self {
        if vi <= vj {
            Self { v: [vi, vj] }
        } else {
            Self { v: [vj, vi] }
        }
    }

    #[inline]
    pub fn start(&self) -> VertexIndex {
        self.v[0]
    }

    #[inline]
    pub fn end(&self) -> VertexIndex {
        self.v[1]
    }
}

/// Oriented triangle given by three vertex indices (CCW by convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub v: [VertexIndex; 3],
}

impl Triangle {
    pub fn new(v0: VertexIndex, v1: VertexIndex, v2: VertexIndex) -> Self {
        Self { v: [v0, v1, v2] }
    }

    #[inline]
    pub fn i(&self) -> VertexIndex {
        self.v[0]
    }

    #[inline]
    pub fn j(&self) -> VertexIndex {
        self.v[1]
    }

    #[inline]
    pub fn k(&self) -> VertexIndex {
        self.v[2]
    }
}

impl AsRef<[VertexIndex]> for Triangle {
    fn as_ref(&self) -> &[VertexIndex] {
        &self.v
    }
}

impl From<[VertexIndex; 3]> for Triangle {
    fn from(v: [VertexIndex; 3]) -> Self {
        Self { v }
    }
}

/// Purely combinatorial half-edge structure over a 2D cellular surface.
///
/// Vertices, edges and faces are plain indices; each one owns a single
/// anchor half-edge used as the entry point for traversals. The caller's
/// numbering of vertices and faces is kept as given to `build`.
#[derive(Debug, Clone, Default)]
pub struct HalfEdgeDataStructure {
    pub(crate) half_edges: Vec<HalfEdge>,
    /// One outgoing half-edge per vertex. Boundary vertices are anchored on
    /// a boundary half-edge.
    pub(crate) vertex_half_edges: Vec<HalfEdgeIndex>,
    pub(crate) face_half_edges: Vec<HalfEdgeIndex>,
    pub(crate) edge_half_edges: Vec<HalfEdgeIndex>,
    pub(crate) arc_map: AHashMap<Arc, HalfEdgeIndex>,
}
