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

use smallvec::SmallVec;

use crate::mesh::{
    basic_types::{Arc, EdgeIndex, FaceIndex, HalfEdgeDataStructure, HalfEdgeIndex, VertexIndex},
    half_edge::HalfEdge,
};

impl HalfEdgeDataStructure {
    #[inline]
    pub fn nb_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    #[inline]
    pub fn nb_vertices(&self) -> usize {
        self.vertex_half_edges.len()
    }

    #[inline]
    pub fn nb_edges(&self) -> usize {
        self.edge_half_edges.len()
    }

    #[inline]
    pub fn nb_faces(&self) -> usize {
        self.face_half_edges.len()
    }

    /// Euler characteristic `V - E + F` of the combinatorial surface.
    pub fn euler(&self) -> i64 {
        self.nb_vertices() as i64 - self.nb_edges() as i64 + self.nb_faces() as i64
    }

    #[inline]
    pub fn half_edge(&self, he: HalfEdgeIndex) -> &HalfEdge {
        &self.half_edges[he]
    }

    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    pub fn source(&self, he: HalfEdgeIndex) -> VertexIndex {
        self.half_edges[self.half_edges[he].opposite].to_vertex
    }

    pub fn target(&self, he: HalfEdgeIndex) -> VertexIndex {
        self.half_edges[he].to_vertex
    }

    /// Half-edge preceding `he` around its face (or hole), found by walking
    /// the `next` cycle.
    pub fn prev(&self, he: HalfEdgeIndex) -> HalfEdgeIndex {
        let mut h = he;
        loop {
            let n = self.half_edges[h].next;
            if n == he {
                return h;
            }
            h = n;
        }
    }

    /// The directed edge `(source, target)` carried by `he`.
    pub fn arc_from_half_edge_index(&self, he: HalfEdgeIndex) -> Arc {
        (self.source(he), self.target(he))
    }

    pub fn half_edge_index_from_arc(&self, arc: Arc) -> Option<HalfEdgeIndex> {
        self.arc_map.get(&arc).copied()
    }

    /// Half-edge going from `i` to `j`, if the two vertices are connected.
    pub fn half_edge_index_from_vertices(&self, i: VertexIndex, j: VertexIndex) -> Option<HalfEdgeIndex> {
        self.half_edge_index_from_arc((i, j))
    }

    /// An half-edge leaving `v`. On boundary vertices it is a boundary half-edge.
    #[inline]
    pub fn half_edge_index_from_vertex_index(&self, v: VertexIndex) -> HalfEdgeIndex {
        self.vertex_half_edges[v]
    }

    #[inline]
    pub fn half_edge_index_from_face_index(&self, f: FaceIndex) -> HalfEdgeIndex {
        self.face_half_edges[f]
    }

    #[inline]
    pub fn half_edge_index_from_edge_index(&self, e: EdgeIndex) -> HalfEdgeIndex {
        self.edge_half_edges[e]
    }

    /// Enumerate all outgoing half-edges from `v` exactly once, starting
    /// from its anchor. Clockwise if faces were given counter-clockwise.
    pub fn outgoing_half_edges(&self, v: VertexIndex) -> Vec<HalfEdgeIndex> {
        let start = self.vertex_half_edges[v];
        let mut result = Vec::new();
        let mut h = start;
        loop {
            result.push(h);
            h = self.half_edges[self.half_edges[h].opposite].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// Neighbors of `v` in rotational order (clockwise if faces were given
    /// counter-clockwise).
    pub fn neighboring_vertices(&self, v: VertexIndex) -> Vec<VertexIndex> {
        self.outgoing_half_edges(v)
            .into_iter()
            .map(|h| self.half_edges[h].to_vertex)
            .collect()
    }

    pub fn nb_neighboring_vertices(&self, v: VertexIndex) -> usize {
        let start = self.vertex_half_edges[v];
        let mut nb = 0;
        let mut h = start;
        loop {
            nb += 1;
            h = self.half_edges[self.half_edges[h].opposite].next;
            if h == start {
                return nb;
            }
        }
    }

    /// Faces around `v` in rotational order; the exterior is skipped.
    pub fn neighboring_faces(&self, v: VertexIndex) -> Vec<FaceIndex> {
        self.outgoing_half_edges(v)
            .into_iter()
            .filter_map(|h| self.half_edges[h].face)
            .collect()
    }

    #[inline]
    pub fn is_vertex_boundary(&self, v: VertexIndex) -> bool {
        self.half_edges[self.vertex_half_edges[v]].is_boundary()
    }

    /// Targets of all boundary half-edges. O(#half-edges), no particular order.
    ///
    /// A butterfly vertex shows up once per boundary fan.
    pub fn boundary_vertices(&self) -> Vec<VertexIndex> {
        self.half_edges
            .iter()
            .filter(|he| he.is_boundary())
            .map(|he| he.to_vertex)
            .collect()
    }

    pub fn boundary_half_edge_indices(&self) -> Vec<HalfEdgeIndex> {
        (0..self.half_edges.len())
            .filter(|&h| self.half_edges[h].is_boundary())
            .collect()
    }

    pub fn boundary_arcs(&self) -> Vec<Arc> {
        self.boundary_half_edge_indices()
            .into_iter()
            .map(|h| self.arc_from_half_edge_index(h))
            .collect()
    }

    /// Returns each boundary loop as its vertex cycle, in the order the
    /// boundary half-edges are chained.
    pub fn boundary_loops(&self) -> Vec<Vec<VertexIndex>> {
        let mut visited = vec![false; self.half_edges.len()];
        let mut loops = Vec::new();

        for start in self.boundary_half_edge_indices() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut h = start;
            loop {
                visited[h] = true;
                cycle.push(self.half_edges[h].to_vertex);
                h = self.half_edges[h].next;
                if h == start {
                    break;
                }
            }
            loops.push(cycle);
        }
        loops
    }

    /// Number of sides of the face (or hole) that contains `he`.
    pub fn nb_sides(&self, he: HalfEdgeIndex) -> usize {
        let mut nb = 0;
        let mut h = he;
        loop {
            h = self.half_edges[h].next;
            nb += 1;
            if h == he {
                return nb;
            }
        }
    }

    pub fn nb_sides_of_face(&self, f: FaceIndex) -> usize {
        self.nb_sides(self.face_half_edges[f])
    }

    /// Returns the indices of the half-edges bounding face `f`, following
    /// `next` from its anchor.
    pub fn half_edges_of_face(&self, f: FaceIndex) -> SmallVec<[HalfEdgeIndex; 4]> {
        let start = self.face_half_edges[f];
        let mut result = SmallVec::new();
        let mut h = start;
        loop {
            result.push(h);
            h = self.half_edges[h].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// Vertices of face `f`, as the targets of its half-edge cycle.
    pub fn vertices_of_face(&self, f: FaceIndex) -> SmallVec<[VertexIndex; 4]> {
        self.half_edges_of_face(f)
            .into_iter()
            .map(|h| self.half_edges[h].to_vertex)
            .collect()
    }

    /// An edge is (topologically) flippable iff it does not lie on the
    /// boundary and is bordered by two triangles.
    pub fn is_flippable(&self, he: HalfEdgeIndex) -> bool {
        let opp = self.half_edges[he].opposite;
        if self.half_edges[he].is_boundary() || self.half_edges[opp].is_boundary() {
            return false;
        }
        self.nb_sides(he) == 3 && self.nb_sides(opp) == 3
    }
}
