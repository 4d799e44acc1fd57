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

use std::collections::BTreeSet;

use ahash::AHashSet;

use crate::mesh::basic_types::{Edge, HalfEdgeDataStructure, PolygonalFace, Triangle, VertexIndex};

impl HalfEdgeDataStructure {
    /// Collects the distinct unoriented edges of the given oriented faces.
    ///
    /// Returns the number of distinct vertices referenced together with the
    /// edges in ascending canonical order. Vertex numbering is expected to be
    /// dense and zero-based, so the count is one past the largest index.
    pub fn unordered_edges<F: AsRef<[VertexIndex]>>(faces: &[F]) -> (usize, Vec<Edge>) {
        let mut vertex_set = AHashSet::new();
        let mut edge_set = BTreeSet::new();

        for face in faces {
            let vs = face.as_ref();
            let n = vs.len();
            for (i, &a) in vs.iter().enumerate() {
                let b = vs[(i + 1) % n];
                edge_set.insert(Edge::new(a, b));
                vertex_set.insert(a);
            }
        }

        (vertex_set.len(), edge_set.into_iter().collect())
    }

    pub fn unordered_edges_from_triangles(triangles: &[Triangle]) -> (usize, Vec<Edge>) {
        Self::unordered_edges(triangles)
    }

    pub fn unordered_edges_from_polygonal_faces(faces: &[PolygonalFace]) -> (usize, Vec<Edge>) {
        Self::unordered_edges(faces)
    }
}
