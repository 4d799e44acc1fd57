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

use std::collections::hash_map::Entry;

use ahash::AHashMap;

use crate::{
    error::TopologyError,
    mesh::{
        basic_types::{
            Arc, Edge, EdgeIndex, FaceIndex, HalfEdgeDataStructure, HalfEdgeIndex, PolygonalFace,
            Triangle, VertexIndex,
        },
        half_edge::HalfEdge,
    },
};

impl HalfEdgeDataStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the structure to the empty mesh.
    pub fn clear(&mut self) {
        self.half_edges.clear();
        self.vertex_half_edges.clear();
        self.face_half_edges.clear();
        self.edge_half_edges.clear();
        self.arc_map.clear();
    }

    /// Builds the half-edge structure from oriented faces and their unoriented
    /// edges.
    ///
    /// Triangles and polygons of any size go through the same path. Vertex and
    /// face numbering are kept as given: face `f` of the output is `faces[f]`.
    /// `edges` is typically obtained from [`Self::unordered_edges`]; edge `e`
    /// owns half-edges `2e` and `2e + 1`. Neither `faces` nor `edges` are
    /// referenced once this returns.
    ///
    /// On error the structure is left empty.
    pub fn build<F: AsRef<[VertexIndex]>>(
        &mut self,
        num_vertices: usize,
        faces: &[F],
        edges: &[Edge],
    ) -> Result<(), TopologyError> {
        self.clear();
        let result = self.build_tables(num_vertices, faces, edges);
        match &result {
            Ok(()) => tracing::debug!(
                vertices = self.nb_vertices(),
                edges = self.nb_edges(),
                faces = self.nb_faces(),
                half_edges = self.nb_half_edges(),
                "half-edge structure built"
            ),
            Err(err) => {
                tracing::debug!(%err, "half-edge structure build failed");
                self.clear();
            }
        }
        result
    }

    /// Builds from faces alone, deriving edges and vertex count first.
    pub fn build_from_faces<F: AsRef<[VertexIndex]>>(
        &mut self,
        faces: &[F],
    ) -> Result<(), TopologyError> {
        let (num_vertices, edges) = Self::unordered_edges(faces);
        self.build(num_vertices, faces, &edges)
    }

    pub fn build_from_triangles(&mut self, triangles: &[Triangle]) -> Result<(), TopologyError> {
        self.build_from_faces(triangles)
    }

    pub fn build_from_polygonal_faces(
        &mut self,
        faces: &[PolygonalFace],
    ) -> Result<(), TopologyError> {
        self.build_from_faces(faces)
    }

    fn build_tables<F: AsRef<[VertexIndex]>>(
        &mut self,
        num_vertices: usize,
        faces: &[F],
        edges: &[Edge],
    ) -> Result<(), TopologyError> {
        let arc_faces = Self::arc_faces(num_vertices, faces)?;

        // 1) Two half-edges per unoriented edge: 2e runs start->end, 2e+1 end->start.
        let mut seen_edges: AHashMap<Edge, EdgeIndex> = AHashMap::with_capacity(edges.len());
        let mut first_outgoing: Vec<Option<HalfEdgeIndex>> = vec![None; num_vertices];
        let mut boundary_outgoing: Vec<Option<HalfEdgeIndex>> = vec![None; num_vertices];
        let mut face_anchor: Vec<Option<HalfEdgeIndex>> = vec![None; faces.len()];

        self.half_edges.reserve(2 * edges.len());
        self.edge_half_edges.reserve(edges.len());
        self.arc_map.reserve(2 * edges.len());

        for (ei, edge) in edges.iter().enumerate() {
            let (i, j) = (edge.start(), edge.end());
            if seen_edges.insert(*edge, ei).is_some() {
                return Err(TopologyError::DuplicateEdge { from: i, to: j });
            }

            let h0 = 2 * ei;
            let h1 = h0 + 1;
            let mut he0 = HalfEdge::new(j, ei, h1);
            let mut he1 = HalfEdge::new(i, ei, h0);
            he0.face = arc_faces.get(&(i, j)).copied();
            he1.face = arc_faces.get(&(j, i)).copied();

            if he0.is_boundary() && he1.is_boundary() {
                return Err(TopologyError::DanglingEdge { edge: ei });
            }

            for (h, he, from) in [(h0, &he0, i), (h1, &he1, j)] {
                first_outgoing[from].get_or_insert(h);
                match he.face {
                    Some(f) => {
                        face_anchor[f].get_or_insert(h);
                    }
                    None => {
                        boundary_outgoing[from].get_or_insert(h);
                    }
                }
            }

            self.arc_map.insert((i, j), h0);
            self.arc_map.insert((j, i), h1);
            self.edge_half_edges.push(h0);
            self.half_edges.push(he0);
            self.half_edges.push(he1);
        }

        // 2) Chain interior half-edges around their faces.
        for face in faces {
            let vs = face.as_ref();
            let n = vs.len();
            for k in 0..n {
                let h = self.arc_half_edge(vs[k], vs[(k + 1) % n])?;
                let h_next = self.arc_half_edge(vs[(k + 1) % n], vs[(k + 2) % n])?;
                self.half_edges[h].next = h_next;
            }
        }

        // 3) Chain boundary half-edges around the holes.
        self.stitch_boundary()?;

        // 4) Anchors. Boundary vertices must sit on a boundary half-edge.
        self.vertex_half_edges = boundary_outgoing
            .into_iter()
            .zip(first_outgoing)
            .enumerate()
            .map(|(v, (boundary, any))| {
                boundary
                    .or(any)
                    .ok_or(TopologyError::IsolatedVertex { vertex: v })
            })
            .collect::<Result<_, _>>()?;

        self.face_half_edges = face_anchor
            .into_iter()
            .enumerate()
            .map(|(f, anchor)| {
                anchor.ok_or(TopologyError::DegenerateFace {
                    face: f,
                    len: faces[f].as_ref().len(),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(())
    }

    /// Maps every directed arc of every face to that face, rejecting arcs
    /// claimed twice (non-manifold edge or inconsistent orientation).
    fn arc_faces<F: AsRef<[VertexIndex]>>(
        num_vertices: usize,
        faces: &[F],
    ) -> Result<AHashMap<Arc, FaceIndex>, TopologyError> {
        let mut arc_faces: AHashMap<Arc, FaceIndex> = AHashMap::new();

        for (fi, face) in faces.iter().enumerate() {
            let vs = face.as_ref();
            let n = vs.len();
            if n < 3 {
                return Err(TopologyError::DegenerateFace { face: fi, len: n });
            }

            for (k, &a) in vs.iter().enumerate() {
                let b = vs[(k + 1) % n];
                if a >= num_vertices {
                    return Err(TopologyError::VertexOutOfRange {
                        face: fi,
                        vertex: a,
                        num_vertices,
                    });
                }
                if a == b {
                    return Err(TopologyError::DegenerateFace { face: fi, len: n });
                }

                match arc_faces.entry((a, b)) {
                    Entry::Occupied(e) => {
                        return Err(TopologyError::NonManifoldArc {
                            from: a,
                            to: b,
                            first_face: *e.get(),
                            second_face: fi,
                        });
                    }
                    Entry::Vacant(e) => {
                        e.insert(fi);
                    }
                }
            }
        }

        Ok(arc_faces)
    }

    fn arc_half_edge(&self, from: VertexIndex, to: VertexIndex) -> Result<HalfEdgeIndex, TopologyError> {
        self.arc_map
            .get(&(from, to))
            .copied()
            .ok_or(TopologyError::UnknownEdge { from, to })
    }

    /// - Boundary half-edges have `face == None` and an interior opposite.
    /// - For each boundary `b = u->v`, `b.next` is the next boundary spoke
    ///   leaving `v`, found by rotating around `v` through interior faces.
    fn stitch_boundary(&mut self) -> Result<(), TopologyError> {
        let m = self.half_edges.len();
        let borders: Vec<HalfEdgeIndex> = (0..m)
            .filter(|&h| self.half_edges[h].is_boundary())
            .collect();

        let mut outgoing_count: AHashMap<VertexIndex, usize> = AHashMap::new();
        for &b in &borders {
            *outgoing_count.entry(self.source(b)).or_default() += 1;
        }
        for (&v, &count) in &outgoing_count {
            if count > 1 {
                tracing::warn!(vertex = v, boundary_spokes = count, "butterfly vertex encountered");
            }
        }

        let mut next_of = Vec::with_capacity(borders.len());
        for &b in &borders {
            let mut t = self.half_edges[b].opposite; // interior, leaves head(b)
            let mut steps = 0usize;
            let b_next = loop {
                let cand = self.half_edges[self.prev(t)].opposite;
                if self.half_edges[cand].is_boundary() {
                    break cand;
                }
                t = cand;
                steps += 1;
                if steps > m {
                    return Err(TopologyError::BrokenBoundary { half_edge: b });
                }
            };
            next_of.push(b_next);
        }

        // Every boundary half-edge must have exactly one predecessor.
        let mut claimed = vec![false; m];
        for (&b, &nb) in borders.iter().zip(&next_of) {
            if std::mem::replace(&mut claimed[nb], true) {
                return Err(TopologyError::BrokenBoundary { half_edge: b });
            }
            self.half_edges[b].next = nb;
        }

        #[cfg(debug_assertions)]
        {
            for &b in &borders {
                let n = self.half_edges[b].next;
                assert!(self.half_edges[n].is_boundary(), "b.next must be border at {}", b);
                assert_eq!(
                    self.source(n),
                    self.half_edges[b].to_vertex,
                    "b.next must leave head(b) at {}",
                    b
                );
            }
        }

        Ok(())
    }

    /// Flips the edge carrying `he` to the other diagonal of the quadrilateral
    /// formed by its two triangles.
    ///
    /// With `update_arc_map == false` the arc map is left stale, so
    /// [`Self::half_edge_index_from_arc`] must not be used afterwards. Only
    /// worth it in hot flip loops that never query by vertex pair.
    ///
    /// The edge must be flippable, see [`Self::is_flippable`].
    pub fn flip(&mut self, he: HalfEdgeIndex, update_arc_map: bool) {
        debug_assert!(self.is_flippable(he), "flip: edge of half-edge {he} is not flippable");

        // --- 1) the diagonal v1->v2 and the two triangles around it ---
        let i1 = he;
        let i2 = self.half_edges[i1].opposite;
        let v2 = self.half_edges[i1].to_vertex;
        let v1 = self.half_edges[i2].to_vertex;
        let f1 = self.half_edges[i1].face;
        let f2 = self.half_edges[i2].face;
        let i1_next = self.half_edges[i1].next; // v2->c
        let i2_next = self.half_edges[i2].next; // v1->d
        let i1_next2 = self.half_edges[i1_next].next; // c->v1
        let i2_next2 = self.half_edges[i2_next].next; // d->v2

        // --- 2) i1 becomes d->c in (d, c, v1), i2 becomes c->d in (c, d, v2) ---
        self.half_edges[i1_next2].next = i2_next;
        self.half_edges[i2_next2].next = i1_next;
        self.half_edges[i2_next].next = i1;
        self.half_edges[i1_next].next = i2;
        self.half_edges[i2_next].face = f1;
        self.half_edges[i1_next].face = f2;
        self.half_edges[i1].next = i1_next2;
        self.half_edges[i2].next = i2_next2;
        let c = self.half_edges[i1_next].to_vertex;
        let d = self.half_edges[i2_next].to_vertex;
        self.half_edges[i1].to_vertex = c;
        self.half_edges[i2].to_vertex = d;

        // --- 3) anchors ---
        // Boundary anchors are never i1 or i2, since the edge is interior.
        if self.vertex_half_edges[v1] == i1 {
            self.vertex_half_edges[v1] = i2_next;
        }
        if self.vertex_half_edges[v2] == i2 {
            self.vertex_half_edges[v2] = i1_next;
        }
        if let Some(f) = f1 {
            self.face_half_edges[f] = i1;
        }
        if let Some(f) = f2 {
            self.face_half_edges[f] = i2;
        }
        // The edge keeps half-edges i1 and i2, only its endpoints changed.

        if update_arc_map {
            self.arc_map.remove(&(v1, v2));
            self.arc_map.remove(&(v2, v1));
            self.arc_map.insert((d, c), i1);
            self.arc_map.insert((c, d), i2);
        }

        tracing::trace!(half_edge = he, old = ?(v1, v2), new = ?(d, c), "edge flipped");
    }
}
