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

use crate::{error::ValidationError, mesh::basic_types::HalfEdgeDataStructure};

impl HalfEdgeDataStructure {
    /// Checks the whole structure for consistency, logging one warning per
    /// violated invariant.
    pub fn is_valid(&self, check_arc_map: bool) -> bool {
        let errors = self.validate(check_arc_map);
        for err in &errors {
            tracing::warn!("[HalfEdgeDataStructure::is_valid] {err}");
        }
        errors.is_empty()
    }

    /// Collects every violated invariant instead of stopping at the first.
    ///
    /// Checked: opposite involution, vertex anchors leaving their vertex,
    /// face anchors and `next` cycles staying on their face, boundary
    /// vertices anchored on the boundary, and (with `check_arc_map`) that each
    /// mapped arc `(i, j)` resolves to a half-edge from `i` to `j`.
    pub fn validate(&self, check_arc_map: bool) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let m = self.half_edges.len();

        for (i, he) in self.half_edges.iter().enumerate() {
            let j = he.opposite;
            match self.half_edges.get(j) {
                None => errors.push(ValidationError::OppositeOutOfRange {
                    half_edge: i,
                    opposite: j,
                }),
                Some(opp) if opp.opposite != i => {
                    errors.push(ValidationError::OppositeNotInvolutive {
                        half_edge: i,
                        opposite: j,
                        back: opp.opposite,
                    })
                }
                Some(_) => {}
            }
            if he.next >= m {
                errors.push(ValidationError::NextOutOfRange {
                    half_edge: i,
                    next: he.next,
                });
            }
        }
        // Traversals below assume in-range links.
        if !errors.is_empty() {
            return errors;
        }

        for (v, &h) in self.vertex_half_edges.iter().enumerate() {
            if h >= m {
                errors.push(ValidationError::AnchorOutOfRange {
                    entity: "vertex",
                    index: v,
                    half_edge: h,
                });
                continue;
            }
            let opposite = self.half_edges[h].opposite;
            let points_to = self.half_edges[opposite].to_vertex;
            if points_to != v {
                errors.push(ValidationError::VertexAnchorNotOutgoing {
                    vertex: v,
                    half_edge: h,
                    opposite,
                    points_to,
                });
            }
        }

        for (f, &start) in self.face_half_edges.iter().enumerate() {
            if start >= m {
                errors.push(ValidationError::AnchorOutOfRange {
                    entity: "face",
                    index: f,
                    half_edge: start,
                });
                continue;
            }
            if self.half_edges[start].face != Some(f) {
                errors.push(ValidationError::FaceAnchorMismatch {
                    face: f,
                    half_edge: start,
                    found: self.half_edges[start].face,
                });
            }

            let mut h = start;
            let mut steps = 0;
            loop {
                let he = &self.half_edges[h];
                if he.face != Some(f) {
                    errors.push(ValidationError::FaceCycleLeaks {
                        face: f,
                        half_edge: h,
                        found: he.face,
                    });
                }
                h = he.next;
                steps += 1;
                if h == start {
                    break;
                }
                if steps > m {
                    errors.push(ValidationError::FaceCycleOpen {
                        face: f,
                        half_edge: start,
                    });
                    break;
                }
            }
        }

        for (e, &h) in self.edge_half_edges.iter().enumerate() {
            if h >= m {
                errors.push(ValidationError::AnchorOutOfRange {
                    entity: "edge",
                    index: e,
                    half_edge: h,
                });
            }
        }

        for v in self.boundary_vertices() {
            let Some(&h) = self.vertex_half_edges.get(v) else {
                continue;
            };
            if h >= m {
                continue; // already reported
            }
            if let Some(face) = self.half_edges[h].face {
                errors.push(ValidationError::BoundaryVertexAnchor {
                    vertex: v,
                    half_edge: h,
                    face,
                });
            }
        }

        if check_arc_map {
            for (&(from, to), &h) in &self.arc_map {
                let Some(he) = self.half_edges.get(h) else {
                    errors.push(ValidationError::AnchorOutOfRange {
                        entity: "arc",
                        index: from,
                        half_edge: h,
                    });
                    continue;
                };
                if he.to_vertex != to {
                    errors.push(ValidationError::ArcTargetMismatch {
                        from,
                        to,
                        half_edge: h,
                        points_to: he.to_vertex,
                    });
                }
                let opposite = he.opposite;
                let points_to = self.half_edges[opposite].to_vertex;
                if points_to != from {
                    errors.push(ValidationError::ArcSourceMismatch {
                        from,
                        to,
                        half_edge: h,
                        opposite,
                        points_to,
                    });
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::basic_types::Triangle;

    fn two_triangles() -> HalfEdgeDataStructure {
        let mut mesh = HalfEdgeDataStructure::new();
        mesh.build_from_triangles(&[Triangle::new(0, 1, 2), Triangle::new(2, 1, 3)])
            .unwrap();
        mesh
    }

    #[test]
    fn reports_every_broken_anchor() {
        let mut mesh = two_triangles();
        // h0 runs 0->1 inside face 0
        mesh.vertex_half_edges[0] = 0;
        mesh.face_half_edges[1] = 0;

        let errors = mesh.validate(true);
        assert_eq!(errors.len(), 5, "{errors:?}");
        assert!(errors.contains(&ValidationError::BoundaryVertexAnchor {
            vertex: 0,
            half_edge: 0,
            face: 0,
        }));
        assert!(errors.contains(&ValidationError::FaceAnchorMismatch {
            face: 1,
            half_edge: 0,
            found: Some(0),
        }));
        let leaks = errors
            .iter()
            .filter(|e| matches!(e, ValidationError::FaceCycleLeaks { face: 1, .. }))
            .count();
        assert_eq!(leaks, 3);
        assert!(!mesh.is_valid(true));
    }

    #[test]
    fn reports_broken_opposites() {
        let mut mesh = two_triangles();
        mesh.half_edges[0].opposite = 2;

        let errors = mesh.validate(false);
        assert_eq!(
            errors,
            vec![
                ValidationError::OppositeNotInvolutive {
                    half_edge: 0,
                    opposite: 2,
                    back: 3,
                },
                ValidationError::OppositeNotInvolutive {
                    half_edge: 1,
                    opposite: 0,
                    back: 2,
                },
            ]
        );
    }

    #[test]
    fn reports_out_of_range_links() {
        let mut mesh = two_triangles();
        mesh.half_edges[3].next = 99;
        mesh.half_edges[4].opposite = 42;

        let errors = mesh.validate(true);
        assert!(errors.contains(&ValidationError::NextOutOfRange {
            half_edge: 3,
            next: 99,
        }));
        assert!(errors.contains(&ValidationError::OppositeOutOfRange {
            half_edge: 4,
            opposite: 42,
        }));
    }
}
