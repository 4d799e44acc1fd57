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

use crate::mesh::basic_types::{EdgeIndex, FaceIndex, HalfEdgeIndex, VertexIndex};

/// One directed side of an unoriented edge.
///
/// A half-edge points to `to_vertex`, borders `face` (or the exterior when
/// `face` is `None`), lies on the unoriented edge `edge`, and is linked to
/// its `opposite` on the same edge and to the `next` half-edge around its
/// face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub to_vertex: VertexIndex,  // vertex it ends at
    pub face: Option<FaceIndex>, // None for boundary half-edges
    pub edge: EdgeIndex,
    pub opposite: HalfEdgeIndex,
    pub next: HalfEdgeIndex,
}

impl HalfEdge {
    pub fn new(to_vertex: VertexIndex, edge: EdgeIndex, opposite: HalfEdgeIndex) -> Self {
        Self {
            to_vertex,
            face: None,
            edge,
            opposite,
            next: opposite, // temp; rewired once faces are walked
        }
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.face.is_none()
    }
}
